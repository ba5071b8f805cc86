// crates/split_pages/src/config.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};

use site_manifest::{load_manifest, SiteManifest, BUILTIN_MANIFEST};

/// Environment variable consulted when `--manifest` is not given.
pub const MANIFEST_ENV: &str = "SPLIT_PAGES_MANIFEST";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory the documents are read from and written to.
    pub dir: PathBuf,
    /// Name of the document to split.
    pub source: String,
    /// Overrides the manifest's landing document name.
    pub landing: Option<String>,
    /// TOML manifest replacing the built-in section table.
    pub manifest_path: Option<PathBuf>,
    pub verbose: bool,
}

pub fn build_cli() -> Command {
    Command::new("split_pages")
        .version("0.1.0")
        .about("Splits one marker-delimited HTML guide into standalone pages plus a landing page")
        .arg(
            Arg::new("dir")
                .long("dir")
                .num_args(1)
                .default_value(".")
                .help("Directory holding the source document and receiving the pages"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .num_args(1)
                .default_value("index.html")
                .help("Name of the document to split"),
        )
        .arg(
            Arg::new("landing")
                .long("landing")
                .num_args(1)
                .help("Name of the landing document (default from the manifest)"),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .num_args(1)
                .help("TOML manifest with the site, nav and section tables"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
}

impl AppConfig {
    /// `env_manifest` is the value of [`MANIFEST_ENV`], used only when the flag is absent.
    pub fn from_matches(matches: &ArgMatches, env_manifest: Option<String>) -> Self {
        let manifest_path = matches
            .get_one::<String>("manifest")
            .cloned()
            .or(env_manifest.filter(|value| !value.trim().is_empty()))
            .map(PathBuf::from);
        Self {
            dir: matches
                .get_one::<String>("dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            source: matches
                .get_one::<String>("source")
                .cloned()
                .unwrap_or_else(|| "index.html".to_string()),
            landing: matches.get_one::<String>("landing").cloned(),
            manifest_path,
            verbose: matches.get_flag("verbose"),
        }
    }

    /// The manifest to run with: the file when one is configured, otherwise
    /// the built-in table, with the landing override applied.
    pub fn manifest(&self) -> Result<SiteManifest> {
        let mut manifest = match &self.manifest_path {
            Some(path) => load_manifest(path)?,
            None => BUILTIN_MANIFEST.clone(),
        };
        if let Some(landing) = &self.landing {
            manifest.site.landing_name = landing.clone();
            manifest.validate()?;
        }
        Ok(manifest)
    }
}

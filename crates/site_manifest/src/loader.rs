// crates/site_manifest/src/loader.rs

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::SiteManifest;

/// Reads and validates a TOML manifest from disk.
///
/// The file carries the same three parts as the built-in manifest:
///
/// ```toml
/// [site]
/// lang = "en"
/// # ...remaining SiteInfo fields
///
/// [[nav]]
/// label = "Home"
/// target = "index.html"
///
/// [[sections]]
/// name = "intro"
/// start_marker = "<!-- intro -->"
/// # ...remaining SectionSpec fields
/// ```
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<SiteManifest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading manifest {}", path.display()))?;
    let manifest = parse_manifest(&content)
        .with_context(|| format!("Invalid manifest {}", path.display()))?;
    log::debug!(
        "Loaded manifest {} ({} sections, {} nav links)",
        path.display(),
        manifest.sections.len(),
        manifest.nav.len()
    );
    Ok(manifest)
}

/// Parses a manifest from TOML text and validates it.
pub fn parse_manifest(content: &str) -> Result<SiteManifest> {
    let manifest: SiteManifest =
        toml::from_str(content).map_err(|e| anyhow!("Failed to parse TOML: {}", e))?;
    manifest.validate()?;
    Ok(manifest)
}

impl SiteManifest {
    /// Checks the invariants the splitter relies on: unique section names and
    /// output names, non-empty start markers and output names, and no section
    /// writing over the landing document.
    pub fn validate(&self) -> Result<()> {
        if self.site.landing_name.trim().is_empty() {
            return Err(anyhow!("Landing document name must not be empty"));
        }
        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for spec in &self.sections {
            if !names.insert(spec.name.as_str()) {
                return Err(anyhow!("Duplicate section name '{}'", spec.name));
            }
            if spec.start_marker.is_empty() {
                return Err(anyhow!("Section '{}' has an empty start marker", spec.name));
            }
            if spec.output_name.trim().is_empty() {
                return Err(anyhow!("Section '{}' has an empty output name", spec.name));
            }
            if spec.output_name == self.site.landing_name {
                return Err(anyhow!(
                    "Section '{}' would overwrite the landing document {}",
                    spec.name,
                    spec.output_name
                ));
            }
            if !outputs.insert(spec.output_name.as_str()) {
                return Err(anyhow!(
                    "Output name {} is used by more than one section",
                    spec.output_name
                ));
            }
        }
        Ok(())
    }
}

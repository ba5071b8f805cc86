// crates/split_pages/src/main.rs

use std::env;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use document_store::FsDocumentStore;
use split_pages::config::{build_cli, AppConfig, MANIFEST_ENV};
use split_pages::{follow_up_steps, split_document, PageOutcome};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn announce(outcome: &PageOutcome) {
    match outcome {
        PageOutcome::Created { output_name, .. } => println!("Created {}", output_name),
        // Already reported as a warning while splitting.
        PageOutcome::Skipped { .. } => {}
        PageOutcome::Failed { output_name, reason, .. } => {
            eprintln!("Error: could not write {}: {}", output_name, reason);
        }
    }
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches, env::var(MANIFEST_ENV).ok());
    init_logging(config.verbose);
    log::debug!("Configuration: {:?}", config);

    let manifest = config.manifest()?;
    let store = FsDocumentStore::new(config.dir.clone());
    log::debug!("Document store root: {}", store.root().display());
    let report = split_document(&store, &manifest, &config.source)?;

    for outcome in &report.sections {
        announce(outcome);
    }
    match &report.landing {
        PageOutcome::Created { output_name, .. } => println!(
            "Created {} (rename to {} after backup)",
            output_name, config.source
        ),
        other => announce(other),
    }

    println!("\nDone! Remember to:");
    for (i, step) in follow_up_steps(&manifest, &config.source).iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }

    let failures = report.failures();
    if !failures.is_empty() {
        return Err(anyhow!("{} document(s) could not be written", failures.len()));
    }
    Ok(())
}

// crates/split_pages/src/lib.rs

use anyhow::{anyhow, Context, Result};

use assemble_page::{render_landing, render_section_page};
use document_store::DocumentStore;
use section_extractor::processor::{
    process_section_with_processor, DefaultSectionProcessor, SectionProcessor,
};
use site_manifest::SiteManifest;

pub mod config;

/// Name used in reports for the landing document.
pub const LANDING_SECTION: &str = "landing";

/// What happened to one output document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    Created { section: String, output_name: String },
    /// The section's start marker is not in the source document.
    Skipped { section: String },
    Failed { section: String, output_name: String, reason: String },
}

impl PageOutcome {
    pub fn section(&self) -> &str {
        match self {
            PageOutcome::Created { section, .. }
            | PageOutcome::Skipped { section }
            | PageOutcome::Failed { section, .. } => section,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, PageOutcome::Created { .. })
    }
}

/// Per-document results of one run, sections in manifest order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitReport {
    pub sections: Vec<PageOutcome>,
    pub landing: PageOutcome,
}

impl SplitReport {
    /// Output names of the section documents that were written.
    pub fn created(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|outcome| match outcome {
                PageOutcome::Created { output_name, .. } => Some(output_name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Names of the sections whose start marker was missing.
    pub fn skipped(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|outcome| matches!(outcome, PageOutcome::Skipped { .. }))
            .map(PageOutcome::section)
            .collect()
    }

    /// Every failed write, the landing document included.
    pub fn failures(&self) -> Vec<&PageOutcome> {
        self.sections
            .iter()
            .chain(std::iter::once(&self.landing))
            .filter(|outcome| matches!(outcome, PageOutcome::Failed { .. }))
            .collect()
    }
}

/// Splits the source document using the default marker-based extraction.
pub fn split_document(
    store: &dyn DocumentStore,
    manifest: &SiteManifest,
    source_name: &str,
) -> Result<SplitReport> {
    split_document_with_processor(&DefaultSectionProcessor, store, manifest, source_name)
}

/// Reads `source_name` once, writes one page per section that is found and
/// then the landing page.
///
/// Missing sections and failed writes are recorded in the report and never
/// stop the run. The only hard errors are an unreadable source and a
/// manifest that would overwrite the source document.
pub fn split_document_with_processor(
    processor: &dyn SectionProcessor,
    store: &dyn DocumentStore,
    manifest: &SiteManifest,
    source_name: &str,
) -> Result<SplitReport> {
    check_output_names(manifest, source_name)?;

    let document = store
        .read(source_name)
        .with_context(|| format!("Failed to read source document {}", source_name))?;
    log::info!(
        "Splitting {} into {} sections",
        source_name,
        manifest.sections.len()
    );

    let mut sections = Vec::with_capacity(manifest.sections.len());
    for spec in &manifest.sections {
        let extracted = match process_section_with_processor(processor, &document, spec) {
            Some(extracted) => extracted,
            None => {
                log::warn!(
                    "Section {} skipped: start marker {:?} not found in {}",
                    spec.name,
                    spec.start_marker,
                    source_name
                );
                sections.push(PageOutcome::Skipped {
                    section: spec.name.clone(),
                });
                continue;
            }
        };
        // A found section is written even when its body is empty; only a
        // missing start marker skips the page.
        let html = render_section_page(manifest, spec, &extracted.body);
        sections.push(write_page(store, &spec.name, &spec.output_name, &html));
    }

    let landing_html = render_landing(manifest);
    let landing = write_page(store, LANDING_SECTION, &manifest.site.landing_name, &landing_html);

    Ok(SplitReport { sections, landing })
}

fn write_page(store: &dyn DocumentStore, section: &str, output_name: &str, html: &str) -> PageOutcome {
    match store.write(output_name, html) {
        Ok(()) => {
            log::debug!("Wrote {} for {}", output_name, section);
            PageOutcome::Created {
                section: section.to_string(),
                output_name: output_name.to_string(),
            }
        }
        Err(err) => {
            log::error!("Failed to write {} for {}: {:#}", output_name, section, err);
            PageOutcome::Failed {
                section: section.to_string(),
                output_name: output_name.to_string(),
                reason: format!("{:#}", err),
            }
        }
    }
}

/// No output may replace the document being split.
fn check_output_names(manifest: &SiteManifest, source_name: &str) -> Result<()> {
    if manifest.site.landing_name == source_name {
        return Err(anyhow!(
            "Landing document {} would overwrite the source document",
            source_name
        ));
    }
    if let Some(spec) = manifest.sections.iter().find(|s| s.output_name == source_name) {
        return Err(anyhow!(
            "Section '{}' would overwrite the source document {}",
            spec.name,
            source_name
        ));
    }
    Ok(())
}

/// The manual steps left to the author after a run.
pub fn follow_up_steps(manifest: &SiteManifest, source_name: &str) -> Vec<String> {
    vec![
        format!("Backup original {}", source_name),
        format!("Rename {} to {}", manifest.site.landing_name, source_name),
        format!("Create {} files", join_names(&manifest.static_resources())),
    ]
}

/// "a", "a and b", "a, b and c"
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

// crates/site_manifest/src/lib.rs

//! The section table and navigation manifest shared by every crate in the
//! page splitter.
//!
//! Everything here is plain data.  The compiled-in guide lives in
//! [`builtin`]; [`loader`] can replace it with a TOML file without changing
//! what the extractor or the renderer see.

use serde::Deserialize;

pub mod builtin;
pub mod loader;

pub use builtin::BUILTIN_MANIFEST;
pub use loader::{load_manifest, parse_manifest};

/// One logical section of the source document and the page it becomes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionSpec {
    /// Unique key within the table.
    pub name: String,
    pub start_marker: String,
    pub end_marker: String,
    /// Page heading, also used for the description meta tag.
    pub title: String,
    /// Name of the document written for this section.
    pub output_name: String,
    /// Script appended after the base script on this section's page only.
    #[serde(default)]
    pub extra_resource: Option<String>,
    /// Heading of this section's card on the landing page.
    pub card_label: String,
    /// One-line blurb under the card heading.
    pub card_description: String,
}

/// A single navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// Ordered navigation links, rendered identically on every page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NavManifest {
    links: Vec<NavLink>,
}

impl NavManifest {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Site-wide literals shared by the section pages and the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// Short name shown as the logo and used as the page-title suffix.
    pub site_name: String,
    /// Full guide title, shown in the landing hero.
    pub guide_title: String,
    pub stylesheet: String,
    /// Script referenced first on every page.
    pub base_script: String,
    /// Where the logo links to on section pages.
    pub home_target: String,
    /// Subtitle paragraph under every section heading.
    pub subtitle: String,
    /// Closing block appended verbatim to every section page body.
    pub footer: String,
    pub landing_description: String,
    pub landing_tagline: String,
    /// Name the landing document is written under.
    pub landing_name: String,
}

/// The complete configuration consumed by the splitter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteManifest {
    pub site: SiteInfo,
    pub nav: NavManifest,
    pub sections: Vec<SectionSpec>,
}

impl SiteManifest {
    /// Looks a section up by its unique name.
    pub fn section(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|spec| spec.name == name)
    }

    /// Static resources the author has to provide next to the generated
    /// pages: the base script followed by every distinct extra resource, in
    /// table order.
    pub fn static_resources(&self) -> Vec<&str> {
        let mut resources = vec![self.site.base_script.as_str()];
        for extra in self.sections.iter().filter_map(|s| s.extra_resource.as_deref()) {
            if !resources.contains(&extra) {
                resources.push(extra);
            }
        }
        resources
    }
}

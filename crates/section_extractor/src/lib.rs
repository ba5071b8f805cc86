// crates/section_extractor/src/lib.rs

//! Marker-delimited section extraction.
//!
//! A section is the text between the first occurrence of a start marker and
//! the first occurrence of an end marker after it.  Markers are literal
//! substrings; the document is never parsed.

pub mod processor;
pub mod utils;

pub use utils::marker_utils::{SectionBounds, SectionEnd};

use utils::marker_utils::{locate_section, section_body};

/// Extracts the text between `start_marker` and `end_marker`, trimmed of
/// surrounding whitespace.
///
/// * Start marker absent: `None`.
/// * End marker absent after the start marker: everything up to the end of
///   the document.
///
/// Only the first start marker and the first end marker following it count;
/// later duplicates are ignored.  Whether the markers of different sections
/// appear in a sensible order is up to the author of the document.
pub fn extract_section(document: &str, start_marker: &str, end_marker: &str) -> Option<String> {
    locate_section(document, start_marker, end_marker)
        .map(|bounds| section_body(document, &bounds))
}

// crates/section_extractor/src/utils/marker_utils.rs

/// How a located section ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionEnd {
    /// The end marker was found after the start marker.
    Marker,
    /// No end marker after the start marker; the section runs to the end of input.
    EndOfDocument,
}

/// Byte offsets of a section body inside its document, untrimmed.
/// `start` is the first byte after the start marker; `end` is the first byte
/// of the end marker, or the document length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
    pub terminator: SectionEnd,
}

/// Returns the byte offset of the first occurrence of `marker` at or after `from`.
/// Markers are literal text, never patterns.
pub fn find_marker(document: &str, marker: &str, from: usize) -> Option<usize> {
    document
        .get(from..)
        .and_then(|rest| rest.find(marker))
        .map(|idx| from + idx)
}

/// Locates the region between the first `start_marker` and the first
/// `end_marker` that follows it.
///
/// Returns `None` only when the start marker is absent. A missing end marker
/// is not a failure: the region then extends to the end of the document.
pub fn locate_section(document: &str, start_marker: &str, end_marker: &str) -> Option<SectionBounds> {
    let start = find_marker(document, start_marker, 0)? + start_marker.len();
    let bounds = match find_marker(document, end_marker, start) {
        Some(end) => SectionBounds {
            start,
            end,
            terminator: SectionEnd::Marker,
        },
        None => SectionBounds {
            start,
            end: document.len(),
            terminator: SectionEnd::EndOfDocument,
        },
    };
    Some(bounds)
}

/// The body inside `bounds`, trimmed of surrounding whitespace.
pub fn section_body(document: &str, bounds: &SectionBounds) -> String {
    document[bounds.start..bounds.end].trim().to_string()
}

/// Counts the non-overlapping occurrences of `marker`. An empty marker counts as zero.
pub fn marker_occurrences(document: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    document.matches(marker).count()
}

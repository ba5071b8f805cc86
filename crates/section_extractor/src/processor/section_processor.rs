// crates/section_extractor/src/processor/section_processor.rs

use site_manifest::SectionSpec;

use crate::utils::marker_utils::{locate_section, marker_occurrences, section_body, SectionBounds, SectionEnd};

/// A section body cut out of the source document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedSection {
    /// Trimmed body text.
    pub body: String,
    /// Where the untrimmed body sits in the source document.
    pub bounds: SectionBounds,
}

/// Trait that abstracts pulling one section out of a document.
pub trait SectionProcessor {
    /// Returns the section described by `spec`, or `None` when its start marker is absent.
    fn process_section(&self, document: &str, spec: &SectionSpec) -> Option<ExtractedSection>;
}

/// Default implementation of the `SectionProcessor` trait.
/// Uses literal marker search and logs the fallback cases at debug level.
pub struct DefaultSectionProcessor;

impl SectionProcessor for DefaultSectionProcessor {
    fn process_section(&self, document: &str, spec: &SectionSpec) -> Option<ExtractedSection> {
        let bounds = match locate_section(document, &spec.start_marker, &spec.end_marker) {
            Some(bounds) => bounds,
            None => {
                log::debug!("Start marker {:?} for {} not found", spec.start_marker, spec.name);
                return None;
            }
        };

        let starts = marker_occurrences(document, &spec.start_marker);
        if starts > 1 {
            log::debug!(
                "Start marker {:?} for {} occurs {} times; using the first",
                spec.start_marker,
                spec.name,
                starts
            );
        }
        if bounds.terminator == SectionEnd::EndOfDocument {
            log::debug!(
                "End marker {:?} for {} not found; section runs to end of document",
                spec.end_marker,
                spec.name
            );
        }

        Some(ExtractedSection {
            body: section_body(document, &bounds),
            bounds,
        })
    }
}

/// Public API function to extract a section using a provided `SectionProcessor` implementation.
pub fn process_section_with_processor(
    processor: &dyn SectionProcessor,
    document: &str,
    spec: &SectionSpec,
) -> Option<ExtractedSection> {
    processor.process_section(document, spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dummy processor that never finds anything.
    pub struct NothingProcessor;

    impl SectionProcessor for NothingProcessor {
        fn process_section(&self, _document: &str, _spec: &SectionSpec) -> Option<ExtractedSection> {
            None
        }
    }

    fn spec(start: &str, end: &str) -> SectionSpec {
        SectionSpec {
            name: "demo".to_string(),
            start_marker: start.to_string(),
            end_marker: end.to_string(),
            title: "Demo".to_string(),
            output_name: "demo.html".to_string(),
            extra_resource: None,
            card_label: "Demo".to_string(),
            card_description: "A demo".to_string(),
        }
    }

    #[test]
    fn test_default_processor_extracts_trimmed_body() {
        let document = "<!--A-->\n   <p>hello</p>\n\n<!--B-->tail";
        let section = DefaultSectionProcessor
            .process_section(document, &spec("<!--A-->", "<!--B-->"))
            .unwrap();
        assert_eq!(section.body, "<p>hello</p>");
        assert_eq!(section.bounds.terminator, SectionEnd::Marker);
        assert_eq!(&document[section.bounds.end..], "<!--B-->tail");
    }

    #[test]
    fn test_default_processor_agrees_with_extract_section() {
        let document = "<!--A-->\u{3000} body \r\n<!--B--><!--C-->\n tail \n";
        for (start, end) in [("<!--A-->", "<!--B-->"), ("<!--C-->", "<!--Z-->"), ("<!--B-->", "<!--C-->")] {
            let section = DefaultSectionProcessor.process_section(document, &spec(start, end)).unwrap();
            assert_eq!(Some(section.body), crate::extract_section(document, start, end));
        }
    }

    #[test]
    fn test_default_processor_uses_first_duplicate() {
        let document = "<!--A-->one<!--B--><!--A-->two<!--B-->";
        let section = DefaultSectionProcessor
            .process_section(document, &spec("<!--A-->", "<!--B-->"))
            .unwrap();
        assert_eq!(section.body, "one");
    }

    #[test]
    fn test_default_processor_missing_start() {
        let result = DefaultSectionProcessor.process_section("no markers here", &spec("<!--A-->", "<!--B-->"));
        assert!(result.is_none());
    }

    #[test]
    fn test_process_with_custom_processor() {
        let document = "<!--A-->hello<!--B-->";
        let result = process_section_with_processor(&NothingProcessor, document, &spec("<!--A-->", "<!--B-->"));
        assert!(result.is_none());
        let result = process_section_with_processor(&DefaultSectionProcessor, document, &spec("<!--A-->", "<!--B-->"));
        assert_eq!(result.unwrap().body, "hello");
    }
}

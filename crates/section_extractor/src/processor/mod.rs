// crates/section_extractor/src/processor/mod.rs

mod section_processor;

pub use section_processor::{
    process_section_with_processor, DefaultSectionProcessor, ExtractedSection, SectionProcessor,
};

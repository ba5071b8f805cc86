// crates/section_extractor/src/utils/mod.rs

pub mod marker_utils;

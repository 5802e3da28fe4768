//! G-code section extraction.

mod extractor;
pub mod markers;

pub use extractor::{parse_str, SectionExtractor};

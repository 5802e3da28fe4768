//! Document model for partitioned G-code.
//!
//! This module defines the intermediate representation that bridges section
//! extraction and output rendering: a `Document` holding exactly one
//! `Section` per `SectionKind`, with every input line kept verbatim.

mod document;
mod section;

pub use document::Document;
pub use section::{Section, SectionKind};

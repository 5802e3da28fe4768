//! Statistics collected during restructuring.

use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Per-section line counts and injection totals for one restructure run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestructureStats {
    /// Lines in the header block
    pub header_lines: u32,

    /// Metadata lines collected before the config block
    pub metadata_lines: u32,

    /// Lines in the config block
    pub config_lines: u32,

    /// Lines in the thumbnail block
    pub thumbnail_lines: u32,

    /// Lines in the executable section (before injection)
    pub executable_lines: u32,

    /// Total input lines across all sections
    pub total_lines: u32,

    /// Number of spaghetti detector commands injected
    pub injected_commands: u32,
}

impl RestructureStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take per-section line counts from a partitioned document.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            header_lines: doc.header.line_count() as u32,
            metadata_lines: doc.metadata.line_count() as u32,
            config_lines: doc.config.line_count() as u32,
            thumbnail_lines: doc.thumbnail.line_count() as u32,
            executable_lines: doc.executable.line_count() as u32,
            total_lines: doc.total_lines() as u32,
            injected_commands: 0,
        }
    }
}

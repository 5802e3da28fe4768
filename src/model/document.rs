//! Document-level types.

use super::{Section, SectionKind};
use serde::{Deserialize, Serialize};

/// A G-code file partitioned into its five sections.
///
/// Every input line belongs to exactly one section, exactly once, in its
/// original relative order within that section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Header block
    pub header: Section,

    /// Metadata lines collected before the first config block
    pub metadata: Section,

    /// Config block
    pub config: Section,

    /// Thumbnail block
    pub thumbnail: Section,

    /// Bulk machine instructions
    pub executable: Section,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            header: Section::new(SectionKind::Header),
            metadata: Section::new(SectionKind::Metadata),
            config: Section::new(SectionKind::Config),
            thumbnail: Section::new(SectionKind::Thumbnail),
            executable: Section::new(SectionKind::Executable),
        }
    }

    /// Get a section by kind.
    pub fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::Header => &self.header,
            SectionKind::Metadata => &self.metadata,
            SectionKind::Config => &self.config,
            SectionKind::Thumbnail => &self.thumbnail,
            SectionKind::Executable => &self.executable,
        }
    }

    /// Get a mutable section by kind.
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::Header => &mut self.header,
            SectionKind::Metadata => &mut self.metadata,
            SectionKind::Config => &mut self.config,
            SectionKind::Thumbnail => &mut self.thumbnail,
            SectionKind::Executable => &mut self.executable,
        }
    }

    /// Append a line to the section of the given kind.
    pub fn push_line(&mut self, kind: SectionKind, line: impl Into<String>) {
        self.section_mut(kind).push(line);
    }

    /// Iterate the sections in the fixed output order:
    /// header, metadata, config, thumbnail, executable.
    pub fn sections_in_output_order(&self) -> impl Iterator<Item = &Section> {
        SectionKind::OUTPUT_ORDER.iter().map(|kind| self.section(*kind))
    }

    /// Total number of lines across all sections.
    pub fn total_lines(&self) -> usize {
        self.sections_in_output_order()
            .map(|section| section.line_count())
            .sum()
    }

    /// Check if the document has no lines in any section.
    pub fn is_empty(&self) -> bool {
        self.sections_in_output_order()
            .all(|section| section.is_empty())
    }

    /// Check if any structural block (header, config, thumbnail) or
    /// metadata line was found. False means the whole input landed in the
    /// executable bucket.
    pub fn has_structure(&self) -> bool {
        self.header.has_content()
            || self.config.has_content()
            || self.thumbnail.has_content()
            || self.metadata.has_content()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

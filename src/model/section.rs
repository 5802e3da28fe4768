//! Section-level types.

use serde::{Deserialize, Serialize};

/// The five buckets a G-code line can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Lines between `; HEADER_BLOCK_START` and `; HEADER_BLOCK_END`,
    /// markers included.
    Header,

    /// Metadata lines (filament usage, ETA, layer count) collected before
    /// the first config block begins.
    Metadata,

    /// Lines between `; CONFIG_BLOCK_START` and `; CONFIG_BLOCK_END`,
    /// markers included.
    Config,

    /// Lines between `; THUMBNAIL_BLOCK_START` and `; THUMBNAIL_BLOCK_END`,
    /// markers included.
    Thumbnail,

    /// Everything not claimed by a block or by metadata classification;
    /// the bulk machine instructions.
    Executable,
}

impl SectionKind {
    /// All section kinds in the fixed output order used by FlashForge
    /// firmware: header, metadata, config, thumbnail, executable.
    pub const OUTPUT_ORDER: [SectionKind; 5] = [
        SectionKind::Header,
        SectionKind::Metadata,
        SectionKind::Config,
        SectionKind::Thumbnail,
        SectionKind::Executable,
    ];
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SectionKind::Header => "header",
            SectionKind::Metadata => "metadata",
            SectionKind::Config => "config",
            SectionKind::Thumbnail => "thumbnail",
            SectionKind::Executable => "executable",
        };
        write!(f, "{}", name)
    }
}

/// An ordered sequence of lines belonging to one section.
///
/// Lines are stored verbatim, including leading/trailing whitespace; the
/// trimmed form is only ever used for marker comparison during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Which bucket this section is
    pub kind: SectionKind,

    /// Lines in input order
    pub lines: Vec<String>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    /// Append a line to the section.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Number of lines in this section.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the section has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if the section contributes to output: at least one line with
    /// a non-whitespace character. Whitespace-only sections are skipped
    /// entirely during reassembly.
    pub fn has_content(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.chars().any(|c| !c.is_whitespace()))
    }

    /// Join the section's lines with `\n`.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

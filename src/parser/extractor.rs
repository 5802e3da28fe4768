//! Single-pass section extraction.

use crate::model::{Document, SectionKind};

use super::markers;

/// Parse G-code content into a partitioned document.
///
/// The input is split on `'\n'` only, so `\r` stays inside line content and
/// CRLF files survive the round trip untouched. Extraction is total: any
/// input partitions cleanly, so no `Result` is needed.
///
/// # Example
///
/// ```
/// use flashpost::parse_str;
///
/// let doc = parse_str("; HEADER_BLOCK_START\n; HEADER_BLOCK_END\nG28");
/// assert_eq!(doc.header.line_count(), 2);
/// assert_eq!(doc.executable.line_count(), 1);
/// ```
pub fn parse_str(content: &str) -> Document {
    SectionExtractor::new().extract(content)
}

/// Stateful line classifier.
///
/// Walks the input once, routing each line into one of the five section
/// buckets. Block markers take precedence over block interiors, config over
/// header over thumbnail; metadata is collected only until the first
/// `; CONFIG_BLOCK_START` is seen, and never resumes afterwards — even
/// between or after later config blocks.
pub struct SectionExtractor {
    in_header: bool,
    in_config: bool,
    in_thumbnail: bool,
    collecting_metadata: bool,
}

impl SectionExtractor {
    /// Create a new extractor in its initial state.
    pub fn new() -> Self {
        Self {
            in_header: false,
            in_config: false,
            in_thumbnail: false,
            collecting_metadata: true,
        }
    }

    /// Partition `content` into a document, consuming the extractor.
    pub fn extract(mut self, content: &str) -> Document {
        let mut doc = Document::new();
        for line in content.split('\n') {
            let kind = self.classify(line.trim());
            doc.push_line(kind, line);
        }

        log::debug!(
            "extracted sections: header={} metadata={} config={} thumbnail={} executable={}",
            doc.header.line_count(),
            doc.metadata.line_count(),
            doc.config.line_count(),
            doc.thumbnail.line_count(),
            doc.executable.line_count(),
        );

        doc
    }

    /// Classify one line by its trimmed form, updating mode flags.
    fn classify(&mut self, trimmed: &str) -> SectionKind {
        // Config block. Seeing the start marker also ends metadata
        // collection permanently.
        if trimmed == markers::CONFIG_BLOCK_START {
            self.in_config = true;
            self.collecting_metadata = false;
            return SectionKind::Config;
        }
        if trimmed == markers::CONFIG_BLOCK_END {
            self.in_config = false;
            return SectionKind::Config;
        }
        if self.in_config {
            return SectionKind::Config;
        }

        // Header block.
        if trimmed == markers::HEADER_BLOCK_START {
            self.in_header = true;
            return SectionKind::Header;
        }
        if trimmed == markers::HEADER_BLOCK_END {
            self.in_header = false;
            return SectionKind::Header;
        }
        if self.in_header {
            return SectionKind::Header;
        }

        // Thumbnail block.
        if trimmed == markers::THUMBNAIL_BLOCK_START {
            self.in_thumbnail = true;
            return SectionKind::Thumbnail;
        }
        if trimmed == markers::THUMBNAIL_BLOCK_END {
            self.in_thumbnail = false;
            return SectionKind::Thumbnail;
        }
        if self.in_thumbnail {
            return SectionKind::Thumbnail;
        }

        // Metadata, only before the first config block.
        if self.collecting_metadata
            && markers::METADATA_FIELDS
                .iter()
                .any(|field| trimmed.contains(field))
        {
            return SectionKind::Metadata;
        }

        SectionKind::Executable
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_one_executable_line() {
        // split('\n') on "" yields a single empty line
        let doc = parse_str("");
        assert_eq!(doc.executable.lines, vec![""]);
        assert_eq!(doc.total_lines(), 1);
    }

    #[test]
    fn test_header_block_markers_retained() {
        let doc = parse_str("; HEADER_BLOCK_START\n; generated by OrcaSlicer\n; HEADER_BLOCK_END");
        assert_eq!(
            doc.header.lines,
            vec![
                "; HEADER_BLOCK_START",
                "; generated by OrcaSlicer",
                "; HEADER_BLOCK_END"
            ]
        );
        assert!(doc.executable.is_empty());
    }

    #[test]
    fn test_marker_matching_trims_whitespace() {
        let doc = parse_str("  ; THUMBNAIL_BLOCK_START\r\ndata\r\n; THUMBNAIL_BLOCK_END\r");
        assert_eq!(doc.thumbnail.line_count(), 3);
        // Original whitespace is preserved in the stored line
        assert_eq!(doc.thumbnail.lines[0], "  ; THUMBNAIL_BLOCK_START\r");
    }

    #[test]
    fn test_metadata_collected_before_config() {
        let doc = parse_str(
            "; filament used [g] = 12.3\n; CONFIG_BLOCK_START\nsetting = 1\n; CONFIG_BLOCK_END",
        );
        assert_eq!(doc.metadata.lines, vec!["; filament used [g] = 12.3"]);
        assert_eq!(doc.config.line_count(), 3);
    }

    #[test]
    fn test_metadata_not_collected_after_first_config_block() {
        let doc = parse_str(
            "; CONFIG_BLOCK_START\n; CONFIG_BLOCK_END\n; filament used [g] = 9.9",
        );
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.executable.lines, vec!["; filament used [g] = 9.9"]);
    }

    #[test]
    fn test_second_config_block_reopens_config_section() {
        // A later START/END pair is still routed to Config, but metadata
        // collection never resumes in between.
        let doc = parse_str(
            "; CONFIG_BLOCK_START\na = 1\n; CONFIG_BLOCK_END\n\
             ; filament cost = 2\n\
             ; CONFIG_BLOCK_START\nb = 2\n; CONFIG_BLOCK_END",
        );
        assert_eq!(doc.config.line_count(), 6);
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.executable.lines, vec!["; filament cost = 2"]);
    }

    #[test]
    fn test_config_marker_wins_inside_header() {
        // Config markers are checked before the header interior rule, so a
        // config block opening mid-header claims its lines.
        let doc = parse_str(
            "; HEADER_BLOCK_START\n; CONFIG_BLOCK_START\nx\n; CONFIG_BLOCK_END\n; HEADER_BLOCK_END",
        );
        assert_eq!(doc.config.line_count(), 3);
        assert_eq!(doc.header.line_count(), 2);
    }

    #[test]
    fn test_metadata_match_is_substring_and_case_sensitive() {
        let doc = parse_str("; total layers count = 137\n; TOTAL LAYERS COUNT = 137");
        assert_eq!(doc.metadata.lines, vec!["; total layers count = 137"]);
        assert_eq!(doc.executable.lines, vec!["; TOTAL LAYERS COUNT = 137"]);
    }

    #[test]
    fn test_every_line_lands_in_exactly_one_section() {
        let input = "; HEADER_BLOCK_START\nG1\n; HEADER_BLOCK_END\n\
                     ; filament used [g] = 10\n; CONFIG_BLOCK_START\ncfg1\n; CONFIG_BLOCK_END\nG2";
        let line_count = input.split('\n').count();
        let doc = parse_str(input);
        assert_eq!(doc.total_lines(), line_count);
    }
}

//! FlashForge-order reassembly of a partitioned document.

use crate::error::Result;
use crate::model::{Document, SectionKind};

use super::{RenderOptions, RestructureStats, SpaghettiDetector};

/// Reassemble a document into the Orca-FlashForge section order.
///
/// Sections are emitted as header, metadata, config, thumbnail, executable.
/// A section participates only if it has non-whitespace content;
/// participating sections are separated by a single blank line, with no
/// trailing separator after the last one.
pub fn to_flashforge(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = FlashForgeRenderer::new(options.clone());
    renderer.render(doc)
}

/// Reassemble a document and collect per-section statistics.
pub fn to_flashforge_with_stats(
    doc: &Document,
    options: &RenderOptions,
) -> Result<(String, RestructureStats)> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = FlashForgeRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// FlashForge G-code renderer.
pub struct FlashForgeRenderer {
    options: RenderOptions,
    stats: RestructureStats,
}

impl FlashForgeRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RestructureStats::new(),
        }
    }

    /// Render the document to reordered G-code.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render the document and return the collected statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<(String, RestructureStats)> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;
        Ok((content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        if self.options.collect_stats {
            self.stats = RestructureStats::from_document(doc);
        }

        let mut detector = SpaghettiDetector::new(self.options.spaghetti_detector);
        let executable = detector.process(&doc.executable.lines);
        if self.options.collect_stats {
            self.stats.injected_commands = detector.injected();
        }

        let mut parts: Vec<String> = Vec::with_capacity(5);
        for section in doc.sections_in_output_order() {
            if section.kind == SectionKind::Executable {
                let joined = executable.join("\n");
                if joined.chars().any(|c| !c.is_whitespace()) {
                    parts.push(joined);
                }
            } else if section.has_content() {
                parts.push(section.joined());
            }
        }

        Ok(parts.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    fn base_options() -> RenderOptions {
        RenderOptions::new().with_spaghetti_detector(false)
    }

    #[test]
    fn test_sections_reordered_with_blank_separators() {
        let doc = parse_str(
            "G2\n; CONFIG_BLOCK_START\ncfg\n; CONFIG_BLOCK_END\n\
             ; HEADER_BLOCK_START\n; HEADER_BLOCK_END",
        );
        let output = to_flashforge(&doc, &base_options()).unwrap();
        assert_eq!(
            output,
            "; HEADER_BLOCK_START\n; HEADER_BLOCK_END\n\n\
             ; CONFIG_BLOCK_START\ncfg\n; CONFIG_BLOCK_END\n\nG2"
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let doc = parse_str("; HEADER_BLOCK_START\n; HEADER_BLOCK_END\nG1");
        let output = to_flashforge(&doc, &base_options()).unwrap();
        assert_eq!(output, "; HEADER_BLOCK_START\n; HEADER_BLOCK_END\n\nG1");
        assert!(!output.contains("THUMBNAIL"));
    }

    #[test]
    fn test_no_trailing_separator_when_executable_is_blank() {
        let doc = parse_str("; HEADER_BLOCK_START\nx\n; HEADER_BLOCK_END\n\n   ");
        let output = to_flashforge(&doc, &base_options()).unwrap();
        assert_eq!(output, "; HEADER_BLOCK_START\nx\n; HEADER_BLOCK_END");
    }

    #[test]
    fn test_detector_injection_counted_in_stats() {
        let doc = parse_str("; filament start gcode\nG1\n; filament end gcode");
        let options = RenderOptions::new().with_spaghetti_detector(true);
        let (output, stats) = to_flashforge_with_stats(&doc, &options).unwrap();

        assert!(output.starts_with("M981 S1 P20000"));
        assert_eq!(stats.injected_commands, 2);
        assert_eq!(stats.executable_lines, 3);
    }

    #[test]
    fn test_whitespace_only_executable_with_injection_still_blank() {
        // Injection happens before the content check; a genuinely blank
        // executable section stays omitted when nothing is injected.
        let doc = parse_str("; HEADER_BLOCK_START\nx\n; HEADER_BLOCK_END\n ");
        let options = RenderOptions::new().with_spaghetti_detector(true);
        let output = to_flashforge(&doc, &options).unwrap();
        assert_eq!(output, "; HEADER_BLOCK_START\nx\n; HEADER_BLOCK_END");
    }
}

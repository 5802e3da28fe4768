//! # flashpost
//!
//! OrcaSlicer G-code post-processor for FlashForge printers.
//!
//! FlashForge firmware expects summary metadata (filament usage, ETA, layer
//! count) ahead of the bulk tool-path instructions. This library partitions
//! a G-code file into its five sections (header, metadata, config,
//! thumbnail, executable) and reassembles them in that fixed order, with
//! optional insertion of M981 spaghetti detector commands around the
//! filament start/end gcode comments.
//!
//! ## Quick Start
//!
//! ```no_run
//! use flashpost::{restructure_file, RestructureOptions};
//!
//! fn main() -> flashpost::Result<()> {
//!     // Restructure a sliced file in place, with a .backup copy
//!     let report = restructure_file("model.gcode", &RestructureOptions::new())?;
//!     println!("{} lines reordered", report.stats.total_lines);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Metadata-first layout**: ETA and filament usage before bulk G-code
//! - **Verbatim lines**: every input line is kept exactly once, unmodified
//! - **Spaghetti detector**: optional M981 command injection
//! - **Backup workflow**: backup-then-overwrite with best-effort restore

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod restructure;

// Re-export commonly used types
pub use detect::{is_orca_gcode, scan_path, scan_str, GcodeFormat};
pub use error::{Error, Result};
pub use model::{Document, Section, SectionKind};
pub use parser::{parse_str, SectionExtractor};
pub use render::{JsonFormat, RenderOptions, RestructureStats, SpaghettiDetector};
pub use restructure::{
    restore_from_backup, restructure_file, BackupStatus, RestructureOptions, RestructureReport,
};

/// Restructure G-code content in memory.
///
/// Runs the full extract, inject, reassemble pipeline without touching the
/// filesystem.
///
/// # Example
///
/// ```
/// use flashpost::{restructure_str, RenderOptions};
///
/// let input = "G2\n; HEADER_BLOCK_START\n; HEADER_BLOCK_END";
/// let options = RenderOptions::new().with_spaghetti_detector(false);
/// let output = restructure_str(input, &options).unwrap();
/// assert_eq!(output, "; HEADER_BLOCK_START\n; HEADER_BLOCK_END\n\nG2");
/// ```
pub fn restructure_str(content: &str, options: &RenderOptions) -> Result<String> {
    let doc = parse_str(content);
    render::to_flashforge(&doc, options)
}

/// Builder for configuring and running G-code restructuring.
///
/// This is the explicit-parameter surface for the detector and backup
/// switches; there is no process-wide configuration.
///
/// # Example
///
/// ```no_run
/// use flashpost::Flashpost;
///
/// let report = Flashpost::new()
///     .with_spaghetti_detector(false)
///     .with_backup(true)
///     .restructure_file("model.gcode")?;
/// # Ok::<(), flashpost::Error>(())
/// ```
pub struct Flashpost {
    options: RestructureOptions,
}

impl Flashpost {
    /// Create a new builder with defaults: backup on, detector on.
    pub fn new() -> Self {
        Self {
            options: RestructureOptions::default(),
        }
    }

    /// Enable or disable spaghetti detector injection.
    pub fn with_spaghetti_detector(mut self, enabled: bool) -> Self {
        self.options = self.options.with_spaghetti_detector(enabled);
        self
    }

    /// Enable or disable the backup copy.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.options = self.options.with_backup(backup);
        self
    }

    /// Restructure a file in place.
    pub fn restructure_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<RestructureReport> {
        restructure_file(path, &self.options)
    }

    /// Restructure content in memory.
    pub fn restructure_str(&self, content: &str) -> Result<String> {
        restructure_str(content, &self.options.render)
    }

    /// Partition content into sections and return a result wrapper.
    pub fn parse(&self, content: &str) -> FlashpostResult {
        FlashpostResult {
            document: parse_str(content),
            render_options: self.options.render.clone(),
        }
    }
}

impl Default for Flashpost {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of partitioning G-code content.
pub struct FlashpostResult {
    /// The partitioned document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl FlashpostResult {
    /// Reassemble into FlashForge section order.
    pub fn to_flashforge(&self) -> Result<String> {
        render::to_flashforge(&self.document, &self.render_options)
    }

    /// Reassemble and collect statistics.
    pub fn to_flashforge_with_stats(&self) -> Result<(String, RestructureStats)> {
        render::to_flashforge_with_stats(&self.document, &self.render_options)
    }

    /// Serialize the partitioned document to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashpost_builder() {
        let flashpost = Flashpost::new()
            .with_spaghetti_detector(false)
            .with_backup(false);

        assert!(!flashpost.options.render.spaghetti_detector);
        assert!(!flashpost.options.backup);
    }

    #[test]
    fn test_flashpost_builder_default() {
        let flashpost = Flashpost::default();
        assert!(flashpost.options.render.spaghetti_detector);
        assert!(flashpost.options.backup);
    }

    #[test]
    fn test_restructure_str_reorders_sections() {
        let input = "G2\n; CONFIG_BLOCK_START\ncfg\n; CONFIG_BLOCK_END\n\
                     ; filament used [g] = 10";
        let options = RenderOptions::new().with_spaghetti_detector(false);
        let output = restructure_str(input, &options).unwrap();
        assert_eq!(
            output,
            "; filament used [g] = 10\n\n; CONFIG_BLOCK_START\ncfg\n; CONFIG_BLOCK_END\n\nG2"
        );
    }

    #[test]
    fn test_parse_and_render_via_result_wrapper() {
        let result = Flashpost::new()
            .with_spaghetti_detector(false)
            .parse("; HEADER_BLOCK_START\n; HEADER_BLOCK_END\nG28");

        assert_eq!(result.document().header.line_count(), 2);
        let output = result.to_flashforge().unwrap();
        assert_eq!(output, "; HEADER_BLOCK_START\n; HEADER_BLOCK_END\n\nG28");
    }

    #[test]
    fn test_result_wrapper_json() {
        let result = Flashpost::new().parse("G28");
        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert!(json.contains("G28"));
    }

    #[test]
    fn test_restructure_str_plain_text_passthrough() {
        // No markers: everything is executable, output equals input
        let input = "G28\nG1 X10 Y10\nG1 X20 Y20";
        let options = RenderOptions::new().with_spaghetti_detector(false);
        assert_eq!(restructure_str(input, &options).unwrap(), input);
    }
}

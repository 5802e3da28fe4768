//! G-code layout detection.
//!
//! Sniffs which structural marker pairs are present and which slicer
//! generated the file. Detection is informational only: extraction is total
//! over arbitrary text, so a file with no recognized markers is still
//! processed (everything lands in the executable section).

use crate::error::{Error, Result};
use crate::parser::markers;
use std::fs;
use std::path::Path;

/// Layout information sniffed from a G-code file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcodeFormat {
    /// A `; HEADER_BLOCK_START` marker was found
    pub has_header_block: bool,
    /// A `; CONFIG_BLOCK_START` marker was found
    pub has_config_block: bool,
    /// A `; THUMBNAIL_BLOCK_START` marker was found
    pub has_thumbnail_block: bool,
    /// Slicer name from the `; generated by <slicer>` header line
    pub generator: Option<String>,
}

impl GcodeFormat {
    /// Check if any structural marker was found.
    pub fn has_structure(&self) -> bool {
        self.has_header_block || self.has_config_block || self.has_thumbnail_block
    }
}

impl std::fmt::Display for GcodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.generator {
            Some(generator) => write!(f, "G-code ({})", generator),
            None => write!(f, "G-code (unknown generator)"),
        }
    }
}

/// Scan G-code content for structural markers and the generator line.
///
/// Total over any input; a plain text file simply reports no structure.
pub fn scan_str(content: &str) -> GcodeFormat {
    let mut format = GcodeFormat {
        has_header_block: false,
        has_config_block: false,
        has_thumbnail_block: false,
        generator: None,
    };

    for line in content.split('\n') {
        let trimmed = line.trim();
        match trimmed {
            markers::HEADER_BLOCK_START => format.has_header_block = true,
            markers::CONFIG_BLOCK_START => format.has_config_block = true,
            markers::THUMBNAIL_BLOCK_START => format.has_thumbnail_block = true,
            _ => {
                if format.generator.is_none() {
                    if let Some(rest) = trimmed.strip_prefix(markers::GENERATED_BY_PREFIX) {
                        let name = rest.trim();
                        if !name.is_empty() {
                            format.generator = Some(name.to_string());
                        }
                    }
                }
            }
        }
    }

    format
}

/// Scan a G-code file for structural markers.
pub fn scan_path<P: AsRef<Path>>(path: P) -> Result<GcodeFormat> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_str(&content))
}

/// Check if content looks like OrcaSlicer output.
pub fn is_orca_gcode(content: &str) -> bool {
    scan_str(content)
        .generator
        .map(|generator| generator.starts_with("OrcaSlicer"))
        .unwrap_or(false)
}

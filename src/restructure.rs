//! File-level restructuring: read, backup, extract, render, write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::parser::parse_str;
use crate::render::{to_flashforge_with_stats, RenderOptions, RestructureStats};

/// Options for restructuring a file in place.
#[derive(Debug, Clone)]
pub struct RestructureOptions {
    /// Rendering options (section reassembly, detector injection)
    pub render: RenderOptions,

    /// Write a `<path>.backup` copy before overwriting the target
    pub backup: bool,
}

impl RestructureOptions {
    /// Create new restructure options with defaults: backup on,
    /// spaghetti detector on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable or disable the backup copy.
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Enable or disable spaghetti detector injection.
    pub fn with_spaghetti_detector(mut self, enabled: bool) -> Self {
        self.render = self.render.with_spaghetti_detector(enabled);
        self
    }
}

impl Default for RestructureOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            backup: true,
        }
    }
}

/// Outcome of the backup phase of a restructure run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// Backup was written to the given path
    Created(PathBuf),
    /// Backup could not be written; processing continued without one
    Failed(String),
    /// Backup was disabled by options
    Disabled,
}

/// Report of a successful restructure run.
#[derive(Debug, Clone)]
pub struct RestructureReport {
    /// Per-section line counts and injection totals
    pub stats: RestructureStats,

    /// What happened to the backup copy
    pub backup: BackupStatus,

    /// Size of the rewritten file in bytes
    pub bytes_written: u64,
}

impl RestructureReport {
    /// Path of the backup file, if one was created.
    pub fn backup_path(&self) -> Option<&Path> {
        match &self.backup {
            BackupStatus::Created(path) => Some(path),
            _ => None,
        }
    }
}

/// Sibling backup path: `model.gcode` becomes `model.gcode.backup`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Filesystem side of a restructure run, kept behind a seam so the
/// two-phase write's failure branches can be driven from tests.
trait TargetWriter {
    fn write_backup(&mut self, path: &Path, content: &str) -> io::Result<()>;
    fn write_target(&mut self, path: &Path, content: &str) -> io::Result<()>;
    fn restore_target(&mut self, backup: &Path, target: &Path) -> io::Result<u64>;
}

struct FsWriter;

impl TargetWriter for FsWriter {
    fn write_backup(&mut self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn write_target(&mut self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn restore_target(&mut self, backup: &Path, target: &Path) -> io::Result<u64> {
        fs::copy(backup, target)
    }
}

/// Restructure a G-code file in place.
///
/// Reads the whole file, writes a backup copy (unless disabled), partitions
/// the lines into sections, reassembles them in FlashForge order, and
/// overwrites the original path. A failed backup is a warning, not an
/// error. If the final write fails and a backup exists, the original
/// content is restored from it on a best-effort basis.
pub fn restructure_file<P: AsRef<Path>>(
    path: P,
    options: &RestructureOptions,
) -> Result<RestructureReport> {
    restructure_with_writer(path.as_ref(), options, &mut FsWriter)
}

fn restructure_with_writer(
    path: &Path,
    options: &RestructureOptions,
    writer: &mut dyn TargetWriter,
) -> Result<RestructureReport> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Phase one: backup copy of the original bytes.
    let backup = if options.backup {
        let backup_file = backup_path(path);
        match writer.write_backup(&backup_file, &content) {
            Ok(()) => BackupStatus::Created(backup_file),
            Err(e) => {
                log::warn!("could not create backup {}: {}", backup_file.display(), e);
                BackupStatus::Failed(e.to_string())
            }
        }
    } else {
        BackupStatus::Disabled
    };

    let doc = parse_str(&content);
    if !doc.has_structure() {
        log::warn!(
            "{}: no structural markers found, entire file treated as executable",
            path.display()
        );
    }

    let (output, stats) = to_flashforge_with_stats(&doc, &options.render)?;

    // Phase two: overwrite the target, restoring from backup on failure.
    if let Err(write_source) = writer.write_target(path, &output) {
        return Err(match &backup {
            BackupStatus::Created(backup_file) => {
                match writer.restore_target(backup_file, path) {
                    Ok(_) => Error::WriteRestored {
                        path: path.to_path_buf(),
                        source: write_source,
                    },
                    Err(restore_err) => Error::RestoreFailed {
                        path: path.to_path_buf(),
                        write_source,
                        restore_error: restore_err.to_string(),
                    },
                }
            }
            _ => Error::Write {
                path: path.to_path_buf(),
                source: write_source,
            },
        });
    }

    Ok(RestructureReport {
        stats,
        backup,
        bytes_written: output.len() as u64,
    })
}

/// Copy `<path>.backup` back over `<path>`, undoing a restructure run.
/// Returns the number of bytes restored.
pub fn restore_from_backup<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    let backup_file = backup_path(path);
    fs::copy(&backup_file, path).map_err(|source| {
        // A readable backup means the copy failed on the target side.
        if backup_file.is_file() {
            Error::Write {
                path: path.to_path_buf(),
                source,
            }
        } else {
            Error::Read {
                path: backup_file,
                source,
            }
        }
    })
}

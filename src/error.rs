//! Error types for the flashpost library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for flashpost operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while restructuring a G-code file.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error outside the read/write phases of a restructure run.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The target file could not be read. No backup is attempted in this case.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the file that could not be read
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the restructured content failed and no backup was available.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the file that could not be written
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the restructured content failed; the original content was
    /// restored from the backup copy.
    #[error("failed to write {path} (original restored from backup): {source}")]
    WriteRestored {
        /// Path of the file that could not be written
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing failed and the attempted restore from backup also failed.
    /// Manual recovery from `<path>.backup` is required.
    #[error("failed to write {path}: {write_source}; restore from backup also failed: {restore_error} - manual recovery required")]
    RestoreFailed {
        /// Path of the file left in an unknown state
        path: PathBuf,
        #[source]
        write_source: io::Error,
        /// Description of the restore failure
        restore_error: String,
    },

    /// Error serializing the partitioned document (JSON output).
    #[error("rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Read {
            path: PathBuf::from("model.gcode"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read model.gcode: no such file");

        let err = Error::Render("bad json".to_string());
        assert_eq!(err.to_string(), "rendering error: bad json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_restore_failed_message_mentions_manual_recovery() {
        let err = Error::RestoreFailed {
            path: PathBuf::from("model.gcode"),
            write_source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            restore_error: "backup unreadable".to_string(),
        };
        assert!(err.to_string().contains("manual recovery"));
    }
}

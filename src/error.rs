//! Error types for archive operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur inside the guarded body of an archive operation.
///
/// The compress and decompress entry points never surface these raw: the
/// operation wrapper in [`crate::outcome`] converts them into an
/// [`crate::OperationOutcome::FileSystemError`] after cleaning up partial
/// output. The standalone mapper and guard functions return them directly.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Path traversal attempt detected in a stored entry name.
    #[error("path traversal attempt through entry {path}")]
    PathTraversal {
        /// The stored entry name that attempted traversal.
        path: PathBuf,
    },

    /// A filesystem entry is not located under the selected source root.
    #[error("entry {path} is not under the selected root {root}")]
    EntryOutsideSelection {
        /// The offending filesystem entry.
        path: PathBuf,
        /// The selection root it was expected under.
        root: PathBuf,
    },

    /// An entry name cannot be represented as UTF-8 in the archive.
    #[error("entry name is not valid UTF-8: {path}")]
    NonUnicodeName {
        /// The offending filesystem path.
        path: PathBuf,
    },
}

impl ArchiveError {
    /// Returns `true` if this error represents a security violation.
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_traversal_display() {
        let err = ArchiveError::PathTraversal {
            path: PathBuf::from("../etc/passwd"),
        };
        assert!(err.to_string().contains("path traversal"));
        assert!(err.to_string().contains("../etc/passwd"));
    }

    #[test]
    fn test_invalid_archive_display() {
        let err = ArchiveError::InvalidArchive("truncated header".into());
        assert_eq!(err.to_string(), "invalid archive: truncated header");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArchiveError = io_err.into();
        assert!(matches!(err, ArchiveError::Io(_)));
    }

    #[test]
    fn test_is_security_violation() {
        let err = ArchiveError::PathTraversal {
            path: PathBuf::from("../x"),
        };
        assert!(err.is_security_violation());

        let err = ArchiveError::InvalidArchive("bad".into());
        assert!(!err.is_security_violation());

        let err = ArchiveError::EntryOutsideSelection {
            path: PathBuf::from("/a/b"),
            root: PathBuf::from("/c"),
        };
        assert!(!err.is_security_violation());
    }
}

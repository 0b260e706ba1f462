//! Operation outcomes and the cleanup policy for failed operations.
//!
//! Every archive operation runs its fallible body through [`run_guarded`],
//! the single point where internal errors are caught, partial output is
//! removed, and a typed [`OperationOutcome`] is produced.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::Result;

/// The result of a single compress or decompress operation.
///
/// Exactly one variant is produced per call and operations are never
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The operation completed; the path names the produced file or the
    /// populated output directory. Ownership transfers to the caller.
    Success(PathBuf),
    /// A caller-supplied precondition was violated before any output was
    /// created. No cleanup was needed.
    InputError(String),
    /// The guarded body failed; partial output has been removed on a best
    /// effort basis. Carries the original failure's description.
    FileSystemError(String),
}

impl OperationOutcome {
    /// Returns `true` for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the produced path on success.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Success(path) => Some(path),
            _ => None,
        }
    }

    /// Returns the failure description for either error variant.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::InputError(msg) | Self::FileSystemError(msg) => Some(msg),
        }
    }

    /// Unwraps the success path.
    ///
    /// # Panics
    ///
    /// Panics on either error variant. Intended for tests and examples.
    #[must_use]
    #[track_caller]
    pub fn expect_success(self) -> PathBuf {
        match self {
            Self::Success(path) => path,
            Self::InputError(msg) => panic!("expected success, got input error: {msg}"),
            Self::FileSystemError(msg) => panic!("expected success, got filesystem error: {msg}"),
        }
    }
}

/// Runs `body` with ownership of `output`.
///
/// On success the outcome names `output`. On any failure everything at or
/// under `output` is deleted before the failure is reported, so a failed
/// operation leaves no partial output behind.
pub(crate) fn run_guarded<F>(output: &Path, body: F) -> OperationOutcome
where
    F: FnOnce() -> Result<()>,
{
    match body() {
        Ok(()) => OperationOutcome::Success(output.to_path_buf()),
        Err(err) => {
            remove_recursively(output);
            OperationOutcome::FileSystemError(err.to_string())
        }
    }
}

/// Deletes everything at and under `path`, deepest entries first so
/// directories are empty by the time their own turn comes.
///
/// Best effort: individual failures are swallowed so cleanup never masks
/// the error that triggered it.
fn remove_recursively(path: &Path) {
    for entry in WalkDir::new(path)
        .contents_first(true)
        .into_iter()
        .flatten()
    {
        let _ = if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())
        } else {
            fs::remove_file(entry.path())
        };
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArchiveError;
    use tempfile::TempDir;

    #[test]
    fn test_success_outcome_names_output() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.zip");

        let outcome = run_guarded(&output, || Ok(()));
        assert!(outcome.is_success());
        assert_eq!(outcome.path(), Some(output.as_path()));
    }

    #[test]
    fn test_failure_removes_partial_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.zip");

        let outcome = run_guarded(&output, || {
            fs::write(&output, b"partial")?;
            Err(ArchiveError::InvalidArchive("boom".into()))
        });

        assert!(matches!(outcome, OperationOutcome::FileSystemError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_failure_removes_partial_tree() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("extracted");

        let outcome = run_guarded(&output, || {
            fs::create_dir_all(output.join("a/b"))?;
            fs::write(output.join("a/b/file.txt"), b"partial")?;
            fs::write(output.join("top.txt"), b"partial")?;
            Err(ArchiveError::PathTraversal {
                path: PathBuf::from("../evil"),
            })
        });

        assert!(matches!(outcome, OperationOutcome::FileSystemError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_failure_message_carries_original_error() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");

        let outcome = run_guarded(&output, || {
            Err(ArchiveError::InvalidArchive("truncated gzip stream".into()))
        });
        let msg = outcome.failure_message().unwrap();
        assert!(msg.contains("truncated gzip stream"));
    }

    #[test]
    fn test_cleanup_on_missing_output_is_silent() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("never_created");

        // Body fails without having produced anything.
        let outcome = run_guarded(&output, || {
            Err(ArchiveError::InvalidArchive("early failure".into()))
        });
        assert!(matches!(outcome, OperationOutcome::FileSystemError(_)));
    }

    #[test]
    #[should_panic(expected = "expected success")]
    fn test_expect_success_panics_on_error() {
        let _ = OperationOutcome::InputError("missing".into()).expect_success();
    }
}

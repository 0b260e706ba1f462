//! Source tree traversal for archive creation.

use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::ArchiveError;
use crate::error::Result;

/// Returns a lazy iterator over the non-directory descendants of `source`.
///
/// Directories are not yielded as entries of their own; for a single-file
/// selection the iterator yields just that file. Order is filesystem walk
/// order and is not specified beyond that.
pub(crate) fn files_under(source: &Path) -> impl Iterator<Item = Result<PathBuf>> + use<> {
    WalkDir::new(source).into_iter().filter_map(|entry| {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => Some(Ok(entry.into_path())),
            Err(e) => Some(Err(ArchiveError::Io(std::io::Error::other(format!(
                "walk error: {e}"
            ))))),
        }
    })
}

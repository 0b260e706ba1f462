//! Mapping between filesystem paths and archive entry names.

use std::path::Path;
use std::path::PathBuf;

use crate::error::ArchiveError;
use crate::error::Result;
use crate::security;
use crate::types::ArchivePath;

/// Computes the archive entry name for a filesystem entry.
///
/// If the entry path equals the selection root, a single file was selected
/// and the name is just the file's base name. Otherwise the name is the
/// entry's path relative to the selection root, preserving subdirectory
/// structure. Both supported formats share this rule, so the same input
/// always yields the same name.
///
/// # Errors
///
/// Returns [`ArchiveError::EntryOutsideSelection`] if `entry` is not under
/// `selection_root`, and the [`ArchivePath`] construction errors for names
/// that cannot be represented.
pub fn path_in_archive(entry: &Path, selection_root: &Path) -> Result<ArchivePath> {
    if entry == selection_root {
        let name = entry
            .file_name()
            .ok_or_else(|| ArchiveError::EntryOutsideSelection {
                path: entry.to_path_buf(),
                root: selection_root.to_path_buf(),
            })?;
        return ArchivePath::from_relative(Path::new(name));
    }

    let relative =
        entry
            .strip_prefix(selection_root)
            .map_err(|_| ArchiveError::EntryOutsideSelection {
                path: entry.to_path_buf(),
                root: selection_root.to_path_buf(),
            })?;

    ArchivePath::from_relative(relative)
}

/// Computes the filesystem path a stored entry name extracts to.
///
/// The name is resolved against `extraction_root` and validated by the
/// path guard before anything may be created there.
///
/// # Errors
///
/// Returns [`ArchiveError::PathTraversal`] if the stored name would escape
/// the extraction root.
pub fn path_on_disk(stored_name: &Path, extraction_root: &Path) -> Result<PathBuf> {
    security::validate_entry_path(stored_name, extraction_root)
}

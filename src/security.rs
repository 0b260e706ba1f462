//! Path traversal validation for untrusted archive entries.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::error::ArchiveError;
use crate::error::Result;

/// Validates a stored entry name against the extraction root.
///
/// The stored name must never, after normalization, fall outside
/// `extraction_root`. Absolute names and names carrying `..` segments are
/// rejected outright; `.` segments are normalized away. The check is pure
/// and runs once per entry, before anything is created at the candidate
/// path.
///
/// Returns the filesystem path the entry may be written to.
///
/// # Errors
///
/// Returns [`ArchiveError::PathTraversal`] naming the offending stored
/// name. The surrounding operation converts this into a filesystem error
/// and removes any previously extracted entries.
pub fn validate_entry_path(stored_name: &Path, extraction_root: &Path) -> Result<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in stored_name.components() {
        match component {
            Component::Normal(segment) => normalized.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchiveError::PathTraversal {
                    path: stored_name.to_path_buf(),
                });
            }
        }
    }

    // A name that normalizes to nothing would alias the root itself.
    if normalized.as_os_str().is_empty() {
        return Err(ArchiveError::PathTraversal {
            path: stored_name.to_path_buf(),
        });
    }

    let candidate = extraction_root.join(normalized);

    // The component checks above already forbid escapes; keep the boundary
    // check as the authoritative invariant.
    if !candidate.starts_with(extraction_root) {
        return Err(ArchiveError::PathTraversal {
            path: stored_name.to_path_buf(),
        });
    }

    Ok(candidate)
}

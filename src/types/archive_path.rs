//! Validated archive entry name type.

use std::fmt;
use std::path::Component;
use std::path::Path;

use crate::error::ArchiveError;
use crate::error::Result;

/// A normalized, relative, slash-delimited entry name inside an archive.
///
/// # Invariants
///
/// - Contains no parent-directory (`..`) segments
/// - Has no absolute-path prefix
/// - Normalizing it yields itself unchanged (`.` segments are removed at
///   construction)
///
/// Can only be constructed through [`ArchivePath::from_relative`]; there is
/// no unchecked conversion from arbitrary strings. Compared by structural
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchivePath(String);

impl ArchivePath {
    /// Builds an archive path from a relative filesystem path.
    ///
    /// Segments are joined with forward slashes regardless of the host
    /// path convention, and `.` segments are dropped.
    ///
    /// # Errors
    ///
    /// - [`ArchiveError::PathTraversal`] if the path is absolute, contains
    ///   `..` segments, or normalizes to nothing
    /// - [`ArchiveError::NonUnicodeName`] if a segment is not valid UTF-8
    pub fn from_relative(path: &Path) -> Result<Self> {
        let mut segments = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment.to_str().ok_or_else(|| ArchiveError::NonUnicodeName {
                        path: path.to_path_buf(),
                    })?;
                    segments.push(segment);
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ArchiveError::PathTraversal {
                        path: path.to_path_buf(),
                    });
                }
            }
        }

        if segments.is_empty() {
            return Err(ArchiveError::PathTraversal {
                path: path.to_path_buf(),
            });
        }

        Ok(Self(segments.join("/")))
    }

    /// Returns the slash-delimited entry name.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ArchivePath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

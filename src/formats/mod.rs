//! Archive format adapters.
//!
//! Each adapter implements the [`Archiver`] contract by layering the
//! format-specific codecs over buffered file I/O. The entry mapper, path
//! guard, and result/cleanup policy are shared collaborators; only the
//! codec pipeline differs per format.

pub mod targz;
pub mod traits;
pub mod zip;

pub use targz::TarGzArchiver;
pub use traits::Archiver;
pub use zip::ZipArchiver;

use std::path::Path;
use std::path::PathBuf;

/// Appends a format extension to a target base path.
///
/// The extension lands on the file name as a plain suffix, so multi-dot
/// extensions like `.tar.gz` survive intact.
pub(crate) fn with_suffix(base: &Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(extension);
    PathBuf::from(name)
}

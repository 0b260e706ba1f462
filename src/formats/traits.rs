//! The uniform contract implemented by every archive format adapter.

use std::path::Path;

use crate::outcome::OperationOutcome;

/// One archive format behind the uniform compress/decompress surface.
///
/// Adapters are stateless: format and extension are fixed per adapter and
/// every call is self-contained. Calls are reentrant across invocations but
/// not safe to run concurrently against the same output path, since
/// concurrent writers would race on cleanup and creation.
pub trait Archiver {
    /// The suffix this adapter appends to compression targets and expects
    /// on decompression sources, e.g. `.tar.gz` or `.zip`.
    fn supported_extension(&self) -> &'static str;

    /// Archives and compresses the file or directory at `source`.
    ///
    /// `target_base` excludes the extension; the adapter appends it. Fails
    /// with an input error if `source` does not exist or the computed
    /// target already exists. Any failure inside the body removes the
    /// partially written archive before the outcome is returned.
    fn compress(&self, source: &Path, target_base: &Path) -> OperationOutcome;

    /// Unarchives and decompresses the file at `source` into `target_dir`.
    ///
    /// Fails with an input error if `source` does not exist. Stored entry
    /// names are validated against `target_dir` before anything is written;
    /// a traversal attempt or any I/O failure removes everything extracted
    /// so far before the outcome is returned.
    fn decompress(&self, source: &Path, target_dir: &Path) -> OperationOutcome;
}

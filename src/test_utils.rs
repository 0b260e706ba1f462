//! Test utilities for crafting archives in memory.
//!
//! These builders write arbitrary entry names, including hostile ones the
//! crate itself refuses to produce, so tests can exercise the extraction
//! defenses against archives from untrusted producers.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

/// Builder for gzip-compressed tar archives with arbitrary entry names.
///
/// # Examples
///
/// ```
/// use treepack::test_utils::TarGzTestBuilder;
///
/// let bytes = TarGzTestBuilder::new()
///     .add_file("inputFile.txt", b"content")
///     .add_directory("emptyFolder")
///     .build();
/// ```
pub struct TarGzTestBuilder {
    builder: tar::Builder<GzEncoder<Vec<u8>>>,
}

impl TarGzTestBuilder {
    /// Creates a new builder writing into an in-memory gzip stream.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default())),
        }
    }

    /// Adds a regular file entry under the stored name `path`.
    ///
    /// The name is written into the header byte-for-byte, bypassing the
    /// tar builder's own relative-path validation, so traversal names like
    /// `../escape.txt` can be produced. Names are limited to 100 bytes.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        write_raw_name(&mut header, path);
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        self.builder.append(&header, data).unwrap();
        self
    }

    /// Adds a directory entry under the stored name `path`.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        write_raw_name(&mut header, path);
        header.set_entry_type(tar::EntryType::Directory);
        header.set_size(0);
        header.set_mode(0o755);
        header.set_cksum();
        self.builder.append(&header, std::io::empty()).unwrap();
        self
    }

    /// Finalizes the tar trailer and the gzip stream, returning the bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap().finish().unwrap()
    }
}

impl Default for TarGzTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `path` verbatim into the header's name field.
fn write_raw_name(header: &mut tar::Header, path: &str) {
    let bytes = path.as_bytes();
    assert!(bytes.len() < 100, "test entry name too long: {path}");
    header.as_old_mut().name[..bytes.len()].copy_from_slice(bytes);
}

/// Builder for zip archives with arbitrary entry names.
///
/// # Examples
///
/// ```
/// use treepack::test_utils::ZipTestBuilder;
///
/// let bytes = ZipTestBuilder::new()
///     .add_file("inputFile.txt", b"content")
///     .build();
/// ```
pub struct ZipTestBuilder {
    writer: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new builder writing into an in-memory zip.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a deflate-compressed file entry under the stored name `path`.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);
        self.writer.start_file(path, options).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry under the stored name `path`.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = zip::write::SimpleFileOptions::default().unix_permissions(0o755);
        self.writer.add_directory(path, options).unwrap();
        self
    }

    /// Finalizes the central directory, returning the bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

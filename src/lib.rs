//! Tree-to-archive compression with zip-slip protection and failure
//! cleanup.
//!
//! `treepack` archives a file or directory tree into a single compressed
//! container and reverses that operation, supporting gzip-compressed tar
//! and deflate-based zip behind one uniform [`Archiver`] contract. Stored
//! entry names are validated against the extraction root before anything
//! is written, and a failed operation removes its partial output before
//! reporting the failure.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use treepack::Archiver;
//! use treepack::TarGzArchiver;
//!
//! let archiver = TarGzArchiver::new();
//! let outcome = archiver.compress(Path::new("data"), Path::new("backup"));
//! if let Some(path) = outcome.path() {
//!     println!("archived to {}", path.display());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod formats;
pub mod mapper;
pub mod outcome;
pub mod security;
pub mod test_utils;
pub mod types;
mod walker;

// Re-export the operation surface
pub use error::ArchiveError;
pub use error::Result;
pub use formats::Archiver;
pub use formats::TarGzArchiver;
pub use formats::ZipArchiver;
pub use outcome::OperationOutcome;
pub use types::ArchivePath;

//! Validated value types used across the crate.

pub mod archive_path;

pub use archive_path::ArchivePath;

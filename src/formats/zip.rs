//! Zip format adapter.
//!
//! Entries are framed one at a time through the zip writer using deflate
//! compression; there is no separate trailer step beyond finishing the
//! writer. Decompression iterates the central directory by index, running
//! every stored name through the path guard before extraction.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::ArchiveError;
use crate::error::Result;
use crate::mapper;
use crate::outcome::OperationOutcome;
use crate::outcome::run_guarded;
use crate::walker;

use super::traits::Archiver;
use super::with_suffix;

const EXTENSION: &str = ".zip";

/// Archiver producing and consuming deflate-compressed zip files.
#[derive(Debug, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    /// Creates a new zip archiver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Archiver for ZipArchiver {
    fn supported_extension(&self) -> &'static str {
        EXTENSION
    }

    fn compress(&self, source: &Path, target_base: &Path) -> OperationOutcome {
        let target = with_suffix(target_base, EXTENSION);

        if !source.exists() {
            return OperationOutcome::InputError(format!(
                "source path does not exist: {}",
                source.display()
            ));
        }
        if target.exists() {
            return OperationOutcome::InputError(format!(
                "target file already exists: {}",
                target.display()
            ));
        }

        run_guarded(&target, || write_archive(source, &target))
    }

    fn decompress(&self, source: &Path, target_dir: &Path) -> OperationOutcome {
        if !source.exists() {
            return OperationOutcome::InputError(format!(
                "source path does not exist: {}",
                source.display()
            ));
        }

        run_guarded(target_dir, || read_archive(source, target_dir))
    }
}

fn write_archive(source: &Path, target: &Path) -> Result<()> {
    let file = File::create(target)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in walker::files_under(source) {
        let path = entry?;
        let name = mapper::path_in_archive(&path, source)?;

        writer
            .start_file(name.as_str(), options)
            .map_err(|e| io::Error::other(format!("failed to start zip entry {name}: {e}")))?;
        let mut file = File::open(&path)?;
        io::copy(&mut file, &mut writer)?;
    }

    let mut inner = writer
        .finish()
        .map_err(|e| io::Error::other(format!("failed to finish zip archive: {e}")))?;
    inner.flush()?;

    Ok(())
}

fn read_archive(source: &Path, target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let file = File::open(source)?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open zip archive: {e}")))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| {
            ArchiveError::InvalidArchive(format!("failed to read zip entry {index}: {e}"))
        })?;

        // The guard sees the raw stored name; no pre-sanitized variant.
        let stored = PathBuf::from(entry.name());
        let out_path = mapper::path_on_disk(&stored, target_dir)?;

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&out_path)?;
            io::copy(&mut entry, &mut out)?;
        }
    }

    Ok(())
}

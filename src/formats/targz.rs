//! Tar+gzip format adapter.
//!
//! Compression layers a tar container over a gzip byte stream: file,
//! buffered writer, gzip encoder, tar builder. Decompression reverses the
//! stack. Layers are released in reverse acquisition order on every exit
//! path so buffered bytes are flushed before the outcome is decided.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::ArchiveError;
use crate::error::Result;
use crate::mapper;
use crate::outcome::OperationOutcome;
use crate::outcome::run_guarded;
use crate::types::ArchivePath;
use crate::walker;

use super::traits::Archiver;
use super::with_suffix;

const EXTENSION: &str = ".tar.gz";

/// Archiver producing and consuming gzip-compressed tar streams.
#[derive(Debug, Default)]
pub struct TarGzArchiver;

impl TarGzArchiver {
    /// Creates a new tar+gzip archiver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Archiver for TarGzArchiver {
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
    let writer = BufWriter::new(file);
    let encoder = GzEncoder::new(writer, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in walker::files_under(source) {
        let path = entry?;
        let name = mapper::path_in_archive(&path, source)?;
        append_file(&mut builder, &path, &name)?;
    }

    builder.finish()?;

    // Unwind the layer stack in reverse acquisition order, flushing each.
    let encoder = builder.into_inner()?;
    let mut writer = encoder.finish()?;
    writer.flush()?;

    Ok(())
}

fn append_file<W: Write>(
    builder: &mut tar::Builder<W>,
    path: &Path,
    name: &ArchivePath,
) -> Result<()> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();

    let mut header = tar::Header::new_gnu();
    header.set_size(size);
    header.set_mode(0o644);
    header.set_cksum();

    builder.append_data(&mut header, name.as_str(), &mut file)?;
    Ok(())
}

fn read_archive(source: &Path, target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let file = File::open(source)?;
    let reader = BufReader::new(file);
    let decoder = GzDecoder::new(reader);
    let mut archive = tar::Archive::new(decoder);

    let entries = archive
        .entries()
        .map_err(|e| ArchiveError::InvalidArchive(format!("failed to read tar entries: {e}")))?;

    for entry in entries {
        let mut entry = entry
            .map_err(|e| ArchiveError::InvalidArchive(format!("failed to read tar entry: {e}")))?;
        let stored = entry
            .path()
            .map_err(|e| ArchiveError::InvalidArchive(format!("invalid entry name: {e}")))?
            .into_owned();

        let out_path = mapper::path_on_disk(&stored, target_dir)?;

        if entry.header().entry_type().is_dir() {
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

//! Reading and writing `.tachibk` files.

use crate::Backup;
use crate::error::{ErrorKind, Result};
use bkconv_compress::Compression;
use bkconv_wire::Message;
use exn::ResultExt;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::instrument;

/// Decode a backup from file contents, gzipped or raw.
pub fn from_bytes(bytes: &[u8]) -> Result<Backup> {
    let (format, buffer) = Compression::detect_and_decompress(bytes).or_raise(|| ErrorKind::Compression)?;
    tracing::debug!(%format, compressed = bytes.len(), decompressed = buffer.len(), "decoding backup");
    Backup::decode(&buffer).or_raise(|| ErrorKind::Decode)
}

/// Encode a backup and gzip it, ready to be written to disk.
pub fn to_bytes(backup: &Backup) -> Result<Vec<u8>> {
    Compression::Gzip.compress(&backup.encode()).or_raise(|| ErrorKind::Compression)
}

#[instrument(fields(mangas, categories))]
pub fn load(path: &Path) -> Result<Backup> {
    let bytes = fs::read(path).or_raise(|| ErrorKind::Read(path.to_path_buf()))?;
    let backup = from_bytes(&bytes)?;
    let span = tracing::Span::current();
    span.record("mangas", backup.mangas.len());
    span.record("categories", backup.categories.len());
    Ok(backup)
}

/// Write `backup` to `path`.
///
/// The file is staged next to its destination and moved into place once
/// fully written; on failure nothing is left at `path`.
#[instrument(skip(backup), fields(mangas = backup.mangas.len()))]
pub fn save(path: &Path, backup: &Backup) -> Result<()> {
    let bytes = to_bytes(backup)?;
    let error = || ErrorKind::Write(path.to_path_buf());
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(parent).or_raise(error)?;
    staged.write_all(&bytes).or_raise(error)?;
    staged.as_file().sync_all().or_raise(error)?;
    staged.persist(path).or_raise(error)?;
    tracing::debug!(size = bytes.len(), "backup written");
    Ok(())
}

//! Reading and writing Kotatsu ZIP archives.

use crate::error::{ErrorKind, Result};
use crate::models::{KotatsuBackup, KotatsuCategory, KotatsuChapter, KotatsuManga};
use exn::{OptionExt, ResultExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;
use tracing::instrument;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const FAVOURITES: &str = "favourites";
const CATEGORIES: &str = "categories";
const CHAPTERS: &str = "chapters";

pub fn from_bytes(bytes: &[u8]) -> Result<KotatsuBackup> {
    read_archive(Cursor::new(bytes))
}

pub fn to_bytes(backup: &KotatsuBackup) -> Result<Vec<u8>> {
    let cursor = write_archive(Cursor::new(Vec::new()), backup)?;
    Ok(cursor.into_inner())
}

#[instrument(fields(favourites, categories, chapters))]
pub fn load(path: &Path) -> Result<KotatsuBackup> {
    let file = File::open(path).or_raise(|| ErrorKind::Read(path.to_path_buf()))?;
    let backup = read_archive(file)?;
    let span = tracing::Span::current();
    span.record("favourites", backup.favourites.len());
    span.record("categories", backup.categories.len());
    span.record("chapters", backup.chapters.len());
    Ok(backup)
}

/// Write `backup` to `path`, staging it next to the destination so a
/// failure never leaves a partial archive behind.
#[instrument(skip(backup), fields(favourites = backup.favourites.len()))]
pub fn save(path: &Path, backup: &KotatsuBackup) -> Result<()> {
    let error = || ErrorKind::Write(path.to_path_buf());
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(parent).or_raise(error)?;
    write_archive(&mut staged, backup).or_raise(error)?;
    staged.as_file().sync_all().or_raise(error)?;
    staged.persist(path).or_raise(error)?;
    Ok(())
}

fn read_archive<R: Read + Seek>(reader: R) -> Result<KotatsuBackup> {
    let mut archive = ZipArchive::new(reader).or_raise(|| ErrorKind::Archive)?;
    let favourites: Vec<KotatsuManga> = read_entry(&mut archive, FAVOURITES)?.ok_or_raise(|| ErrorKind::MissingEntry(FAVOURITES))?;
    let categories: Vec<KotatsuCategory> = read_entry(&mut archive, CATEGORIES)?.ok_or_raise(|| ErrorKind::MissingEntry(CATEGORIES))?;
    let chapters: Vec<KotatsuChapter> = read_entry(&mut archive, CHAPTERS)?.unwrap_or_default();
    for name in archive.file_names().filter(|name| ![FAVOURITES, CATEGORIES, CHAPTERS].contains(name)) {
        tracing::trace!(entry = name, "ignoring archive entry");
    }
    Ok(KotatsuBackup { favourites, categories, chapters })
}

/// Parse entry `name` as a JSON array, or `None` if the archive lacks it.
fn read_entry<R: Read + Seek, T: DeserializeOwned>(archive: &mut ZipArchive<R>, name: &'static str) -> Result<Option<Vec<T>>> {
    let entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err).or_raise(|| ErrorKind::Archive),
    };
    let items = serde_json::from_reader(entry).or_raise(|| ErrorKind::Entry(name))?;
    Ok(Some(items))
}

fn write_archive<W: Write + Seek>(writer: W, backup: &KotatsuBackup) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    write_entry(&mut zip, FAVOURITES, &backup.favourites, options)?;
    write_entry(&mut zip, CATEGORIES, &backup.categories, options)?;
    // Kotatsu itself doesn't ship this entry; leave it out when there's nothing to carry.
    if !backup.chapters.is_empty() {
        write_entry(&mut zip, CHAPTERS, &backup.chapters, options)?;
    }
    zip.finish().or_raise(|| ErrorKind::Archive)
}

fn write_entry<W: Write + Seek, T: Serialize>(
    zip: &mut ZipWriter<W>,
    name: &'static str,
    items: &[T],
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, options).or_raise(|| ErrorKind::Archive)?;
    serde_json::to_writer(&mut *zip, items).or_raise(|| ErrorKind::Entry(name))?;
    tracing::debug!(entry = name, items = items.len(), "archive entry written");
    Ok(())
}

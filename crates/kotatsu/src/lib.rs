//! Kotatsu backups.
//!
//! A Kotatsu backup is a ZIP archive whose entries are JSON arrays, one per
//! table. Only `favourites` and `categories` are required; `chapters` is
//! read when present. Everything else in the archive is ignored.

mod archive;
pub mod error;
mod models;

pub use crate::archive::{from_bytes, load, save, to_bytes};
pub use crate::models::{ChapterIndex, KotatsuBackup, KotatsuCategory, KotatsuChapter, KotatsuManga, KotatsuTag};

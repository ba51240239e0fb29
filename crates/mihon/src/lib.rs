//! Mihon backups.
//!
//! A `.tachibk` file is a gzipped protobuf `Backup` message. Only the fields
//! needed to move a library between applications are modelled; everything
//! else in the file is skipped on read and therefore not written back.

pub mod error;
mod file;
pub mod models;

pub use crate::file::{from_bytes, load, save, to_bytes};
pub use crate::models::{Backup, BackupCategory, BackupChapter, BackupManga, BackupSource, MangaStatus};

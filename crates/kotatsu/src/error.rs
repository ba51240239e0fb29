//! Kotatsu Archive Error Types

use derive_more::{Display, Error};
use std::path::PathBuf;

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The archive couldn't be opened or read.
    #[display("failed to read archive: {}", _0.display())]
    Read(#[error(not(source))] PathBuf),
    /// The archive couldn't be created or written.
    #[display("failed to write archive: {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
    /// Not a readable ZIP archive.
    #[display("malformed zip archive")]
    Archive,
    /// A required entry is missing from the archive.
    #[display("archive has no `{_0}` entry")]
    MissingEntry(#[error(not(source))] &'static str),
    /// An entry isn't the JSON array it should be.
    #[display("malformed `{_0}` entry")]
    Entry(#[error(not(source))] &'static str),
}

impl ErrorKind {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Read(_) | Self::Write(_))
    }
}

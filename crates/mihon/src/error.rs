//! Mihon Backup Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A backup error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for backup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backup file couldn't be opened or read.
    #[display("failed to read backup: {}", _0.display())]
    Read(#[error(not(source))] PathBuf),
    /// The backup file couldn't be created or written.
    #[display("failed to write backup: {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
    /// The gzip framing around the backup is broken.
    #[display("corrupt backup compression")]
    Compression,
    /// The decompressed buffer isn't a well-formed backup message.
    #[display("malformed backup message")]
    Decode,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Read(_) | Self::Write(_))
    }
}

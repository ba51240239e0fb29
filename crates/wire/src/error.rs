//! Wire Format Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction. Every variant is a property of the input buffer, so
//! nothing here is retryable.

use crate::WireType;
use derive_more::{Display, Error};

/// A decoding error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for wire-format operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer ended in the middle of a value.
    #[display("unexpected end of buffer at byte {position}")]
    UnexpectedEnd { position: usize },
    /// A varint ran past the 10 bytes a 64-bit value can need.
    #[display("varint starting at byte {position} is longer than 10 bytes")]
    VarintOverflow { position: usize },
    /// A recognised field arrived with the wrong wire type.
    #[display("field '{field}' expected wire type {expected}, found {actual}")]
    WireTypeMismatch {
        field: &'static str,
        expected: WireType,
        actual: WireType,
    },
    /// The low three bits of a tag name a wire type this codec doesn't speak
    /// (groups, or one of the reserved values).
    #[display("unsupported wire type {_0}")]
    InvalidWireType(#[error(not(source))] u8),
    /// Field number zero, or one beyond the 29-bit protocol maximum.
    #[display("invalid field number {_0}")]
    InvalidFieldNumber(#[error(not(source))] u64),
    /// A string field held bytes that aren't UTF-8.
    #[display("field '{_0}' is not valid UTF-8")]
    InvalidUtf8(#[error(not(source))] &'static str),
    /// Decoding a nested message failed; the child frame has the details.
    #[display("malformed nested message in field '{_0}'")]
    Nested(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The buffer is either well-formed or it isn't.
        false
    }
}

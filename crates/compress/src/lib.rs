//! Compression framing for backup files.
//!
//! Mihon backups are a protobuf buffer that is normally gzipped, but older
//! tooling (and hand-crafted test fixtures) sometimes leave them raw. This
//! crate wraps the detection and the in-memory transforms behind a single
//! [`Compression`] enum:
//!
//! - **Format detection** from magic bytes ([`Compression::from_magic_bytes`])
//! - **In-memory** compression/decompression ([`Compression::compress`],
//!   [`Compression::decompress`])
//!
//! Gzip output uses the highest compression level; backups are small and
//! written once.

mod construct;
pub mod error;
mod ops;
mod util;

/// A supported compression format. Defaults to [`None`](Self::None).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Uncompressed
    #[default]
    None,
    /// Gzip compression (.gz)
    Gzip,
}

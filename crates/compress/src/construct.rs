use crate::Compression;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

impl From<&[u8]> for Compression {
    fn from(value: &[u8]) -> Self {
        Compression::from_magic_bytes(value)
    }
}
impl Compression {
    /// Detect compression format from magic bytes.
    ///
    /// Only the first two bytes are inspected. Returns the `None` variant if
    /// they don't match or if the input is too short to tell.
    #[must_use]
    pub fn from_magic_bytes(bytes: &[u8]) -> Self {
        if bytes.starts_with(&GZIP_MAGIC) {
            return Compression::Gzip;
        }
        Compression::None
    }
}

use crate::error::Result;
use crate::{Reader, Tag, Writer};

/// A hand-written protobuf message.
///
/// Implementors describe their field table twice: once in
/// [`merge_field`](Message::merge_field) for decoding and once in
/// [`encode_fields`](Message::encode_fields) for encoding. The provided
/// [`decode`](Message::decode) and [`encode`](Message::encode) drive the
/// tag loop, skip unknown fields and materialize buffers.
pub trait Message: Default {
    /// Decode the field identified by `tag` into `self`.
    ///
    /// Returns `Ok(false)` if the field number isn't part of this message,
    /// in which case nothing must have been consumed from `reader`; the
    /// caller skips the payload. Repeated fields append.
    fn merge_field(&mut self, tag: Tag, reader: &mut Reader<'_>) -> Result<bool>;

    /// Write every field in ascending field-number order.
    fn encode_fields(&self, writer: &mut Writer);

    /// Decode a whole buffer. Stops exactly at the end of `buf`.
    fn decode(buf: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(buf);
        let mut message = Self::default();
        while !reader.is_empty() {
            let tag = reader.read_tag()?;
            if !message.merge_field(tag, &mut reader)? {
                tracing::trace!(
                    field = tag.field,
                    wire_type = %tag.wire_type,
                    position = reader.position(),
                    "skipping unknown field"
                );
                reader.skip(tag.wire_type)?;
            }
        }
        Ok(message)
    }

    /// Encode into a freshly allocated buffer.
    fn encode(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.encode_fields(&mut writer);
        writer.into_inner()
    }
}

use crate::error::{ErrorKind, Result};
use crate::{Message, Tag, WireType, varint};
use exn::ResultExt;

/// A forward-only cursor over one message buffer.
///
/// Every nested message gets its own `Reader` over its own sub-slice (see
/// [`Reader::message`]), so positions reported in errors are relative to the
/// innermost message being decoded.
///
/// The typed field readers (`int64`, `string`, `message`, ...) take the tag
/// that was just read and a qualified field name; they check the wire type
/// before consuming anything and report mismatches by that name.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}
impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_tag(&mut self) -> Result<Tag> {
        Tag::from_raw(self.read_varint()?)
    }

    pub fn read_varint(&mut self) -> Result<u64> {
        let (value, end) = varint::decode_at(self.buf, self.pos)?;
        self.pos = end;
        Ok(value)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            exn::bail!(ErrorKind::UnexpectedEnd { position: self.buf.len() });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_fixed32(&mut self) -> Result<u32> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.read_bytes(4)?);
        Ok(u32::from_le_bytes(raw))
    }

    pub fn read_fixed64(&mut self) -> Result<u64> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.read_bytes(8)?);
        Ok(u64::from_le_bytes(raw))
    }

    /// Read a varint length prefix and return exactly that many bytes.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8]> {
        let start = self.pos;
        let len = self.read_varint()?;
        // A length that doesn't even fit in memory is just a truncated buffer.
        let len = usize::try_from(len).or_raise(|| ErrorKind::UnexpectedEnd { position: start })?;
        self.read_bytes(len)
    }

    /// Consume the payload of a field this message doesn't recognise.
    pub fn skip(&mut self, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
            },
            WireType::Fixed64 => {
                self.read_bytes(8)?;
            },
            WireType::LengthDelimited => {
                self.read_length_delimited()?;
            },
            WireType::Fixed32 => {
                self.read_bytes(4)?;
            },
        }
        Ok(())
    }

    pub fn uint64(&mut self, tag: Tag, name: &'static str) -> Result<u64> {
        tag.expect(WireType::Varint, name)?;
        self.read_varint()
    }

    /// Two's-complement `int64` (not zigzag).
    pub fn int64(&mut self, tag: Tag, name: &'static str) -> Result<i64> {
        Ok(self.uint64(tag, name)? as i64)
    }

    /// `int32` is sign-extended to 64 bits on the wire; keep the low half.
    pub fn int32(&mut self, tag: Tag, name: &'static str) -> Result<i32> {
        Ok(self.uint64(tag, name)? as i32)
    }

    pub fn bool(&mut self, tag: Tag, name: &'static str) -> Result<bool> {
        Ok(self.uint64(tag, name)? != 0)
    }

    /// IEEE-754 single from its raw little-endian bits; the bit pattern is
    /// kept exactly.
    pub fn float(&mut self, tag: Tag, name: &'static str) -> Result<f32> {
        tag.expect(WireType::Fixed32, name)?;
        Ok(f32::from_bits(self.read_fixed32()?))
    }

    pub fn string(&mut self, tag: Tag, name: &'static str) -> Result<String> {
        tag.expect(WireType::LengthDelimited, name)?;
        let bytes = self.read_length_delimited()?;
        let value = std::str::from_utf8(bytes).or_raise(|| ErrorKind::InvalidUtf8(name))?;
        Ok(value.to_string())
    }

    /// An optional string field. An empty string on the wire is
    /// indistinguishable from an absent field, so it comes back as `None`.
    pub fn optional_string(&mut self, tag: Tag, name: &'static str) -> Result<Option<String>> {
        let value = self.string(tag, name)?;
        Ok(Some(value).filter(|s| !s.is_empty()))
    }

    /// Decode a nested message from its own length-delimited sub-slice.
    pub fn message<M: Message>(&mut self, tag: Tag, name: &'static str) -> Result<M> {
        tag.expect(WireType::LengthDelimited, name)?;
        let payload = self.read_length_delimited()?;
        M::decode(payload).or_raise(|| ErrorKind::Nested(name))
    }
}

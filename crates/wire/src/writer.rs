use crate::{Message, Tag, WireType, varint};

/// An append-only message buffer.
///
/// Singular field writers skip their field when the value is the type's
/// zero value: omission *is* the wire format's representation of "unset".
/// Repeated field writers emit one occurrence per element, zero or not.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}
impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_tag(&mut self, field: u32, wire_type: WireType) {
        varint::encode(Tag::new(field, wire_type).to_raw(), &mut self.buf);
    }

    pub fn write_varint(&mut self, value: u64) {
        varint::encode(value, &mut self.buf);
    }

    /// Bytes appended verbatim, no framing.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Tag, length prefix and payload, unconditionally.
    pub fn write_length_delimited(&mut self, field: u32, payload: &[u8]) {
        self.write_tag(field, WireType::LengthDelimited);
        self.write_varint(payload.len() as u64);
        self.buf.extend_from_slice(payload);
    }

    pub fn uint64(&mut self, field: u32, value: u64) {
        if value != 0 {
            self.write_tag(field, WireType::Varint);
            self.write_varint(value);
        }
    }

    pub fn int64(&mut self, field: u32, value: i64) {
        self.uint64(field, value as u64);
    }

    /// Negative values are sign-extended, exactly like `int64`.
    pub fn int32(&mut self, field: u32, value: i32) {
        self.int64(field, i64::from(value));
    }

    pub fn bool(&mut self, field: u32, value: bool) {
        self.uint64(field, u64::from(value));
    }

    /// Written unless the bit pattern is all zeroes, so `-0.0` survives.
    pub fn float(&mut self, field: u32, value: f32) {
        let bits = value.to_bits();
        if bits != 0 {
            self.write_tag(field, WireType::Fixed32);
            self.buf.extend_from_slice(&bits.to_le_bytes());
        }
    }

    pub fn string(&mut self, field: u32, value: &str) {
        if !value.is_empty() {
            self.write_length_delimited(field, value.as_bytes());
        }
    }

    /// `None` and `Some("")` both encode to nothing.
    pub fn optional_string(&mut self, field: u32, value: Option<&str>) {
        if let Some(value) = value {
            self.string(field, value);
        }
    }

    pub fn repeated_string<S: AsRef<str>>(&mut self, field: u32, values: &[S]) {
        for value in values {
            self.write_length_delimited(field, value.as_ref().as_bytes());
        }
    }

    pub fn repeated_int64(&mut self, field: u32, values: &[i64]) {
        for &value in values {
            self.write_tag(field, WireType::Varint);
            self.write_varint(value as u64);
        }
    }

    /// The child is fully encoded into its own buffer first; the parent
    /// frame needs its length up front.
    pub fn message<M: Message>(&mut self, field: u32, message: &M) {
        let payload = message.encode();
        self.write_length_delimited(field, &payload);
    }

    pub fn repeated_message<M: Message>(&mut self, field: u32, messages: &[M]) {
        for message in messages {
            self.message(field, message);
        }
    }
}

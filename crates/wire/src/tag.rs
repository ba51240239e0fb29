use crate::error::{ErrorKind, Result};
use derive_more::Display;

/// Largest field number the protocol allows (29 bits).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// How a field's payload is framed on the wire.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum WireType {
    /// Base-128 varint: integers, booleans and enums.
    #[display("varint (0)")]
    Varint,
    /// Eight little-endian bytes. Only ever skipped.
    #[display("fixed64 (1)")]
    Fixed64,
    /// Varint length followed by that many bytes: strings, blobs and nested messages.
    #[display("length-delimited (2)")]
    LengthDelimited,
    /// Four little-endian bytes: the chapter number float.
    #[display("fixed32 (5)")]
    Fixed32,
}
impl WireType {
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::LengthDelimited => 2,
            WireType::Fixed32 => 5,
        }
    }
}
impl TryFrom<u8> for WireType {
    type Error = crate::error::Error;
    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            0 => WireType::Varint,
            1 => WireType::Fixed64,
            2 => WireType::LengthDelimited,
            5 => WireType::Fixed32,
            other => exn::bail!(ErrorKind::InvalidWireType(other)),
        })
    }
}

/// A field key: `(field_number << 3) | wire_type`, encoded as a varint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub field: u32,
    pub wire_type: WireType,
}
impl Tag {
    #[must_use]
    pub const fn new(field: u32, wire_type: WireType) -> Self {
        Self { field, wire_type }
    }

    /// The raw varint value of this tag.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        ((self.field as u64) << 3) | self.wire_type.as_u8() as u64
    }

    /// Split a raw tag varint into field number and wire type.
    pub fn from_raw(raw: u64) -> Result<Self> {
        let field = raw >> 3;
        if field == 0 || field > u64::from(MAX_FIELD_NUMBER) {
            exn::bail!(ErrorKind::InvalidFieldNumber(field));
        }
        let wire_type = WireType::try_from((raw & 0x7) as u8)?;
        Ok(Self { field: field as u32, wire_type })
    }

    /// Fail with [`ErrorKind::WireTypeMismatch`] unless this tag carries the
    /// `expected` wire type. `name` identifies the field in the error.
    pub fn expect(self, expected: WireType, name: &'static str) -> Result<()> {
        if self.wire_type != expected {
            exn::bail!(ErrorKind::WireTypeMismatch { field: name, expected, actual: self.wire_type });
        }
        Ok(())
    }
}

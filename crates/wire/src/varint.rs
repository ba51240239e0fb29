//! Base-128 varints.
//!
//! Each byte carries seven bits of the value, least-significant group first;
//! the high bit says another byte follows.

use crate::error::{ErrorKind, Result};

/// A `u64` never needs more than ten bytes.
pub const MAX_VARINT_LEN: usize = 10;

/// Append `value` to `buf` as a varint.
pub fn encode(mut value: u64, buf: &mut Vec<u8>) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Number of bytes [`encode`] will produce for `value`.
#[must_use]
pub const fn encoded_len(value: u64) -> usize {
    // One byte per started group of seven bits, and at least one byte for zero.
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Decode a varint from the start of `buf`, returning the value and the
/// number of bytes consumed.
pub fn decode(buf: &[u8]) -> Result<(u64, usize)> {
    decode_at(buf, 0)
}

/// Decode a varint starting at `start`, returning the value and the position
/// just past it. Error positions are absolute offsets into `buf`.
pub(crate) fn decode_at(buf: &[u8], start: usize) -> Result<(u64, usize)> {
    let mut value = 0u64;
    for index in 0..MAX_VARINT_LEN {
        let position = start + index;
        let Some(&byte) = buf.get(position) else {
            exn::bail!(ErrorKind::UnexpectedEnd { position });
        };
        value |= u64::from(byte & 0x7F) << (7 * index);
        if byte < 0x80 {
            return Ok((value, position + 1));
        }
    }
    exn::bail!(ErrorKind::VarintOverflow { position: start })
}

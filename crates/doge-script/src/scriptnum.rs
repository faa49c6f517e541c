//! Minimal script-number encoding.
//!
//! Script integers are little-endian sign-magnitude values with no
//! redundant leading bytes. Inscription envelopes push the chunk count
//! and per-chunk indices in this encoding.

use crate::ScriptError;

/// Encode an integer in minimal script-number format.
///
/// Zero encodes as the empty array. Other values are little-endian
/// magnitude bytes; if the most significant byte has its top bit set,
/// an extra byte (0x00 or 0x80) is appended to carry the sign.
///
/// # Arguments
/// * `value` - The integer to encode.
///
/// # Returns
/// The minimal encoding as a byte vector.
pub fn encode_number(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();

    let mut result = Vec::new();
    while abs > 0 {
        result.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit of the last byte is the sign bit. If the magnitude
    // already uses it, a padding byte carries the sign instead.
    let last = result[result.len() - 1];
    if last & 0x80 != 0 {
        result.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        let idx = result.len() - 1;
        result[idx] = last | 0x80;
    }

    result
}

/// Decode a minimally-encoded script number.
///
/// # Arguments
/// * `bytes` - The encoded number (empty means zero).
///
/// # Returns
/// The decoded integer, or an error if the encoding exceeds 8 bytes.
pub fn decode_number(bytes: &[u8]) -> Result<i64, ScriptError> {
    if bytes.is_empty() {
        return Ok(0);
    }
    if bytes.len() > 8 {
        return Err(ScriptError::NumberOutOfRange);
    }

    let mut magnitude: u64 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let byte = if i == bytes.len() - 1 { b & 0x7f } else { b };
        magnitude |= (byte as u64) << (8 * i);
    }

    let negative = bytes[bytes.len() - 1] & 0x80 != 0;
    if magnitude > i64::MAX as u64 {
        return Err(ScriptError::NumberOutOfRange);
    }

    let value = magnitude as i64;
    Ok(if negative { -value } else { value })
}

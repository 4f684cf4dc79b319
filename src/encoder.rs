//! Encoders for the four fp16 schemes.
//!
//! Every encoder takes a plaintext and returns a fresh buffer of little-endian
//! 16-bit code units.

use crate::bits::read_bits;
use crate::constants::{
    units_for, INF_BITS, MAX_INPUT_SIZE, NAN_PAYLOAD_BITS, NAN_QUIET, SIGN_BIT,
    SUBNORMAL_PAYLOAD_BITS, UNITS_PER_BYTE,
};
use crate::error::EncodeError;
use crate::frame::frame;

/// Reject plaintexts above `MAX_INPUT_SIZE`
#[inline]
pub(crate) fn check_input_size(len: usize) -> Result<(), EncodeError> {
    if len > MAX_INPUT_SIZE {
        return Err(EncodeError::InputTooLarge { len, max: MAX_INPUT_SIZE });
    }
    Ok(())
}

/// One unit per plaintext bit, LSB of each byte first
fn encode_signs(data: &[u8], zero_bit: u16, one_bit: u16) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * UNITS_PER_BYTE * 2);
    for bit in 0..data.len() * UNITS_PER_BYTE {
        let unit = if read_bits(data, bit, 1) == 1 { one_bit } else { zero_bit };
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Frame `data` and spread it `width` bits per unit over `base | payload`
fn encode_framed(data: &[u8], width: u32, base: u16) -> Vec<u8> {
    let payload = frame(data);
    let units = units_for(payload.len(), width);
    let mut out = Vec::with_capacity(units * 2);
    for i in 0..units {
        let bits = read_bits(&payload, i * width as usize, width);
        out.extend_from_slice(&(base | bits).to_le_bytes());
    }
    tracing::trace!(len = data.len(), units, width, "packed framed payload");
    out
}

/// Store data in the sign bits of zeros
///
/// A 1 bit becomes `-0.0` (`0x8000`), a 0 bit becomes `+0.0` (`0x0000`).
///
/// # Errors
/// `EncodeError::InputTooLarge` if `data` exceeds `MAX_INPUT_SIZE`.
pub fn to_zero(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    check_input_size(data.len())?;
    Ok(encode_signs(data, 0, SIGN_BIT))
}

/// Store data in the sign bits of infinities
///
/// A 1 bit becomes `-inf` (`0xFC00`), a 0 bit becomes `+inf` (`0x7C00`).
///
/// # Errors
/// `EncodeError::InputTooLarge` if `data` exceeds `MAX_INPUT_SIZE`.
pub fn to_inf(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    check_input_size(data.len())?;
    Ok(encode_signs(data, INF_BITS, INF_BITS | SIGN_BIT))
}

/// Store data in quiet NaN payloads, 9 bits per unit
///
/// # Errors
/// `EncodeError::InputTooLarge` if `data` exceeds `MAX_INPUT_SIZE`.
///
/// # Example
/// ```
/// use notanumber::{from_nan, to_nan};
///
/// let stream = to_nan(b"hi").unwrap();
/// // 6 framed bytes = 48 bits -> 6 units
/// assert_eq!(stream.len(), 12);
/// assert_eq!(from_nan(&stream).unwrap(), b"hi");
/// ```
pub fn to_nan(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    check_input_size(data.len())?;
    Ok(encode_framed(data, NAN_PAYLOAD_BITS, NAN_QUIET))
}

/// Store data in subnormal mantissas, 10 bits per unit
///
/// A payload group of zero yields `+0.0`, which decodes back as zero bits.
/// Subnormals are fragile: arithmetic elsewhere may flush them to zero.
///
/// # Errors
/// `EncodeError::InputTooLarge` if `data` exceeds `MAX_INPUT_SIZE`.
pub fn to_subnormal(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    check_input_size(data.len())?;
    Ok(encode_framed(data, SUBNORMAL_PAYLOAD_BITS, 0))
}

//! Decoders for the four fp16 schemes.
//!
//! Each decoder validates every code unit against its scheme and fails on the
//! first unit that does not belong, without returning partial output.

use crate::bits::write_bits;
use crate::constants::{
    bytes_for, fields, INF_BITS, NAN_PAYLOAD_BITS, NAN_PAYLOAD_MASK, NAN_QUIET,
    SIGN_BIT, SUBNORMAL_PAYLOAD_BITS, UNITS_PER_BYTE,
};
use crate::error::DecodeError;
use crate::frame::unframe;

/// Iterate the little-endian code units of `data`
///
/// Requires a whole number of `group`-unit groups.
fn code_units(data: &[u8], group: usize) -> Result<impl Iterator<Item = u16> + '_, DecodeError> {
    if data.len() % 2 != 0 || (data.len() / 2) % group != 0 {
        return Err(DecodeError::MalformedLength { len: data.len(), group });
    }
    Ok(data.chunks_exact(2).map(|c| u16::from_le_bytes([c[0], c[1]])))
}

/// Rebuild bytes from one sign bit per unit
///
/// `bit_of` maps a unit to its bit, or to the error for its position.
fn decode_signs(
    data: &[u8],
    bit_of: impl Fn(usize, u16) -> Result<bool, DecodeError>,
) -> Result<Vec<u8>, DecodeError> {
    let units = code_units(data, UNITS_PER_BYTE)?;
    let mut out = vec![0u8; data.len() / 2 / UNITS_PER_BYTE];
    for (index, unit) in units.enumerate() {
        if bit_of(index, unit)? {
            out[index / UNITS_PER_BYTE] |= 1 << (index % UNITS_PER_BYTE);
        }
    }
    Ok(out)
}

/// Gather `width` payload bits per unit and strip the length frame
///
/// `payload_of` validates a unit and extracts its payload.
fn decode_framed(
    data: &[u8],
    width: u32,
    payload_of: impl Fn(usize, u16) -> Result<u16, DecodeError>,
) -> Result<Vec<u8>, DecodeError> {
    let units = code_units(data, 1)?;
    let count = data.len() / 2;
    let mut recovered = Vec::with_capacity(bytes_for(count, width));
    for (index, unit) in units.enumerate() {
        write_bits(&mut recovered, index * width as usize, width, payload_of(index, unit)?);
    }
    tracing::trace!(units = count, recovered = recovered.len(), width, "gathered framed payload");
    unframe(&recovered)
}

/// Extract data from the sign bits of zeros
///
/// # Errors
/// - `DecodeError::MalformedLength` if the stream is not a whole number of bytes' worth of units
/// - `DecodeError::ImpureZero` if any unit is not `+0.0` or `-0.0`
#[must_use = "decoding returns the plaintext that should be used"]
pub fn from_zero(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_signs(data, |index, unit| match unit {
        SIGN_BIT => Ok(true),
        0 => Ok(false),
        _ => Err(DecodeError::ImpureZero { index, unit }),
    })
}

/// Extract data from the sign bits of infinities
///
/// # Errors
/// - `DecodeError::MalformedLength` if the stream is not a whole number of bytes' worth of units
/// - `DecodeError::NotInfinity` if a unit's exponent is not all-ones
/// - `DecodeError::UnexpectedNan` if a unit is a NaN
#[must_use = "decoding returns the plaintext that should be used"]
pub fn from_inf(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_signs(data, |index, unit| {
        let (negative, exponent, mantissa) = fields(unit);
        if exponent != INF_BITS {
            return Err(DecodeError::NotInfinity { index, unit });
        }
        if mantissa != 0 {
            return Err(DecodeError::UnexpectedNan { index, unit });
        }
        Ok(negative)
    })
}

/// Extract data from quiet NaN payloads
///
/// # Errors
/// - `DecodeError::MalformedLength` if the stream has an odd number of bytes
/// - `DecodeError::NotQuietNan` if a unit is not a quiet NaN
/// - `DecodeError::CorruptedHeader` if the recovered length prefix is inconsistent
#[must_use = "decoding returns the plaintext that should be used"]
pub fn from_nan(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_framed(data, NAN_PAYLOAD_BITS, |index, unit| {
        if unit & NAN_QUIET != NAN_QUIET {
            return Err(DecodeError::NotQuietNan { index, unit });
        }
        Ok(unit & NAN_PAYLOAD_MASK)
    })
}

/// Extract data from subnormal mantissas
///
/// `+0.0` is a valid unit carrying ten zero bits.
///
/// # Errors
/// - `DecodeError::MalformedLength` if the stream has an odd number of bytes
/// - `DecodeError::NotSubnormal` if a unit has a non-zero exponent
/// - `DecodeError::WrongSign` if a unit is negative
/// - `DecodeError::CorruptedHeader` if the recovered length prefix is inconsistent
#[must_use = "decoding returns the plaintext that should be used"]
pub fn from_subnormal(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_framed(data, SUBNORMAL_PAYLOAD_BITS, |index, unit| {
        let (negative, exponent, mantissa) = fields(unit);
        if exponent != 0 {
            return Err(DecodeError::NotSubnormal { index, unit });
        }
        if negative {
            return Err(DecodeError::WrongSign { index, unit });
        }
        Ok(mantissa)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(units: &[u16]) -> Vec<u8> {
        units.iter().flat_map(|u| u.to_le_bytes()).collect()
    }

    #[test]
    fn test_code_units_grouping() {
        assert_eq!(
            code_units(&[0; 3], 1).err(),
            Some(DecodeError::MalformedLength { len: 3, group: 1 })
        );
        assert_eq!(
            code_units(&[0; 14], 8).err(),
            Some(DecodeError::MalformedLength { len: 14, group: 8 })
        );
        let units: Vec<u16> = code_units(&[0x34, 0x12, 0, 0x7E], 1).unwrap().collect();
        assert_eq!(units, vec![0x1234, 0x7E00]);
    }

    #[test]
    fn test_from_zero_bits() {
        let data = stream(&[0x8000, 0, 0, 0, 0, 0, 0, 0x8000]);
        assert_eq!(from_zero(&data).unwrap(), vec![0b1000_0001]);
    }

    #[test]
    fn test_from_inf_reports_first_bad_unit() {
        let mut units = [0x7C00u16; 8];
        units[2] = 0x7E00;
        units[5] = 0x3C00;
        assert_eq!(
            from_inf(&stream(&units)),
            Err(DecodeError::UnexpectedNan { index: 2, unit: 0x7E00 })
        );
    }

    #[test]
    fn test_from_subnormal_rejects_negative_zero() {
        let data = stream(&[0x0004, 0, 0, 0x8000]);
        assert_eq!(from_subnormal(&data), Err(DecodeError::WrongSign { index: 3, unit: 0x8000 }));
    }

    #[test]
    fn test_framed_empty_stream_is_corrupt() {
        assert_eq!(
            from_nan(&[]),
            Err(DecodeError::CorruptedHeader { declared: None, available: 0 })
        );
        assert_eq!(
            from_subnormal(&[]),
            Err(DecodeError::CorruptedHeader { declared: None, available: 0 })
        );
    }
}

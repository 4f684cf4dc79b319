//! fp16 bit patterns and limits shared by every scheme.

/// Sign bit of an fp16 code unit
pub const SIGN_BIT: u16 = 0x8000;

/// Exponent field (bits 14-10)
pub const EXPONENT_MASK: u16 = 0x7C00;

/// Mantissa field (bits 9-0)
pub const MANTISSA_MASK: u16 = 0x03FF;

/// Exponent all-ones with a zero mantissa: positive infinity
pub const INF_BITS: u16 = 0x7C00;

/// Exponent all-ones plus the top mantissa bit: canonical quiet NaN
pub const NAN_QUIET: u16 = 0x7E00;

/// Low 9 mantissa bits left free by a quiet NaN
pub const NAN_PAYLOAD_MASK: u16 = 0x01FF;

/// Largest plaintext accepted by any encoder (100 MiB)
pub const MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

/// Size of the little-endian length prefix used by the framed schemes
pub(crate) const FRAME_HEADER_SIZE: usize = 4;

/// Payload bits carried by one NaN code unit
pub(crate) const NAN_PAYLOAD_BITS: u32 = 9;

/// Payload bits carried by one subnormal code unit
pub(crate) const SUBNORMAL_PAYLOAD_BITS: u32 = 10;

/// Code units per plaintext byte for the sign-bit schemes
pub(crate) const UNITS_PER_BYTE: usize = 8;

/// Number of code units needed to carry `bytes` bytes at `bits` bits per unit
#[inline]
pub(crate) const fn units_for(bytes: usize, bits: u32) -> usize {
    (bytes * 8).div_ceil(bits as usize)
}

/// Number of whole bytes spanned by `units` code units at `bits` bits per unit
#[inline]
pub(crate) const fn bytes_for(units: usize, bits: u32) -> usize {
    (units * bits as usize).div_ceil(8)
}

/// Split a code unit into (sign, exponent, mantissa) fields
#[inline]
pub(crate) const fn fields(unit: u16) -> (bool, u16, u16) {
    (unit & SIGN_BIT != 0, unit & EXPONENT_MASK, unit & MANTISSA_MASK)
}

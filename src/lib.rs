//! `notanumber` - Store bytes in fp16 floats
//!
//! Hides arbitrary byte payloads in IEEE-754 half-precision bit patterns that
//! carry no numeric meaning of their own: the sign of zero, the sign of
//! infinity, the payload of a quiet NaN, and the mantissa of a subnormal.
//!
//! # Schemes
//!
//! | Scheme | Unit pattern | Payload bits/unit | Framed | Growth |
//! |--------|--------------|-------------------|--------|--------|
//! | `zero` | `0x0000` / `0x8000` (+0 / -0) | 1 | no | 16x |
//! | `inf` | `0x7C00` / `0xFC00` (+inf / -inf) | 1 | no | 16x |
//! | `nan` | `0x7E00 \| p` (quiet NaN) | 9 | yes | ~1.78x |
//! | `subnormal` | `0x0000..=0x03FF` | 10 | yes | 1.6x |
//!
//! # Example
//! ```
//! use notanumber::{decode, encode, Scheme, Selector};
//!
//! let stream = encode(b"Pure imagination", Scheme::Nan).unwrap();
//!
//! // The scheme is recognised from the first code unit
//! let plain = decode(&stream, Selector::Auto).unwrap();
//! assert_eq!(plain, b"Pure imagination");
//! ```
//!
//! # Wire Format
//!
//! A stream is a flat run of 16-bit little-endian code units with no header,
//! magic number or version tag. Code unit layout:
//!
//! | Bits | Field |
//! |------|-------|
//! | 15 | sign |
//! | 14-10 | exponent |
//! | 9-0 | mantissa |
//!
//! Plaintext bits are consumed least-significant-bit first within each byte.
//!
//! ## Sign schemes
//!
//! `zero` and `inf` spend one unit per plaintext bit, so a stream always holds
//! a multiple of 8 units. The sign bit is the data bit.
//!
//! ## Framed schemes
//!
//! `nan` and `subnormal` first prefix the plaintext with its length:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | plaintext length (u32, little-endian) |
//! | 4 | len | plaintext |
//!
//! The framed bytes are then cut into 9- or 10-bit groups, one group per unit.
//! The last group is zero-padded. The decoder trims the recovered bytes back to
//! the declared length.
//!
//! # Caveats
//!
//! Nothing here performs float arithmetic. Values that pass through arithmetic
//! elsewhere may not survive: NaN payloads can be canonicalised and subnormals
//! flushed to zero.

#![allow(clippy::cast_possible_truncation)]

mod bits;
mod constants;
mod decoder;
mod encoder;
mod error;
mod frame;
mod scheme;

#[cfg(test)]
mod tests;

// Re-export public API
pub use constants::{
    EXPONENT_MASK, INF_BITS, MANTISSA_MASK, MAX_INPUT_SIZE, NAN_PAYLOAD_MASK, NAN_QUIET, SIGN_BIT,
};
pub use decoder::{from_inf, from_nan, from_subnormal, from_zero};
pub use encoder::{to_inf, to_nan, to_subnormal, to_zero};
pub use error::{DecodeError, EncodeError, ParseSchemeError};
pub use scheme::{detect, Scheme, Selector};

/// Encode `data` with the given scheme
///
/// # Errors
/// `EncodeError::InputTooLarge` if `data` exceeds [`MAX_INPUT_SIZE`].
pub fn encode(data: &[u8], scheme: Scheme) -> Result<Vec<u8>, EncodeError> {
    encoder::check_input_size(data.len())?;
    tracing::debug!(len = data.len(), %scheme, "encoding");
    match scheme {
        Scheme::Zero => to_zero(data),
        Scheme::Inf => to_inf(data),
        Scheme::Nan => to_nan(data),
        Scheme::Subnormal => to_subnormal(data),
    }
}

/// Decode a stream, detecting the scheme first when `selector` is `Auto`
///
/// # Errors
/// Any [`DecodeError`] raised by detection or by the scheme's decoder.
#[must_use = "decoding returns the plaintext that should be used"]
pub fn decode(data: &[u8], selector: impl Into<Selector>) -> Result<Vec<u8>, DecodeError> {
    let selector = selector.into();
    let scheme = selector.resolve(data)?;
    tracing::debug!(len = data.len(), %selector, %scheme, "decoding");
    match scheme {
        Scheme::Zero => from_zero(data),
        Scheme::Inf => from_inf(data),
        Scheme::Nan => from_nan(data),
        Scheme::Subnormal => from_subnormal(data),
    }
}

/// Encode with a scheme given by name (`zero`, `inf`, `nan`, `subnormal`)
///
/// # Errors
/// - `EncodeError::UnknownScheme` for any other name
/// - `EncodeError::InputTooLarge` if `data` exceeds [`MAX_INPUT_SIZE`]
pub fn encode_named(data: &[u8], scheme: &str) -> Result<Vec<u8>, EncodeError> {
    encode(data, scheme.parse::<Scheme>()?)
}

/// Decode with a scheme given by name, or `auto`
///
/// # Errors
/// - `DecodeError::UnknownScheme` for an unrecognised name
/// - any error from [`decode`]
#[must_use = "decoding returns the plaintext that should be used"]
pub fn decode_named(data: &[u8], selector: &str) -> Result<Vec<u8>, DecodeError> {
    decode(data, selector.parse::<Selector>()?)
}

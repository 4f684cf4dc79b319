//! Scheme selection and auto-detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    fields, units_for, EXPONENT_MASK, FRAME_HEADER_SIZE, INF_BITS, NAN_PAYLOAD_BITS, NAN_QUIET,
    SIGN_BIT, SUBNORMAL_PAYLOAD_BITS, UNITS_PER_BYTE,
};
use crate::error::{DecodeError, ParseSchemeError};

/// Region of the fp16 bit space a stream hides its payload in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Sign bit of ±0, 1 bit per unit
    Zero,
    /// Sign bit of ±inf, 1 bit per unit
    Inf,
    /// Low 9 mantissa bits of a quiet NaN, length-framed
    #[default]
    Nan,
    /// Whole 10-bit mantissa of a positive subnormal, length-framed
    Subnormal,
}

impl Scheme {
    /// Every scheme, in detection order
    pub const ALL: [Self; 4] = [Self::Zero, Self::Inf, Self::Nan, Self::Subnormal];

    /// Name accepted by `FromStr`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Inf => "inf",
            Self::Nan => "nan",
            Self::Subnormal => "subnormal",
        }
    }

    /// Payload bits carried by each code unit
    #[must_use]
    pub const fn bits_per_unit(self) -> u32 {
        match self {
            Self::Zero | Self::Inf => 1,
            Self::Nan => NAN_PAYLOAD_BITS,
            Self::Subnormal => SUBNORMAL_PAYLOAD_BITS,
        }
    }

    /// Whether the payload carries a length prefix
    #[must_use]
    pub const fn is_framed(self) -> bool {
        matches!(self, Self::Nan | Self::Subnormal)
    }

    /// Size in bytes of the stream produced for a `plaintext_len`-byte input
    ///
    /// # Example
    /// ```
    /// use notanumber::{encode, Scheme};
    ///
    /// let data = b"Pure imagination";
    /// for scheme in Scheme::ALL {
    ///     assert_eq!(encode(data, scheme).unwrap().len(), scheme.encoded_len(data.len()));
    /// }
    /// ```
    #[must_use]
    pub const fn encoded_len(self, plaintext_len: usize) -> usize {
        let units = match self {
            Self::Zero | Self::Inf => plaintext_len * UNITS_PER_BYTE,
            Self::Nan | Self::Subnormal => {
                units_for(FRAME_HEADER_SIZE + plaintext_len, self.bits_per_unit())
            }
        };
        units * 2
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| ParseSchemeError { name: s.to_owned() })
    }
}

/// Scheme choice for decoding: a known scheme, or detect it from the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    #[default]
    Auto,
    Scheme(Scheme),
}

impl Selector {
    /// Resolve to a concrete scheme, running detection for `Auto`
    ///
    /// # Errors
    /// See [`detect`].
    pub fn resolve(self, data: &[u8]) -> Result<Scheme, DecodeError> {
        match self {
            Self::Auto => detect(data),
            Self::Scheme(scheme) => Ok(scheme),
        }
    }
}

impl From<Scheme> for Selector {
    fn from(scheme: Scheme) -> Self {
        Self::Scheme(scheme)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Scheme(scheme) => fmt::Display::fmt(scheme, f),
        }
    }
}

impl FromStr for Selector {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Scheme)
        }
    }
}

/// Infer the scheme of a stream from its first code unit
///
/// Rules are tried in a fixed order: signed zero, infinity, quiet NaN, then any
/// zero-exponent value as subnormal.
///
/// # Errors
/// - `DecodeError::InsufficientData` if `data` is shorter than one unit
/// - `DecodeError::UnrecognizedPattern` if the first unit matches no rule
///
/// # Example
/// ```
/// use notanumber::{detect, encode, Scheme};
///
/// let stream = encode(b"hello", Scheme::Inf).unwrap();
/// assert_eq!(detect(&stream), Ok(Scheme::Inf));
/// ```
pub fn detect(data: &[u8]) -> Result<Scheme, DecodeError> {
    let Some(first) = data.first_chunk::<2>() else {
        return Err(DecodeError::InsufficientData { len: data.len() });
    };
    let unit = u16::from_le_bytes(*first);
    let (_, exponent, mantissa) = fields(unit);

    let scheme = if unit == 0 || unit == SIGN_BIT {
        Scheme::Zero
    } else if exponent == INF_BITS && mantissa == 0 {
        Scheme::Inf
    } else if unit & NAN_QUIET == NAN_QUIET {
        Scheme::Nan
    } else if unit & EXPONENT_MASK == 0 {
        Scheme::Subnormal
    } else {
        return Err(DecodeError::UnrecognizedPattern { unit });
    };

    tracing::debug!(unit, %scheme, "detected scheme");
    Ok(scheme)
}

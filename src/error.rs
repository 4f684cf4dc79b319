//! Error types for notanumber encoding and decoding operations.

use std::fmt;

/// Error returned when encoding fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Plaintext is larger than `MAX_INPUT_SIZE`
    InputTooLarge { len: usize, max: usize },
    /// Scheme name is not one of `zero`, `inf`, `nan`, `subnormal`
    UnknownScheme { name: String },
}

/// Error returned when decoding fails
///
/// Unit checks report the index of the first offending code unit and its raw bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Stream is not a whole number of `group`-unit groups (`group` is 1 for
    /// the framed schemes, so only an odd byte count trips it there)
    MalformedLength { len: usize, group: usize },
    /// Zero stream holds something other than +0 or -0
    ImpureZero { index: usize, unit: u16 },
    /// Infinity stream holds a value whose exponent is not all-ones
    NotInfinity { index: usize, unit: u16 },
    /// Infinity stream holds a NaN
    UnexpectedNan { index: usize, unit: u16 },
    /// NaN stream holds a value that is not a quiet NaN
    NotQuietNan { index: usize, unit: u16 },
    /// Subnormal stream holds a value with a non-zero exponent
    NotSubnormal { index: usize, unit: u16 },
    /// Subnormal stream holds a negative value
    WrongSign { index: usize, unit: u16 },
    /// Recovered length prefix is missing (`declared` is `None`) or claims more
    /// bytes than were recovered
    CorruptedHeader { declared: Option<u32>, available: usize },
    /// Scheme name is not one of `zero`, `inf`, `nan`, `subnormal`, `auto`
    UnknownScheme { name: String },
    /// Auto-detection needs at least one whole code unit
    InsufficientData { len: usize },
    /// First code unit matches none of the scheme signatures
    UnrecognizedPattern { unit: u16 },
}

/// Error returned when parsing a scheme name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSchemeError {
    pub name: String,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTooLarge { len, max } => {
                write!(f, "input too large: {len} bytes (max {max})")
            }
            Self::UnknownScheme { name } => write!(f, "unknown scheme '{name}'"),
        }
    }
}

impl std::error::Error for EncodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLength { len, group } if *group <= 1 => {
                write!(f, "odd number of bytes ({len}) in fp16 stream")
            }
            Self::MalformedLength { len, group } => {
                write!(f, "stream of {len} bytes is not a whole number of {group}-unit groups")
            }
            Self::ImpureZero { index, unit } => {
                write!(f, "unit {index} ({unit:#06x}) is not a signed zero")
            }
            Self::NotInfinity { index, unit } => {
                write!(f, "unit {index} ({unit:#06x}) is not an infinity")
            }
            Self::UnexpectedNan { index, unit } => {
                write!(f, "unit {index} ({unit:#06x}) is a NaN among infinities")
            }
            Self::NotQuietNan { index, unit } => {
                write!(f, "unit {index} ({unit:#06x}) is not a quiet NaN")
            }
            Self::NotSubnormal { index, unit } => {
                write!(f, "unit {index} ({unit:#06x}) is not subnormal")
            }
            Self::WrongSign { index, unit } => {
                write!(f, "unit {index} ({unit:#06x}) is negative")
            }
            Self::CorruptedHeader { declared: None, available } => {
                write!(f, "corrupted length header: only {available} bytes recovered")
            }
            Self::CorruptedHeader { declared: Some(declared), available } => {
                write!(
                    f,
                    "corrupted length header: declares {declared} bytes, {available} available"
                )
            }
            Self::UnknownScheme { name } => write!(f, "unknown scheme '{name}'"),
            Self::InsufficientData { len } => {
                write!(f, "need at least 2 bytes to detect a scheme, got {len}")
            }
            Self::UnrecognizedPattern { unit } => {
                write!(f, "first unit {unit:#06x} matches no known scheme")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl fmt::Display for ParseSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheme '{}'", self.name)
    }
}

impl std::error::Error for ParseSchemeError {}

impl From<ParseSchemeError> for EncodeError {
    fn from(err: ParseSchemeError) -> Self {
        Self::UnknownScheme { name: err.name }
    }
}

impl From<ParseSchemeError> for DecodeError {
    fn from(err: ParseSchemeError) -> Self {
        Self::UnknownScheme { name: err.name }
    }
}

//! Length framing for the NaN and subnormal schemes.
//!
//! Packing 9 or 10 bits per unit rounds the payload up to a whole number of
//! units, so the plaintext is prefixed with its byte length (u32, little-endian)
//! and the decoder trims the recovered bytes back to that length.

use crate::constants::FRAME_HEADER_SIZE;
use crate::error::DecodeError;

/// Prefix `plaintext` with its length
///
/// Callers bound `plaintext` by `MAX_INPUT_SIZE`, which fits a u32.
#[must_use]
pub(crate) fn frame(plaintext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_HEADER_SIZE + plaintext.len());
    out.extend_from_slice(&(plaintext.len() as u32).to_le_bytes());
    out.extend_from_slice(plaintext);
    out
}

/// Recover the plaintext from framed bytes
///
/// # Errors
/// `DecodeError::CorruptedHeader` if fewer than 4 bytes were recovered, or if
/// the declared length runs past the recovered bytes.
pub(crate) fn unframe(recovered: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let Some((header, body)) = recovered.split_first_chunk::<FRAME_HEADER_SIZE>() else {
        return Err(DecodeError::CorruptedHeader { declared: None, available: recovered.len() });
    };

    let declared = u32::from_le_bytes(*header);
    if declared == 0 {
        return Ok(Vec::new());
    }

    body.get(..declared as usize)
        .map(<[u8]>::to_vec)
        .ok_or(DecodeError::CorruptedHeader { declared: Some(declared), available: body.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout() {
        assert_eq!(frame(b""), vec![0, 0, 0, 0]);
        assert_eq!(frame(b"hi"), vec![2, 0, 0, 0, b'h', b'i']);

        let long = vec![7u8; 0x0102];
        let framed = frame(&long);
        assert_eq!(&framed[..4], &[0x02, 0x01, 0, 0]);
        assert_eq!(framed.len(), 4 + 0x0102);
    }

    #[test]
    fn test_unframe_trims_padding() {
        let mut bytes = frame(b"abc");
        bytes.extend_from_slice(&[0, 0]);
        assert_eq!(unframe(&bytes).unwrap(), b"abc");
    }

    #[test]
    fn test_unframe_zero_length_ignores_rest() {
        assert!(unframe(&[0, 0, 0, 0]).unwrap().is_empty());
        assert!(unframe(&[0, 0, 0, 0, 0xFF, 0xFF]).unwrap().is_empty());
    }

    #[test]
    fn test_unframe_short_header() {
        assert_eq!(
            unframe(&[1, 0, 0]),
            Err(DecodeError::CorruptedHeader { declared: None, available: 3 })
        );
        assert_eq!(
            unframe(&[]),
            Err(DecodeError::CorruptedHeader { declared: None, available: 0 })
        );
    }

    #[test]
    fn test_unframe_length_past_end() {
        assert_eq!(
            unframe(&[5, 0, 0, 0, 1, 2, 3, 4]),
            Err(DecodeError::CorruptedHeader { declared: Some(5), available: 4 })
        );
        assert_eq!(
            unframe(&[0xFF, 0xFF, 0xFF, 0xFF, 1]),
            Err(DecodeError::CorruptedHeader { declared: Some(u32::MAX), available: 1 })
        );
    }

    #[test]
    fn test_unframe_exact_fit() {
        assert_eq!(unframe(&[4, 0, 0, 0, 1, 2, 3, 4]).unwrap(), vec![1, 2, 3, 4]);
    }
}

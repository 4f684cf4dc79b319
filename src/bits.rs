//! Bit window over a byte buffer.
//!
//! Fields are addressed by an absolute bit offset and laid out
//! least-significant-bit first: bit `n` of the stream is bit `n % 8` of byte
//! `n / 8`. A field of up to 16 bits starting at any shift spans at most three
//! bytes, so both directions work through a 24-bit little-endian window.

/// Widest field a single call can move
pub(crate) const MAX_WIDTH: u32 = 16;

#[inline]
const fn mask(width: u32) -> u32 {
    (1u32 << width) - 1
}

/// Read `width` bits starting at `bit_offset`
///
/// Bits past the end of `buf` read as zero.
#[inline]
#[must_use]
pub(crate) fn read_bits(buf: &[u8], bit_offset: usize, width: u32) -> u16 {
    debug_assert!((1..=MAX_WIDTH).contains(&width), "bit width out of range: {width}");
    let byte = bit_offset / 8;
    let shift = (bit_offset % 8) as u32;

    let mut window = 0u32;
    for (i, b) in buf.iter().skip(byte).take(3).enumerate() {
        window |= u32::from(*b) << (8 * i);
    }

    ((window >> shift) & mask(width)) as u16
}

/// Write the low `width` bits of `value` starting at `bit_offset`
///
/// The buffer grows with zero bytes as needed to hold the field. Bits of `buf`
/// outside the field are left untouched.
#[inline]
pub(crate) fn write_bits(buf: &mut Vec<u8>, bit_offset: usize, width: u32, value: u16) {
    debug_assert!((1..=MAX_WIDTH).contains(&width), "bit width out of range: {width}");
    let end = (bit_offset + width as usize).div_ceil(8);
    if buf.len() < end {
        buf.resize(end, 0);
    }

    let byte = bit_offset / 8;
    let shift = (bit_offset % 8) as u32;
    let field = mask(width) << shift;
    let bits = (u32::from(value) << shift) & field;

    for (i, slot) in buf[byte..end].iter_mut().enumerate() {
        let m = (field >> (8 * i)) as u8;
        let v = (bits >> (8 * i)) as u8;
        *slot = (*slot & !m) | v;
    }
}

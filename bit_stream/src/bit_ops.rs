//! Bit-level primitives shared by the reader and its tests.

/// Mask covering the low `width` bits. `width` may be 0..=64.
#[inline(always)]
pub const fn low_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Reverses the order of the low `width` bits of `value`.
///
/// Bits above `width` are discarded, so the result always fits in `width` bits.
///
/// # Panics
///
/// Panics if `width` is not in 1..=32.
///
/// # Examples
///
/// ```
/// use bit_stream::reverse_bits;
///
/// assert_eq!(reverse_bits(0b0000_0000_1, 9), 0b1_0000_0000);
/// assert_eq!(reverse_bits(0x1FF, 9), 0x1FF);
/// ```
#[inline]
pub fn reverse_bits(value: u32, width: u32) -> u32 {
    assert!(
        (1..=u32::BITS).contains(&width),
        "width must be 1..=32, got {}",
        width
    );
    value.reverse_bits() >> (u32::BITS - width)
}

/// Writes the low `bit_width` bits of `value` LSB-first, starting at `bit_offset`.
///
/// Bit `k` of the stream lives in bit `k % 8` of byte `k / 8`.
pub fn set_bits(slice: &mut [u8], bit_offset: usize, bit_width: usize, value: u64) {
    let masked = value & low_mask(bit_width as u32);

    for i in 0..bit_width {
        let bit = (masked >> i) & 1;
        let pos = bit_offset + i;
        let byte = pos / 8;
        let bit_in_byte = pos % 8;

        if bit == 1 {
            slice[byte] |= 1 << bit_in_byte;
        } else {
            slice[byte] &= !(1 << bit_in_byte);
        }
    }
}

/// Reads `bit_width` bits LSB-first starting at `bit_offset`.
pub fn get_bits(slice: &[u8], bit_offset: usize, bit_width: usize) -> u64 {
    let mut value = 0u64;

    for i in 0..bit_width {
        let pos = bit_offset + i;
        let bit = (slice[pos / 8] >> (pos % 8)) & 1;
        value |= (bit as u64) << i;
    }

    value
}

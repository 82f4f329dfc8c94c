//! Whole-file rolling checksum.
//!
//! Each step rotates the 32-bit accumulator left by one (the carried-out
//! high bit re-enters at bit 0) and adds the next byte.

use crate::SaveLayout;

#[inline(always)]
fn step(acc: u32, byte: u8) -> u32 {
    acc.rotate_left(1).wrapping_add(byte as u32)
}

/// Raw accumulator over `bytes`, with no exclusion and no byte swap.
pub fn rolling_sum(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0, |acc, &b| step(acc, b))
}

/// Checksum of `data[offset..offset + length]`, counting every byte in
/// `[exclude_start, exclude_start + exclude_length)` as zero.
///
/// The accumulator is byte-swapped before returning, so its hex digits read
/// in the same order as the stored checksum bytes appear in the file.
///
/// # Panics
///
/// Panics if `offset + length` is past the end of `data`.
pub fn checksum(
    data: &[u8],
    offset: usize,
    length: usize,
    exclude_start: usize,
    exclude_length: usize,
) -> u32 {
    let excluded = exclude_start..exclude_start.saturating_add(exclude_length);

    data[offset..offset + length]
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &b)| {
            let byte = if excluded.contains(&(offset + i)) { 0 } else { b };
            step(acc, byte)
        })
        .swap_bytes()
}

/// Checksum over all of `data` with the layout's checksum field zeroed.
pub fn file_checksum(data: &[u8], layout: &SaveLayout) -> u32 {
    checksum(
        data,
        0,
        data.len(),
        layout.checksum_offset,
        layout.checksum_len,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_is_zero() {
        assert_eq!(checksum(&[], 0, 0, 0x0C, 4), 0);
        assert_eq!(checksum(&[1, 2, 3], 2, 0, 0, 0), 0);
        assert_eq!(rolling_sum(&[]), 0);
    }

    #[test]
    fn small_input() {
        // 1 -> 2 + 2 = 4 -> 8 + 3 = 11
        assert_eq!(rolling_sum(&[1, 2, 3]), 11);
        assert_eq!(checksum(&[1, 2, 3], 0, 3, 100, 4), 0x0B00_0000);
    }

    #[test]
    fn high_bit_carries_around() {
        let mut data = vec![0u8; 33];
        data[0] = 1;
        // After 32 shifts the single set bit has wrapped back to bit 0
        assert_eq!(rolling_sum(&data[..32]), 0x8000_0000);
        assert_eq!(rolling_sum(&data), 1);
        assert_eq!(checksum(&data, 0, data.len(), 0, 0), 0x0100_0000);
    }

    #[test]
    fn excluded_bytes_count_as_zero() {
        let mut data: Vec<u8> = (0..64).collect();
        let first = checksum(&data, 0, data.len(), 0x0C, 4);
        data[0x0C..0x10].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(checksum(&data, 0, data.len(), 0x0C, 4), first);

        data[0x10] ^= 0xFF;
        assert_ne!(checksum(&data, 0, data.len(), 0x0C, 4), first);
    }

    #[test]
    fn exclusion_is_relative_to_the_whole_buffer() {
        let data = [9u8, 9, 9, 9, 5, 6];
        // Sub-range starting at 2, with bytes 3..5 zeroed
        assert_eq!(
            checksum(&data, 2, 4, 3, 2),
            rolling_sum(&[9, 0, 0, 6]).swap_bytes()
        );
    }

    #[test]
    fn matches_rolling_sum_without_exclusion() {
        let data: Vec<u8> = (0..=255).rev().collect();
        assert_eq!(
            checksum(&data, 0, data.len(), data.len(), 4),
            rolling_sum(&data).swap_bytes()
        );
    }

    #[test]
    #[should_panic]
    fn range_past_end_panics() {
        checksum(&[0u8; 4], 2, 4, 0, 0);
    }
}

//! Sliding-window bit reader over a byte source.
//!
//! # Examples
//!
//! ```rust
//! use bit_stream::{BitStreamError, BitStreamReader};
//!
//! let mut reader = BitStreamReader::from_slice(&[0xAB, 0xCD, 0xEF]);
//! assert_eq!(reader.read(4, false).unwrap(), 0xA);
//! assert_eq!(reader.read(8, false).unwrap(), 0xBC);
//! assert_eq!(reader.read(12, false).unwrap(), 0xDEF);
//! assert_eq!(reader.pending_bits(), 0);
//!
//! assert_eq!(
//!     reader.read(1, false),
//!     Err(BitStreamError::EndOfStream { requested: 1, available: 0 })
//! );
//! ```
use crate::BitStreamError;
use crate::bit_ops::{low_mask, reverse_bits};

/// Widest single read supported.
pub const MAX_READ_WIDTH: u32 = 32;

const WINDOW_BITS: u32 = u64::BITS;

#[derive(Debug, Clone)]
pub struct BitStreamReader<I> {
    source: I,
    window: u64,
    pending_bits: u32,
}

#[inline(always)]
fn validate_width(width: u32) -> Result<(), BitStreamError> {
    if (1..=MAX_READ_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(BitStreamError::InvalidBitWidth(width))
    }
}

impl<'a> BitStreamReader<core::iter::Copied<core::slice::Iter<'a, u8>>> {
    /// Creates a reader over a borrowed byte slice.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(bytes.iter().copied())
    }
}

impl<I: Iterator<Item = u8>> BitStreamReader<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
            window: 0,
            pending_bits: 0,
        }
    }

    /// Reads the next `width` bits, MSB-first from the window.
    ///
    /// Bytes are only pulled from the source while fewer than `width` bits
    /// are pending. With `reverse_byte_bits` set, each byte has its bit order
    /// flipped before it enters the window.
    ///
    /// # Errors
    ///
    /// - [`BitStreamError::InvalidBitWidth`] if `width` is not in 1..=32.
    /// - [`BitStreamError::EndOfStream`] if the source is exhausted first.
    ///   Bytes fed before that point stay pending.
    pub fn read(&mut self, width: u32, reverse_byte_bits: bool) -> Result<u32, BitStreamError> {
        validate_width(width)?;

        while self.pending_bits < width {
            let byte = self.source.next().ok_or(BitStreamError::EndOfStream {
                requested: width,
                available: self.pending_bits,
            })?;
            self.feed(if reverse_byte_bits {
                byte.reverse_bits()
            } else {
                byte
            });
        }

        let excess = self.pending_bits - width;
        let value = (self.window >> excess) & low_mask(width);
        self.pending_bits -= width;

        Ok(value as u32)
    }

    /// Reads the next `width` bits of an LSB-first packed stream.
    ///
    /// Per-byte reversal while buffering plus a reversal of the extracted
    /// value together put stream bit `k` at value bit `k`.
    ///
    /// ```
    /// use bit_stream::BitStreamReader;
    ///
    /// let mut reader = BitStreamReader::from_slice(&[0xFF, 0x01]);
    /// assert_eq!(reader.read_lsb_first(9).unwrap(), 0x1FF);
    /// ```
    pub fn read_lsb_first(&mut self, width: u32) -> Result<u32, BitStreamError> {
        let raw = self.read(width, true)?;
        Ok(reverse_bits(raw, width))
    }

    /// Bits buffered but not yet consumed.
    #[inline]
    pub fn pending_bits(&self) -> u32 {
        self.pending_bits
    }

    /// Gives back the byte source. Pending bits are dropped.
    pub fn into_inner(self) -> I {
        self.source
    }

    #[inline(always)]
    fn feed(&mut self, byte: u8) {
        debug_assert!(
            self.pending_bits + 8 <= WINDOW_BITS,
            "window overflow: {} bits pending",
            self.pending_bits
        );
        self.window = (self.window << 8) | byte as u64;
        self.pending_bits += 8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_byte_read() {
        let mut reader = BitStreamReader::from_slice(&[0b1011_0000]);
        assert_eq!(reader.read(8, true), Ok(0b0000_1101));
        assert_eq!(reader.pending_bits(), 0);
    }

    #[test]
    fn reads_span_byte_boundaries() {
        let mut reader = BitStreamReader::from_slice(&[0x12, 0x34, 0x56, 0x78, 0x9A]);
        assert_eq!(reader.read(12, false), Ok(0x123));
        assert_eq!(reader.read(8, false), Ok(0x45));
        assert_eq!(reader.read(20, false), Ok(0x6789A));
    }

    #[test]
    fn full_width_read() {
        let mut reader = BitStreamReader::from_slice(&[0x0F, 0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(reader.read(4, false), Ok(0x0));
        assert_eq!(reader.read(32, false), Ok(0xFDEA_DBEE));
        assert_eq!(reader.pending_bits(), 4);
    }

    #[test]
    fn pending_bits_only_change_by_whole_bytes_and_reads() {
        let mut reader = BitStreamReader::from_slice(&[0u8; 16]);
        let mut expected = 0u32;
        for width in [9, 21, 7, 32, 1, 25] {
            let before = reader.pending_bits();
            reader.read(width, true).unwrap();
            let fed = (width.saturating_sub(before)).div_ceil(8) * 8;
            expected = expected + fed - width;
            assert_eq!(reader.pending_bits(), expected);
            assert!(reader.pending_bits() < 8);
        }
    }

    #[test]
    fn end_of_stream_returns_no_partial_value() {
        let mut reader = BitStreamReader::from_slice(&[0xFF, 0xFF]);
        assert_eq!(reader.read(10, false), Ok(0x3FF));
        assert_eq!(
            reader.read(7, false),
            Err(BitStreamError::EndOfStream {
                requested: 7,
                available: 6
            })
        );
    }

    #[test]
    fn empty_source() {
        let mut reader = BitStreamReader::from_slice(&[]);
        assert_eq!(
            reader.read(1, true),
            Err(BitStreamError::EndOfStream {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn rejects_bad_widths() {
        let mut reader = BitStreamReader::from_slice(&[0u8; 8]);
        assert_eq!(reader.read(0, false), Err(BitStreamError::InvalidBitWidth(0)));
        assert_eq!(reader.read(33, false), Err(BitStreamError::InvalidBitWidth(33)));
        // Nothing was consumed
        assert_eq!(reader.pending_bits(), 0);
        assert_eq!(reader.into_inner().count(), 8);
    }

    #[test]
    fn readers_do_not_share_state() {
        let data = [0xA5, 0x5A, 0xC3];
        let mut a = BitStreamReader::from_slice(&data);
        let mut b = BitStreamReader::from_slice(&data);

        assert_eq!(a.read(4, false), Ok(0xA));
        assert_eq!(b.read(12, false), Ok(0xA55));
        assert_eq!(a.read(4, false), Ok(0x5));
        assert_eq!(b.read(12, false), Ok(0xAC3));
    }

    #[test]
    fn lsb_first_matches_packed_fields() {
        let mut buf = [0u8; 6];
        crate::bit_ops::set_bits(&mut buf, 0, 9, 6);
        crate::bit_ops::set_bits(&mut buf, 9, 21, 2560);
        crate::bit_ops::set_bits(&mut buf, 30, 9, 0x1FF);

        let mut reader = BitStreamReader::from_slice(&buf);
        assert_eq!(reader.read_lsb_first(9), Ok(6));
        assert_eq!(reader.read_lsb_first(21), Ok(2560));
        assert_eq!(reader.read_lsb_first(9), Ok(0x1FF));
    }
}

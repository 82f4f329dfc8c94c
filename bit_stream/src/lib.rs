//! # bit_stream
//!
//! A `no_std` compatible sliding-window bit reader.
//!
//! Bytes are pulled one at a time from any `Iterator<Item = u8>` and shifted
//! into a 64-bit window; reads of 1..=32 bits are taken MSB-first from the
//! window and may span byte boundaries.
//!
//! ```rust
//! use bit_stream::BitStreamReader;
//!
//! let mut reader = BitStreamReader::from_slice(&[0b1011_0000]);
//!
//! // Reverse each byte before buffering it
//! assert_eq!(reader.read(8, true).unwrap(), 0b0000_1101);
//! ```
//!
//! ## LSB-first streams
//!
//! Formats that pack fields least-significant-bit first can be read with
//! [`BitStreamReader::read_lsb_first`], which applies the per-byte reversal
//! and the whole-value reversal together.
//!
//! ```rust
//! use bit_stream::BitStreamReader;
//!
//! // 5 in 10 bits, then 10 in 7 bits, packed LSB-first
//! let mut reader = BitStreamReader::from_slice(&[0x05, 0x28, 0x00]);
//! assert_eq!(reader.read_lsb_first(10).unwrap(), 5);
//! assert_eq!(reader.read_lsb_first(7).unwrap(), 10);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bit_ops;
pub mod error;
pub mod reader;

pub use bit_ops::reverse_bits;
pub use error::BitStreamError;
pub use reader::{BitStreamReader, MAX_READ_WIDTH};

//! Reader for the fixed-layout character save format (`.d2s`).
//!
//! The header is a plain little-endian struct; the attribute section is a
//! packed bit stream of `(id, value)` records ending in a 9-bit terminator.
//! A whole-file rolling checksum covers every byte, with the stored checksum
//! field counted as zero.
//!
//! ```rust
//! use d2s::{Attribute, decode_attributes};
//!
//! // strength = 5, then the terminator
//! let section = [0x00, 0x0A, 0xF8, 0x0F];
//! let attrs = decode_attributes(&section).unwrap();
//! assert_eq!(attrs.len(), 1);
//! assert_eq!(attrs[0].attribute, Attribute::Strength);
//! assert_eq!(attrs[0].value, 5);
//! ```

pub mod attributes;
pub mod checksum;
pub mod error;
pub mod header;
pub mod layout;
pub mod save;

pub use attributes::{Attribute, AttributeDecoder, AttributeValue, decode_attributes};
pub use checksum::{checksum, file_checksum, rolling_sum};
pub use error::SaveError;
pub use header::D2sHeader;
pub use layout::SaveLayout;
pub use save::D2sFile;

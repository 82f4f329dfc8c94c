//! Byte offsets of the sections this crate reads.

/// Attribute section start for version 0x60 character files.
pub const ATTRIBUTE_OFFSET: usize = 767;
pub const CHECKSUM_OFFSET: usize = 0x0C;
pub const CHECKSUM_LEN: usize = 4;

/// Where the checksum and the attribute section live in a file.
///
/// `Default` matches the stock character format.
///
/// ```
/// use d2s::SaveLayout;
///
/// let layout = SaveLayout::default().with_attribute_offset(765);
/// assert_eq!(layout.attribute_offset, 765);
/// assert_eq!(layout.checksum_range(), 0x0C..0x10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveLayout {
    pub attribute_offset: usize,
    pub checksum_offset: usize,
    pub checksum_len: usize,
}

impl Default for SaveLayout {
    fn default() -> Self {
        Self {
            attribute_offset: ATTRIBUTE_OFFSET,
            checksum_offset: CHECKSUM_OFFSET,
            checksum_len: CHECKSUM_LEN,
        }
    }
}

impl SaveLayout {
    pub fn with_attribute_offset(mut self, offset: usize) -> Self {
        self.attribute_offset = offset;
        self
    }

    pub fn with_checksum_field(mut self, offset: usize, len: usize) -> Self {
        self.checksum_offset = offset;
        self.checksum_len = len;
        self
    }

    pub fn checksum_range(&self) -> core::ops::Range<usize> {
        self.checksum_offset..self.checksum_offset + self.checksum_len
    }
}

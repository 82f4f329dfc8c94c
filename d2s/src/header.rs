//! Fixed-offset header fields.
//!
//! Only the leading fields are mapped; everything after the character
//! name is left to the raw bytes.

use bytemuck_derive::{Pod, Zeroable};

/// Magic value at offset 0 of every character file.
pub const SIGNATURE: u32 = 0xAA55_AA55;

pub const HEADER_SIZE: usize = core::mem::size_of::<D2sHeader>();

pub const NAME_LEN: usize = 16;

/// Leading bytes of a character file. Integers are stored little-endian;
/// use the accessors rather than the raw fields.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct D2sHeader {
    pub signature: u32,
    pub version: u32,
    pub file_size: u32,
    pub checksum: u32,
    pub active_weapon: u32,
    pub character_name: [u8; NAME_LEN],
}

impl D2sHeader {
    /// Reads the header from the start of `bytes`, or `None` if too short.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        bytes
            .get(..HEADER_SIZE)
            .map(bytemuck::pod_read_unaligned::<D2sHeader>)
    }

    pub fn signature(&self) -> u32 {
        u32::from_le(self.signature)
    }

    pub fn has_valid_signature(&self) -> bool {
        self.signature() == SIGNATURE
    }

    pub fn version(&self) -> u32 {
        u32::from_le(self.version)
    }

    pub fn file_size(&self) -> u32 {
        u32::from_le(self.file_size)
    }

    /// Checksum as stored in the file. Not verified here.
    pub fn stored_checksum(&self) -> u32 {
        u32::from_le(self.checksum)
    }

    /// Name up to the first NUL; invalid UTF-8 is replaced.
    pub fn character_name(&self) -> String {
        let raw = &self.character_name;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        String::from_utf8_lossy(&raw[..end]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(name: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; 48];
        bytes[0..4].copy_from_slice(&SIGNATURE.to_le_bytes());
        bytes[4..8].copy_from_slice(&0x60u32.to_le_bytes());
        bytes[8..12].copy_from_slice(&48u32.to_le_bytes());
        bytes[12..16].copy_from_slice(&[0x78, 0x56, 0x34, 0x12]);
        bytes[20..20 + name.len()].copy_from_slice(name);
        bytes
    }

    #[test]
    fn layout_matches_file_offsets() {
        assert_eq!(HEADER_SIZE, 36);
        assert_eq!(core::mem::offset_of!(D2sHeader, checksum), 0x0C);
        assert_eq!(core::mem::offset_of!(D2sHeader, character_name), 20);
    }

    #[test]
    fn parse_fields() {
        let header = D2sHeader::parse(&header_bytes(b"Paladin")).unwrap();
        assert!(header.has_valid_signature());
        assert_eq!(header.version(), 0x60);
        assert_eq!(header.file_size(), 48);
        assert_eq!(header.stored_checksum(), 0x1234_5678);
        assert_eq!(header.character_name(), "Paladin");
    }

    #[test]
    fn full_length_name_has_no_terminator() {
        let header = D2sHeader::parse(&header_bytes(b"SixteenCharsName")).unwrap();
        assert_eq!(header.character_name(), "SixteenCharsName");
    }

    #[test]
    fn too_short() {
        assert!(D2sHeader::parse(&[0u8; HEADER_SIZE - 1]).is_none());
        assert!(D2sHeader::parse(&[0u8; HEADER_SIZE]).is_some());
    }
}

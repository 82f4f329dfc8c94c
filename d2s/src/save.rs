use std::fs::File;
use std::io::Read;
use std::path::Path;

use bit_stream::BitStreamReader;

use crate::attributes::{AttributeDecoder, AttributeValue};
use crate::checksum::file_checksum;
use crate::header::{D2sHeader, HEADER_SIZE};
use crate::{SaveError, SaveLayout};

/// A character file held in memory.
#[derive(Clone, Debug)]
pub struct D2sFile {
    data: Vec<u8>,
    header: D2sHeader,
    layout: SaveLayout,
}

impl D2sFile {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, SaveError> {
        Self::with_layout(data, SaveLayout::default())
    }

    /// Wraps `data`, checking it reaches the header end and the attribute offset.
    pub fn with_layout(data: Vec<u8>, layout: SaveLayout) -> Result<Self, SaveError> {
        let required = HEADER_SIZE
            .max(layout.attribute_offset)
            .max(layout.checksum_range().end);
        if data.len() < required {
            return Err(SaveError::TooSmall {
                len: data.len(),
                required,
            });
        }

        let header = D2sHeader::parse(&data).ok_or(SaveError::TooSmall {
            len: data.len(),
            required: HEADER_SIZE,
        })?;
        if !header.has_valid_signature() {
            tracing::warn!("unexpected file signature {:#010x}", header.signature());
        }

        Ok(Self {
            data,
            header,
            layout,
        })
    }

    /// Reads the whole of `reader`.
    pub fn load<R: Read>(reader: &mut R) -> Result<Self, SaveError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let save = Self::load(&mut file)?;
        tracing::debug!(
            "loaded {} ({} bytes, version {:#x})",
            path.display(),
            save.data.len(),
            save.header.version()
        );
        Ok(save)
    }

    pub fn header(&self) -> &D2sHeader {
        &self.header
    }

    pub fn layout(&self) -> &SaveLayout {
        &self.layout
    }

    pub fn character_name(&self) -> String {
        self.header.character_name()
    }

    /// Checksum of the loaded bytes, with the stored checksum field zeroed.
    pub fn compute_checksum(&self) -> u32 {
        file_checksum(&self.data, &self.layout)
    }

    /// Starts a fresh decoder over the attribute section.
    pub fn attributes(&self) -> AttributeDecoder<core::iter::Copied<core::slice::Iter<'_, u8>>> {
        let section = &self.data[self.layout.attribute_offset..];
        AttributeDecoder::new(BitStreamReader::from_slice(section))
    }

    /// Decodes the attribute section in file order.
    pub fn read_attributes(&self) -> Result<Vec<AttributeValue>, SaveError> {
        self.attributes().collect()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

//! Attribute section decoding.
//!
//! The section is a sequence of records packed LSB-first: a 9-bit id, then
//! a value whose width depends on the id. The id `0x1FF` ends the section.

use core::fmt;

use bit_stream::BitStreamReader;

use crate::SaveError;

/// Width of every attribute id in the stream.
pub const ATTRIBUTE_ID_WIDTH: u32 = 9;

/// Reserved id marking the end of the attribute section.
pub const END_OF_ATTRIBUTES: u16 = 0x1FF;

/// Resource values are stored in 1/256 units.
pub const FIXED_POINT_SCALE: u32 = 256;

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Strength = 0,
    Energy = 1,
    Dexterity = 2,
    Vitality = 3,
    UnusedStats = 4,
    UnusedSkills = 5,
    HitPoints = 6,
    MaxHitPoints = 7,
    Mana = 8,
    MaxMana = 9,
    Stamina = 10,
    MaxStamina = 11,
    Level = 12,
    Experience = 13,
    Gold = 14,
    GoldStashed = 15,
}

impl Attribute {
    /// Every known attribute, in id order.
    pub const ALL: [Attribute; 16] = [
        Attribute::Strength,
        Attribute::Energy,
        Attribute::Dexterity,
        Attribute::Vitality,
        Attribute::UnusedStats,
        Attribute::UnusedSkills,
        Attribute::HitPoints,
        Attribute::MaxHitPoints,
        Attribute::Mana,
        Attribute::MaxMana,
        Attribute::Stamina,
        Attribute::MaxStamina,
        Attribute::Level,
        Attribute::Experience,
        Attribute::Gold,
        Attribute::GoldStashed,
    ];

    /// Looks up an id. Unknown ids return `None`, never a default width.
    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Number of bits the value occupies in the stream.
    pub fn bit_width(self) -> u32 {
        match self {
            Attribute::Strength
            | Attribute::Energy
            | Attribute::Dexterity
            | Attribute::Vitality
            | Attribute::UnusedStats => 10,
            Attribute::UnusedSkills => 8,
            Attribute::HitPoints
            | Attribute::MaxHitPoints
            | Attribute::Mana
            | Attribute::MaxMana
            | Attribute::Stamina
            | Attribute::MaxStamina => 21,
            Attribute::Level => 7,
            Attribute::Experience => 32,
            Attribute::Gold | Attribute::GoldStashed => 25,
        }
    }

    /// Current/max life, mana and stamina carry 8 fractional bits.
    pub fn is_fixed_point(self) -> bool {
        matches!(
            self,
            Attribute::HitPoints
                | Attribute::MaxHitPoints
                | Attribute::Mana
                | Attribute::MaxMana
                | Attribute::Stamina
                | Attribute::MaxStamina
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Energy => "energy",
            Attribute::Dexterity => "dexterity",
            Attribute::Vitality => "vitality",
            Attribute::UnusedStats => "unused stats",
            Attribute::UnusedSkills => "unused skills",
            Attribute::HitPoints => "hit points",
            Attribute::MaxHitPoints => "max hit points",
            Attribute::Mana => "mana",
            Attribute::MaxMana => "max mana",
            Attribute::Stamina => "stamina",
            Attribute::MaxStamina => "max stamina",
            Attribute::Level => "level",
            Attribute::Experience => "experience",
            Attribute::Gold => "gold",
            Attribute::GoldStashed => "stashed gold",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One decoded record, value already scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeValue {
    pub attribute: Attribute,
    pub value: u32,
}

impl AttributeValue {
    #[inline]
    pub fn id(&self) -> u16 {
        self.attribute.id()
    }

    pub fn as_pair(&self) -> (u16, u32) {
        (self.id(), self.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Reading,
    Done,
}

/// Lazily decodes attribute records until the terminator.
///
/// Yields `Err` at most once; after the terminator or an error the iterator
/// is exhausted.
pub struct AttributeDecoder<I> {
    reader: BitStreamReader<I>,
    state: State,
    decoded: usize,
}

impl<'a> AttributeDecoder<core::iter::Copied<core::slice::Iter<'a, u8>>> {
    /// Decodes a section starting at the first byte of `bytes`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(BitStreamReader::from_slice(bytes))
    }
}

impl<I: Iterator<Item = u8>> AttributeDecoder<I> {
    pub fn new(reader: BitStreamReader<I>) -> Self {
        Self {
            reader,
            state: State::Reading,
            decoded: 0,
        }
    }

    /// Whether the terminator (or an error) has been reached.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    pub fn into_reader(self) -> BitStreamReader<I> {
        self.reader
    }

    fn next_record(&mut self) -> Result<Option<AttributeValue>, SaveError> {
        let id = self.reader.read_lsb_first(ATTRIBUTE_ID_WIDTH)? as u16;
        if id == END_OF_ATTRIBUTES {
            tracing::debug!(count = self.decoded, "reached end of attribute section");
            return Ok(None);
        }

        let attribute = Attribute::from_id(id).ok_or(SaveError::UnknownAttribute(id))?;
        let width = attribute.bit_width();
        let mut value = self.reader.read_lsb_first(width)?;
        if attribute.is_fixed_point() {
            value /= FIXED_POINT_SCALE;
        }

        tracing::trace!(id, width, value, "decoded attribute {}", attribute);
        self.decoded += 1;
        Ok(Some(AttributeValue { attribute, value }))
    }
}

impl<I: Iterator<Item = u8>> Iterator for AttributeDecoder<I> {
    type Item = Result<AttributeValue, SaveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Done {
            return None;
        }

        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.state = State::Done;
                None
            }
            Err(e) => {
                self.state = State::Done;
                Some(Err(e))
            }
        }
    }
}

impl<I: Iterator<Item = u8>> core::iter::FusedIterator for AttributeDecoder<I> {}

/// Decodes a whole attribute section into a `Vec`, in stream order.
///
/// Running out of bytes before the terminator is an error.
pub fn decode_attributes(section: &[u8]) -> Result<Vec<AttributeValue>, SaveError> {
    AttributeDecoder::from_slice(section).collect()
}

use bit_stream::BitStreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save data is {len} bytes, need at least {required}")]
    TooSmall { len: usize, required: usize },

    /// The decoded id has no known width, so the stream cannot be resynchronized.
    #[error("unknown attribute id {0}")]
    UnknownAttribute(u16),

    #[error("attribute stream: {0}")]
    BitStream(#[from] BitStreamError),
}

impl SaveError {
    /// True when the attribute section ran out before its terminator.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, SaveError::BitStream(BitStreamError::EndOfStream { .. }))
    }
}

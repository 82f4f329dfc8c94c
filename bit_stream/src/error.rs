#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitStreamError {
    #[cfg_attr(
        feature = "std",
        error("Bit width must be in the range 1..=32, got {0}")
    )]
    InvalidBitWidth(u32),

    /// The byte source ran dry before `requested` bits were buffered.
    #[cfg_attr(
        feature = "std",
        error("End of stream: requested {requested} bits, only {available} available")
    )]
    EndOfStream { requested: u32, available: u32 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitStreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitStreamError::InvalidBitWidth(n) => {
                write!(f, "Bit width must be in the range 1..=32, got {}", n)
            }
            BitStreamError::EndOfStream {
                requested,
                available,
            } => write!(
                f,
                "End of stream: requested {} bits, only {} available",
                requested, available
            ),
        }
    }
}

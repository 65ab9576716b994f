//! Error types for gamma rank coding.

use thiserror::Error;

/// Error variants for coding and analysis operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input violates an operation's contract (empty sequence, zero integer,
    /// malformed bit-string, bad alphabet).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A codeword contains no `1` bit.
    #[error("codeword has no terminating one bit")]
    MissingOneBit,

    /// A codeword's value does not fit in 64 bits.
    #[error("codeword of {bits} significant bits overflows u64")]
    Overflow {
        /// Number of significant bits the codeword carries.
        bits: usize,
    },

    /// A decoded rank falls outside the alphabet it is decoded against.
    #[error("rank {rank} out of range for alphabet of {len} symbols")]
    RankOutOfRange {
        /// The decoded rank.
        rank: u64,
        /// Length of the supplied alphabet.
        len: usize,
    },

    /// Entropy is undefined for an empty sequence.
    #[error("entropy is undefined for an empty sequence")]
    UndefinedMeasure,
}

impl Error {
    /// Whether this error came from decoding a corrupt or mismatched codeword.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::MissingOneBit | Error::Overflow { .. } | Error::RankOutOfRange { .. }
        )
    }
}

/// A specialized Result type for gamma coding operations.
pub type Result<T> = std::result::Result<T, Error>;

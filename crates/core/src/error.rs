//! Error types for the decoder.
//!
//! Nothing in the codec is retried or swallowed. Every failure is returned
//! to the caller with enough context to diagnose it without decoding again.

use thiserror::Error;

/// Top-level error type for all decode operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Format: the header or body layout is structurally invalid
/// - Decode: the bit walk could not be completed against the tree
/// - Validation: the optional count check disagreed with the header
/// - I/O: reading from a caller-supplied reader failed
#[derive(Debug, Error)]
pub enum Error {
    /// Header or body is malformed (permanent, do not retry)
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Payload bits do not form a valid code sequence
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Decoded symbol counts disagree with the header
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reader error (only from `decode_reader`)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural errors in the header or body layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A field or block extends past the end of the input
    #[error("truncated {section}: need {required} bytes, {available} available")]
    Truncated {
        section: &'static str,
        required: usize,
        available: usize,
    },

    /// The header declares no symbols, so no tree can be built
    #[error("frequency table declares zero symbols")]
    NoSymbols,

    /// A symbol byte outside the ASCII range
    #[error("symbol {byte:#04x} at entry {index} is not ASCII")]
    NonAsciiSymbol { byte: u8, index: usize },

    /// The same symbol appears in more than one entry
    #[error("symbol {symbol:?} repeated at entry {index}")]
    DuplicateSymbol { symbol: char, index: usize },

    /// `packed_bits` does not fit in `packed_bytes`
    #[error("packed_bits {packed_bits} exceeds payload of {packed_bytes} bytes")]
    PackedBitsExceedPayload { packed_bits: u32, packed_bytes: u32 },

    /// Output would exceed the configured limit
    #[error("output of {declared} bytes exceeds limit {limit}")]
    OutputTooLarge { declared: u64, limit: usize },
}

/// Failures while walking the tree against the payload bits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A bit selected a child that does not exist
    #[error("dead end while walking at bit {position} after {decoded} symbols")]
    DeadEnd { position: usize, decoded: usize },

    /// The valid bits ran out in the middle of a code
    #[error("out of message bounds at bit {position} of {packed_bits} after {decoded} symbols")]
    OutOfBounds {
        position: usize,
        packed_bits: usize,
        decoded: usize,
    },
}

/// Mismatch found by the optional validation pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("incorrect {symbol:?} frequency: header={declared} decoded={observed}")]
    CountMismatch {
        symbol: char,
        declared: u32,
        observed: u64,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for Huffman coding operations

use thiserror::Error;

/// Result type for Huffman coding operations
pub type HuffResult<T> = Result<T, HuffError>;

/// Errors that can occur while compressing or decompressing
#[derive(Error, Debug)]
pub enum HuffError {
    /// Tree construction was asked to work on an empty frequency table.
    #[error("Empty alphabet: cannot build a Huffman tree without symbols")]
    EmptyAlphabet,

    /// A byte had no code in the table used to pack it.
    #[error("Unknown symbol: byte 0x{0:02X} has no code")]
    UnknownSymbol(u8),

    /// The packed bits ran out before the last code was complete.
    #[error("Truncated stream: {0}")]
    TruncatedStream(String),

    #[error("Corrupt header: {0}")]
    CorruptHeader(String),

    /// A bit sequence that does not name any symbol of the tree.
    #[error("Invalid code at bit offset {bit_offset}")]
    InvalidCode { bit_offset: u64 },

    /// Decoding a freshly encoded payload did not give back the input.
    #[error("Verification failed: decoded output differs from input at byte {0}")]
    VerificationFailed(usize),

    #[error("Input too large: {len} bytes exceeds the limit of {max}")]
    InputTooLarge { len: usize, max: usize },

    /// The packed bitstream is longer than the header's bit count field holds.
    #[error("Packed stream too long: {bits} bits exceeds the limit of {max}")]
    PackedBitsOverflow { bits: u64, max: u64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HuffError {
    /// Whether the error describes a damaged payload rather than a codec bug
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            HuffError::TruncatedStream(_) | HuffError::CorruptHeader(_) | HuffError::InvalidCode { .. }
        )
    }
}

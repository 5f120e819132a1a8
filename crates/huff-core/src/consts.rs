//! Constants used throughout the Huffman codec

/// Number of distinct symbols (one per byte value)
pub const ALPHABET_SIZE: usize = 256;

/// Largest input accepted, bounded by the u32 length field of the header
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Largest frequency a single symbol may carry in the header
pub const MAX_FREQUENCY: u64 = u32::MAX as u64;

/// Bytes used by the fixed header fields (length, alphabet size, bit count)
pub const FIXED_HEADER_SIZE: usize = 4 + 2 + 4;

/// Bytes used by each (symbol, frequency) header entry
pub const ENTRY_SIZE: usize = 1 + 4;

/// Code assigned to the only symbol of a one-symbol alphabet
pub const SINGLE_SYMBOL_CODE: bool = false;

/// Default file extension for compressed payloads
pub const PAYLOAD_EXTENSION: &str = "huff";

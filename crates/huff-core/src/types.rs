//! Core types for the Huffman codec

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One byte value of the input alphabet
pub type Symbol = u8;

/// Size accounting for one compression run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompressionStats {
    /// Length of the uncompressed input in bytes
    pub original_bytes: usize,
    /// Length of the serialized payload (header and packed bits) in bytes
    pub compressed_bytes: usize,
    /// Meaningful bits in the packed region, padding excluded
    pub packed_bits: u64,
    /// Number of distinct symbols in the input
    pub alphabet_size: usize,
}

impl CompressionStats {
    /// Original size divided by compressed size (0.0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.compressed_bytes == 0 || self.original_bytes == 0 {
            0.0
        } else {
            self.original_bytes as f64 / self.compressed_bytes as f64
        }
    }

    /// Average code length over the input
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            self.packed_bits as f64 / self.original_bytes as f64
        }
    }

    /// Bytes taken by the packed region alone
    pub fn packed_bytes(&self) -> usize {
        self.packed_bits.div_ceil(8) as usize
    }
}

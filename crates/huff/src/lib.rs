//! # huff - Huffman byte-stream compressor
//!
//! This crate provides the high-level API for compressing and decompressing
//! byte sequences with a static Huffman code.
//!
//! ## Quick Start
//!
//! ```
//! use huff::{compress, decompress};
//!
//! let payload = compress(b"abracadabra").unwrap();
//! let bytes = payload.to_bytes().unwrap();
//!
//! let restored = decompress(&bytes).unwrap();
//! assert_eq!(restored, b"abracadabra");
//! ```
//!
//! ## Format
//!
//! The payload carries the symbol frequency table, the original length and
//! the exact packed bit count ahead of the packed bits. The decoder rebuilds
//! the Huffman tree from the frequencies; tree construction breaks ties by
//! insertion order, so both sides always arrive at the same tree.
//!
//! ## Architecture
//!
//! - `huff-core`: errors, frequency tables, size accounting
//! - `huff-bitstream`: bit packing, tree construction, code tables
//! - `huff-headers`: payload serialization
//! - `huff-encoder` / `huff-decoder`: the two pipelines

use rayon::prelude::*;

// Re-export core types
pub use huff_core::{consts, CompressionStats, FrequencyTable, HuffError, HuffResult, Symbol};

pub use huff_bitstream::{Code, CodeTable, HuffmanNode, HuffmanTree};
pub use huff_headers::{CompressedPayload, PayloadHeader};

// Re-export decoder
pub use huff_decoder::HuffDecoder;

// Re-export encoder
pub use huff_encoder::{EncoderOptions, HuffEncoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compress `input` into a payload
pub fn compress(input: &[u8]) -> HuffResult<CompressedPayload> {
    HuffEncoder::default().encode_payload(input)
}

/// Restore the bytes of a serialized payload.
///
/// A zero-length slice decodes to an empty output.
pub fn decompress(payload: &[u8]) -> HuffResult<Vec<u8>> {
    HuffDecoder::new().decode_bytes(payload)
}

/// Restore the bytes of an already parsed payload
pub fn decompress_payload(payload: &CompressedPayload) -> HuffResult<Vec<u8>> {
    HuffDecoder::new().decode_payload(payload)
}

/// Compress independent inputs in parallel, preserving order
pub fn compress_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<HuffResult<CompressedPayload>> {
    inputs
        .par_iter()
        .map(|input| compress(input.as_ref()))
        .collect()
}

/// Decompress independent serialized payloads in parallel, preserving order
pub fn decompress_batch<T: AsRef<[u8]> + Sync>(payloads: &[T]) -> Vec<HuffResult<Vec<u8>>> {
    payloads
        .par_iter()
        .map(|payload| decompress(payload.as_ref()))
        .collect()
}

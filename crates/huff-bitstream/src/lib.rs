//! Bitstream reading and writing for the Huffman codec
//!
//! This crate provides MSB-first bit packing, Huffman tree construction and
//! code derivation, and the tree walk that turns packed bits back into bytes.

pub mod bitreader;
pub mod bitwriter;
pub mod code;
pub mod huffman;

pub use bitreader::{unpack, BitReader};
pub use bitwriter::{pack, BitWriter};
pub use code::{Code, CodeTable};
pub use huffman::{HuffmanNode, HuffmanTree};

//! Core types and utilities for the Huffman codec
//!
//! This crate provides the fundamental data structures shared by the codec
//! crates: the error type, symbol frequency tables, and size accounting.

pub mod consts;
pub mod error;
pub mod frequency;
pub mod types;

pub use error::{HuffError, HuffResult};
pub use frequency::FrequencyTable;
pub use types::*;

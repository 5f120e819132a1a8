//! Compressed payload header parsing and generation

pub mod payload;

pub use payload::{CompressedPayload, PayloadHeader};

//! Huffman payload decoder implementation

use huff_bitstream::{unpack, HuffmanTree};
use huff_core::*;
use huff_headers::{CompressedPayload, PayloadHeader};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Huffman payload decoder
pub struct HuffDecoder {
    header: Option<PayloadHeader>,
}

impl HuffDecoder {
    pub fn new() -> Self {
        Self { header: None }
    }

    /// Decode a compressed file from a path
    pub fn decode_file<P: AsRef<Path>>(&mut self, path: P) -> HuffResult<Vec<u8>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        self.decode(reader)
    }

    /// Decode from a reader holding one serialized payload
    pub fn decode<R: Read>(&mut self, mut reader: R) -> HuffResult<Vec<u8>> {
        let payload = CompressedPayload::read(&mut reader)?;
        self.decode_payload(&payload)
    }

    /// Decode a serialized payload; an empty slice decodes to an empty output
    pub fn decode_bytes(&mut self, data: &[u8]) -> HuffResult<Vec<u8>> {
        let payload = CompressedPayload::from_bytes(data)?;
        self.decode_payload(&payload)
    }

    /// Rebuild the tree from the header and walk the packed bits
    pub fn decode_payload(&mut self, payload: &CompressedPayload) -> HuffResult<Vec<u8>> {
        let header = &payload.header;
        header.validate()?;
        self.header = Some(header.clone());

        if header.frequencies.is_empty() {
            if !payload.packed.is_empty() {
                log::warn!("Rejecting empty payload with {} packed bytes", payload.packed.len());
                return Err(HuffError::CorruptHeader(format!(
                    "no symbols declared but {} packed bytes present",
                    payload.packed.len()
                )));
            }
            return Ok(Vec::new());
        }

        let tree = HuffmanTree::build(&header.frequencies)?;

        let expected_bits = tree.derive_codes().encoded_bits(&header.frequencies)?;
        if expected_bits != header.packed_bits as u64 {
            log::warn!(
                "Header declares {} packed bits, frequencies imply {}",
                header.packed_bits,
                expected_bits
            );
            return Err(HuffError::CorruptHeader(format!(
                "packed bit count {} does not match the {} bits implied by the frequencies",
                header.packed_bits, expected_bits
            )));
        }

        let expected_len = header.packed_len();
        if payload.packed.len() < expected_len {
            return Err(HuffError::TruncatedStream(format!(
                "expected {} packed bytes, found {}",
                expected_len,
                payload.packed.len()
            )));
        }
        if payload.packed.len() > expected_len {
            return Err(HuffError::CorruptHeader(format!(
                "{} packed bytes exceed the {} the bit count allows",
                payload.packed.len(),
                expected_len
            )));
        }

        let output = unpack(&payload.packed, header.packed_bits as u64, &tree)?;
        if output.len() != header.original_length as usize {
            log::warn!(
                "Decoded {} bytes, header declares {}",
                output.len(),
                header.original_length
            );
            return Err(HuffError::CorruptHeader(format!(
                "decoded {} bytes but original length is {}",
                output.len(),
                header.original_length
            )));
        }

        log::debug!(
            "Decoded {} packed bytes into {} bytes",
            payload.packed.len(),
            output.len()
        );
        Ok(output)
    }

    /// Get the header of the last decoded payload
    pub fn header(&self) -> Option<&PayloadHeader> {
        self.header.as_ref()
    }
}

impl Default for HuffDecoder {
    fn default() -> Self {
        Self::new()
    }
}

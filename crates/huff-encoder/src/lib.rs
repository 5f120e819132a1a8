//! Huffman payload encoder implementation

use huff_bitstream::{pack, CodeTable, HuffmanTree};
use huff_core::*;
use huff_decoder::HuffDecoder;
use huff_headers::{CompressedPayload, PayloadHeader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encoder options
#[derive(Debug, Clone, Default)]
pub struct EncoderOptions {
    /// Decode every payload after encoding and compare it with the input
    pub verify: bool,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// Huffman payload encoder
pub struct HuffEncoder {
    options: EncoderOptions,
}

impl HuffEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode `data` to a file
    pub fn encode_file<P: AsRef<Path>>(&self, data: &[u8], path: P) -> HuffResult<CompressionStats> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let stats = self.encode(data, &mut writer)?;
        writer.flush()?;
        Ok(stats)
    }

    /// Encode `data` to a writer as one serialized payload
    pub fn encode<W: Write>(&self, data: &[u8], mut writer: W) -> HuffResult<CompressionStats> {
        let payload = self.encode_payload(data)?;
        payload.write(&mut writer)?;
        Ok(payload.stats())
    }

    /// Build the compressed payload for `data`.
    ///
    /// Empty input yields the empty payload rather than an error.
    pub fn encode_payload(&self, data: &[u8]) -> HuffResult<CompressedPayload> {
        if data.len() > consts::MAX_INPUT_LEN {
            return Err(HuffError::InputTooLarge {
                len: data.len(),
                max: consts::MAX_INPUT_LEN,
            });
        }
        if data.is_empty() {
            return Ok(CompressedPayload::empty());
        }

        let frequencies = FrequencyTable::count(data);
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = tree.derive_codes();
        let (packed, packed_bits) = pack(data, &codes)?;

        let header = PayloadHeader::new(data.len(), frequencies, packed_bits)?;
        let payload = CompressedPayload::new(header, packed);
        log::debug!(
            "Encoded {} bytes ({} symbols, max code length {}) into {} bytes",
            data.len(),
            codes.len(),
            codes.max_code_len(),
            payload.encoded_len()
        );

        if self.options.verify {
            self.verify(data, &payload)?;
        }

        Ok(payload)
    }

    /// Code table that `encode_payload` would use for `data`
    pub fn code_table(&self, data: &[u8]) -> HuffResult<CodeTable> {
        if data.is_empty() {
            return Ok(CodeTable::new());
        }
        let tree = HuffmanTree::build(&FrequencyTable::count(data))?;
        Ok(tree.derive_codes())
    }

    fn verify(&self, data: &[u8], payload: &CompressedPayload) -> HuffResult<()> {
        let decoded = HuffDecoder::new().decode_payload(payload)?;
        let mismatch = data
            .iter()
            .zip(decoded.iter())
            .position(|(a, b)| a != b)
            .or_else(|| (data.len() != decoded.len()).then(|| data.len().min(decoded.len())));
        match mismatch {
            Some(offset) => Err(HuffError::VerificationFailed(offset)),
            None => Ok(()),
        }
    }
}

impl Default for HuffEncoder {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}

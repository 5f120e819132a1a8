//! Bitstream reader implementation

use crate::huffman::HuffmanTree;
use huff_core::{HuffError, HuffResult};
use std::io::Read;

/// A bitstream reader returning bits most-significant-first from a byte stream.
///
/// An optional bit limit makes the reader stop before trailing padding.
pub struct BitReader<R: Read> {
    reader: R,
    buffer: u64,
    bits_in_buffer: usize,
    bits_read: u64,
    bit_limit: Option<u64>,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            bits_read: 0,
            bit_limit: None,
        }
    }

    /// Create a reader that refuses to read past `bit_limit` bits
    pub fn with_limit(reader: R, bit_limit: u64) -> Self {
        Self {
            bit_limit: Some(bit_limit),
            ..Self::new(reader)
        }
    }

    /// Read up to 64 bits from the stream, first bit in the highest position
    pub fn read_bits(&mut self, num_bits: usize) -> HuffResult<u64> {
        if num_bits > 64 {
            return Err(HuffError::InvalidParameter(format!(
                "cannot read {} bits at once, the limit is 64",
                num_bits
            )));
        }

        if let Some(limit) = self.bit_limit {
            if self.bits_read + num_bits as u64 > limit {
                return Err(HuffError::TruncatedStream(format!(
                    "bit limit of {} reached at bit {}",
                    limit, self.bits_read
                )));
            }
        }

        if num_bits > 32 {
            let high = self.read_bits(num_bits - 32)?;
            let low = self.read_bits(32)?;
            return Ok((high << 32) | low);
        }

        // Ensure we have enough bits in the buffer
        while self.bits_in_buffer < num_bits {
            let mut byte = [0u8; 1];
            if self.reader.read(&mut byte)? == 0 {
                return Err(HuffError::TruncatedStream(format!(
                    "unexpected end of stream at bit {}",
                    self.bits_read
                )));
            }
            self.buffer = (self.buffer << 8) | byte[0] as u64;
            self.bits_in_buffer += 8;
        }

        // Extract the requested bits
        let remaining = self.bits_in_buffer - num_bits;
        let mask = (1u64 << num_bits) - 1;
        let result = (self.buffer >> remaining) & mask;
        self.buffer &= (1u64 << remaining) - 1;
        self.bits_in_buffer = remaining;
        self.bits_read += num_bits as u64;

        Ok(result)
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> HuffResult<bool> {
        self.read_bits(1).map(|b| b != 0)
    }

    /// Number of bits consumed so far
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Bits left before the limit, if one was set
    pub fn remaining(&self) -> Option<u64> {
        self.bit_limit
            .map(|limit| limit.saturating_sub(self.bits_read))
    }

    /// Skip to byte boundary
    pub fn align_to_byte(&mut self) -> HuffResult<()> {
        let bits_to_skip = self.bits_in_buffer % 8;
        if bits_to_skip > 0 {
            self.read_bits(bits_to_skip)?;
        }
        Ok(())
    }
}

/// Decode exactly `total_bits` bits of `packed` by walking `tree`.
///
/// Fails with `TruncatedStream` if the bits run out in the middle of a code
/// or `packed` is shorter than `total_bits` requires.
pub fn unpack(packed: &[u8], total_bits: u64, tree: &HuffmanTree) -> HuffResult<Vec<u8>> {
    let mut reader = BitReader::with_limit(packed, total_bits);
    let mut output = Vec::with_capacity(packed.len() * 2);

    while reader.remaining().unwrap_or(0) > 0 {
        let code_start = reader.bits_read();
        let mut read_bit = || reader.read_bit();
        let symbol = tree.decode(code_start, &mut read_bit).map_err(|e| match e {
            HuffError::TruncatedStream(_) => HuffError::TruncatedStream(format!(
                "stream ended inside the code starting at bit {} of {}",
                code_start, total_bits
            )),
            other => other,
        })?;
        output.push(symbol);
    }

    log::debug!("Unpacked {} bits into {} symbols", total_bits, output.len());
    Ok(output)
}

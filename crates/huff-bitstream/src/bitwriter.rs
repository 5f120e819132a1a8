//! Bitstream writer implementation

use crate::code::{Code, CodeTable};
use huff_core::{HuffError, HuffResult, Symbol};
use std::io::Write;

/// A bitstream writer packing bits most-significant-first into bytes
pub struct BitWriter<W: Write> {
    writer: W,
    buffer: u64,
    bits_in_buffer: usize,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            bits_written: 0,
        }
    }

    /// Write the low `num_bits` bits of `value`, highest of them first.
    ///
    /// At most 64 bits can be written per call.
    pub fn write_bits(&mut self, value: u64, num_bits: usize) -> HuffResult<()> {
        if num_bits > 64 {
            return Err(HuffError::InvalidParameter(format!(
                "cannot write {} bits at once, the limit is 64",
                num_bits
            )));
        }
        if num_bits > 32 {
            self.write_bits(value >> 32, num_bits - 32)?;
            return self.write_bits(value & 0xFFFF_FFFF, 32);
        }

        let mask = (1u64 << num_bits) - 1;
        self.buffer = (self.buffer << num_bits) | (value & mask);
        self.bits_in_buffer += num_bits;
        self.bits_written += num_bits as u64;

        // Flush complete bytes
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;

        Ok(())
    }

    /// Write a single bit
    pub fn write_bit(&mut self, value: bool) -> HuffResult<()> {
        self.write_bits(value as u64, 1)
    }

    /// Write every bit of a Huffman code in order
    pub fn write_code(&mut self, code: &Code) -> HuffResult<()> {
        for bit in code.iter() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Number of bits written so far, padding excluded
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Align to byte boundary by writing zero bits.
    ///
    /// Padding bits count towards `bits_written`.
    pub fn align_to_byte(&mut self) -> HuffResult<()> {
        let bits_to_write = (8 - (self.bits_in_buffer % 8)) % 8;
        if bits_to_write > 0 {
            self.write_bits(0, bits_to_write)?;
        }
        Ok(())
    }

    /// Flush remaining bits, zero-padded to a whole byte, and the underlying writer.
    ///
    /// Unlike `align_to_byte`, the padding is not counted in `bits_written`.
    pub fn flush(&mut self) -> HuffResult<()> {
        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Pack the codes of `bytes` into a zero-padded byte buffer.
///
/// Returns the packed bytes and the number of meaningful bits in them.
/// Fails with `UnknownSymbol` if a byte has no code in `table`.
pub fn pack(bytes: &[Symbol], table: &CodeTable) -> HuffResult<(Vec<u8>, u64)> {
    let mut packed = Vec::with_capacity(bytes.len() / 2 + 1);
    let total_bits = {
        let mut writer = BitWriter::new(&mut packed);
        for &byte in bytes {
            writer.write_code(table.lookup(byte)?)?;
        }
        writer.flush()?;
        writer.bits_written()
    };
    log::debug!(
        "Packed {} symbols into {} bits ({} bytes)",
        bytes.len(),
        total_bits,
        packed.len()
    );
    Ok((packed, total_bits))
}

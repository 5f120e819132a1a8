//! Compressed payload layout
//!
//! A payload is a header followed by the packed bitstream. All integers are
//! big-endian:
//!
//! ```text
//! u32  original length in bytes
//! u16  alphabet size N
//! N x (u8 symbol, u32 frequency)   ascending symbol order
//! u32  packed bit count
//! ..   ceil(bit count / 8) packed bytes
//! ```
//!
//! An empty input is stored as the header alone with every field zero. A
//! zero-length byte slice is also accepted as the empty payload.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use huff_core::consts::{ALPHABET_SIZE, ENTRY_SIZE, FIXED_HEADER_SIZE, MAX_FREQUENCY, MAX_INPUT_LEN};
use huff_core::{CompressionStats, FrequencyTable, HuffError, HuffResult};
use std::collections::BTreeSet;
use std::io::{self, Cursor, Read, Write};

fn read_error(field: &str, e: io::Error) -> HuffError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        HuffError::TruncatedStream(format!("payload ended while reading {}", field))
    } else {
        HuffError::IoError(e)
    }
}

/// Header describing how a payload was packed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PayloadHeader {
    /// Length of the original input in bytes
    pub original_length: u32,
    /// Occurrence count of every symbol in the original input
    pub frequencies: FrequencyTable,
    /// Meaningful bits in the packed region, padding excluded
    pub packed_bits: u32,
}

impl PayloadHeader {
    /// Create a header, checking every value fits its wire field
    pub fn new(
        original_length: usize,
        frequencies: FrequencyTable,
        packed_bits: u64,
    ) -> HuffResult<Self> {
        if original_length > MAX_INPUT_LEN {
            return Err(HuffError::InputTooLarge {
                len: original_length,
                max: MAX_INPUT_LEN,
            });
        }
        if packed_bits > u32::MAX as u64 {
            return Err(HuffError::PackedBitsOverflow {
                bits: packed_bits,
                max: u32::MAX as u64,
            });
        }

        let header = Self {
            original_length: original_length as u32,
            frequencies,
            packed_bits: packed_bits as u32,
        };
        header.validate()?;
        Ok(header)
    }

    /// Number of packed bytes that follow the header
    pub fn packed_len(&self) -> usize {
        (self.packed_bits as usize).div_ceil(8)
    }

    /// Serialized size of the header
    pub fn encoded_len(&self) -> usize {
        FIXED_HEADER_SIZE + ENTRY_SIZE * self.frequencies.len()
    }

    /// Check the header is internally consistent
    pub fn validate(&self) -> HuffResult<()> {
        if self.frequencies.len() > ALPHABET_SIZE {
            return Err(HuffError::CorruptHeader(format!(
                "alphabet of {} symbols exceeds {}",
                self.frequencies.len(),
                ALPHABET_SIZE
            )));
        }

        if self.frequencies.is_empty() {
            if self.original_length != 0 || self.packed_bits != 0 {
                return Err(HuffError::CorruptHeader(format!(
                    "no symbols declared but original length is {} and packed bit count is {}",
                    self.original_length, self.packed_bits
                )));
            }
            return Ok(());
        }

        if let Some((symbol, count)) = self.frequencies.iter().find(|&(_, c)| c > MAX_FREQUENCY) {
            return Err(HuffError::CorruptHeader(format!(
                "frequency {} of symbol 0x{:02X} does not fit the header",
                count, symbol
            )));
        }

        let total = self.frequencies.total();
        if total != self.original_length as u64 {
            return Err(HuffError::CorruptHeader(format!(
                "frequencies sum to {} but original length is {}",
                total, self.original_length
            )));
        }

        // Every symbol costs at least one bit
        if (self.packed_bits as u64) < total {
            return Err(HuffError::CorruptHeader(format!(
                "{} packed bits cannot hold {} symbols",
                self.packed_bits, total
            )));
        }

        Ok(())
    }

    /// Write header to output.
    ///
    /// The header is validated first, so no field is narrowed to its wire
    /// width silently.
    pub fn write<W: Write>(&self, writer: &mut W) -> HuffResult<()> {
        self.validate()?;
        writer.write_u32::<BigEndian>(self.original_length)?;
        writer.write_u16::<BigEndian>(self.frequencies.len() as u16)?;
        for (symbol, count) in self.frequencies.iter() {
            writer.write_u8(symbol)?;
            writer.write_u32::<BigEndian>(count as u32)?;
        }
        writer.write_u32::<BigEndian>(self.packed_bits)?;
        Ok(())
    }

    /// Read header from input.
    ///
    /// Entries may appear in any order; they are stored in canonical
    /// ascending order. Duplicate or zero-count entries are rejected.
    pub fn read<R: Read>(reader: &mut R) -> HuffResult<Self> {
        let original_length = reader
            .read_u32::<BigEndian>()
            .map_err(|e| read_error("original length", e))?;
        let alphabet_size = reader
            .read_u16::<BigEndian>()
            .map_err(|e| read_error("alphabet size", e))? as usize;

        if alphabet_size > ALPHABET_SIZE {
            log::warn!("Rejecting header declaring {} symbols", alphabet_size);
            return Err(HuffError::CorruptHeader(format!(
                "alphabet size {} exceeds {}",
                alphabet_size, ALPHABET_SIZE
            )));
        }

        let mut frequencies = FrequencyTable::new();
        let mut seen = BTreeSet::new();
        for _ in 0..alphabet_size {
            let symbol = reader
                .read_u8()
                .map_err(|e| read_error("symbol entry", e))?;
            let count = reader
                .read_u32::<BigEndian>()
                .map_err(|e| read_error("frequency entry", e))?;

            if !seen.insert(symbol) {
                log::warn!("Rejecting header listing symbol 0x{:02X} twice", symbol);
                return Err(HuffError::CorruptHeader(format!(
                    "symbol 0x{:02X} listed twice",
                    symbol
                )));
            }
            if count == 0 {
                log::warn!("Rejecting header with a zero count for 0x{:02X}", symbol);
                return Err(HuffError::CorruptHeader(format!(
                    "symbol 0x{:02X} listed with zero frequency",
                    symbol
                )));
            }
            frequencies.add(symbol, count as u64);
        }

        let packed_bits = reader
            .read_u32::<BigEndian>()
            .map_err(|e| read_error("packed bit count", e))?;

        let header = Self {
            original_length,
            frequencies,
            packed_bits,
        };
        if let Err(e) = header.validate() {
            log::warn!("Rejecting payload header: {}", e);
            return Err(e);
        }
        log::trace!(
            "Read header: {} bytes, {} symbols, {} packed bits",
            header.original_length,
            header.frequencies.len(),
            header.packed_bits
        );
        Ok(header)
    }
}

/// A complete compressed payload: header plus packed bits
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompressedPayload {
    pub header: PayloadHeader,
    pub packed: Vec<u8>,
}

impl CompressedPayload {
    pub fn new(header: PayloadHeader, packed: Vec<u8>) -> Self {
        Self { header, packed }
    }

    /// The payload of an empty input
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.header.original_length == 0
    }

    /// Serialized size in bytes
    pub fn encoded_len(&self) -> usize {
        self.header.encoded_len() + self.packed.len()
    }

    /// Size accounting for this payload
    pub fn stats(&self) -> CompressionStats {
        CompressionStats {
            original_bytes: self.header.original_length as usize,
            compressed_bytes: self.encoded_len(),
            packed_bits: self.header.packed_bits as u64,
            alphabet_size: self.header.frequencies.len(),
        }
    }

    /// Write payload to output
    pub fn write<W: Write>(&self, writer: &mut W) -> HuffResult<()> {
        self.header.write(writer)?;
        writer.write_all(&self.packed)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> HuffResult<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_len());
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Read a whole payload from input
    pub fn read<R: Read>(reader: &mut R) -> HuffResult<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse a serialized payload.
    ///
    /// Fails with `TruncatedStream` when the packed region is shorter than
    /// the header's bit count requires and `CorruptHeader` when extra bytes
    /// follow it.
    pub fn from_bytes(data: &[u8]) -> HuffResult<Self> {
        if data.is_empty() {
            return Ok(Self::empty());
        }

        let mut cursor = Cursor::new(data);
        let header = PayloadHeader::read(&mut cursor)?;
        let packed = &data[cursor.position() as usize..];

        let expected = header.packed_len();
        if packed.len() < expected {
            log::warn!(
                "Packed region holds {} of {} bytes",
                packed.len(),
                expected
            );
            return Err(HuffError::TruncatedStream(format!(
                "expected {} packed bytes, found {}",
                expected,
                packed.len()
            )));
        }
        if packed.len() > expected {
            log::warn!(
                "Rejecting {} trailing bytes after the packed region",
                packed.len() - expected
            );
            return Err(HuffError::CorruptHeader(format!(
                "{} bytes of trailing data after the packed region",
                packed.len() - expected
            )));
        }

        Ok(Self {
            header,
            packed: packed.to_vec(),
        })
    }
}

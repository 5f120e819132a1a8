//! Huffman code words and the symbol-to-code table

use bitvec::prelude::*;
use huff_core::{FrequencyTable, HuffError, HuffResult, Symbol};
use std::collections::BTreeMap;
use std::fmt;

/// A variable-length code word, first emitted bit first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: BitVec<u8, Msb0>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Number of bits in the code
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Iterate the bits in emission order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Whether `self` is a (non-strict) prefix of `other`
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(self.bits.as_bitslice())
    }
}

impl FromIterator<bool> for Code {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from each symbol of an input to its Huffman code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: Symbol, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Look up the code for `symbol`, failing with `UnknownSymbol`
    pub fn lookup(&self, symbol: Symbol) -> HuffResult<&Code> {
        self.get(symbol).ok_or(HuffError::UnknownSymbol(symbol))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Longest code length in the table
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Whether no code is a prefix of the code of another symbol
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    /// Exact number of bits needed to pack an input with these frequencies
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> HuffResult<u64> {
        frequencies.iter().try_fold(0u64, |acc, (symbol, count)| {
            let code = self.lookup(symbol)?;
            Ok(acc + count * code.len() as u64)
        })
    }
}

/// One `symbol : code` line per entry; printable ASCII is shown as itself
impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            if symbol.is_ascii_graphic() || symbol == b' ' {
                writeln!(f, "'{}' : {}", symbol as char, code)?;
            } else {
                writeln!(f, "0x{:02X} : {}", symbol, code)?;
            }
        }
        Ok(())
    }
}

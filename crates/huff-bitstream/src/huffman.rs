//! Huffman tree construction, code derivation and symbol decoding

use crate::code::{Code, CodeTable};
use huff_core::consts::SINGLE_SYMBOL_CODE;
use huff_core::{FrequencyTable, HuffError, HuffResult, Symbol};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Huffman tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn assign_codes(&self, path: &mut Code, table: &mut CodeTable) {
        match self {
            HuffmanNode::Leaf { symbol, .. } => {
                table.insert(*symbol, path.clone());
            }
            HuffmanNode::Internal { left, right, .. } => {
                path.push(false);
                left.assign_codes(path, table);
                path.pop();

                path.push(true);
                right.assign_codes(path, table);
                path.pop();
            }
        }
    }
}

/// Priority queue entry.
///
/// Ordered so that `BinaryHeap` pops the lowest frequency first and, among
/// equal frequencies, the entry that was pushed first.
#[derive(Debug)]
struct HeapEntry {
    freq: u64,
    seq: u64,
    node: HuffmanNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A Huffman code tree built from symbol frequencies.
///
/// Construction is deterministic: leaves are pushed in ascending symbol
/// order and frequency ties are broken by push order, so the same frequency
/// table always yields the same tree. This is what lets the decoder rebuild
/// the encoder's tree from the header alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree for a non-empty frequency table
    pub fn build(frequencies: &FrequencyTable) -> HuffResult<Self> {
        if frequencies.is_empty() {
            return Err(HuffError::EmptyAlphabet);
        }

        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0u64;
        for (symbol, freq) in frequencies.iter() {
            heap.push(HeapEntry {
                freq,
                seq,
                node: HuffmanNode::Leaf { symbol, freq },
            });
            seq += 1;
        }

        while heap.len() > 1 {
            let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
                break;
            };
            let merged = HuffmanNode::merge(first.node, second.node);
            heap.push(HeapEntry {
                freq: merged.freq(),
                seq,
                node: merged,
            });
            seq += 1;
        }

        let root = heap.pop().ok_or(HuffError::EmptyAlphabet)?.node;
        log::trace!(
            "Huffman tree: {} leaves, depth {}",
            root.leaf_count(),
            root.depth()
        );
        Ok(Self { root })
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Number of leaves (distinct symbols)
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Total frequency at the root
    pub fn freq(&self) -> u64 {
        self.root.freq()
    }

    /// Derive the code of every symbol by walking the tree.
    ///
    /// Left edges append 0 and right edges append 1. A tree that is a single
    /// leaf has no edges, so its symbol is given the one-bit code `0`.
    pub fn derive_codes(&self) -> CodeTable {
        let mut table = CodeTable::new();
        match &self.root {
            HuffmanNode::Leaf { symbol, .. } => {
                table.insert(*symbol, std::iter::once(SINGLE_SYMBOL_CODE).collect());
            }
            HuffmanNode::Internal { .. } => {
                let mut path = Code::new();
                self.root.assign_codes(&mut path, &mut table);
            }
        }
        table
    }

    /// Decode one symbol, pulling bits from `read_bit` as needed.
    ///
    /// For a single-leaf tree one bit is consumed and must be `0`.
    /// `bit_offset` is only used to report where an invalid code started.
    pub fn decode<F>(&self, bit_offset: u64, read_bit: &mut F) -> HuffResult<Symbol>
    where
        F: FnMut() -> HuffResult<bool>,
    {
        let mut node = &self.root;

        if let HuffmanNode::Leaf { symbol, .. } = node {
            if read_bit()? != SINGLE_SYMBOL_CODE {
                return Err(HuffError::InvalidCode { bit_offset });
            }
            return Ok(*symbol);
        }

        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => return Ok(*symbol),
                HuffmanNode::Internal { left, right, .. } => {
                    let bit = read_bit()?;
                    node = if bit { right } else { left };
                }
            }
        }
    }
}

//! Symbol frequency analysis

use crate::Symbol;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Occurrence count for every symbol present in an input.
///
/// Symbols that never occur are absent rather than stored with a zero count.
/// Iteration runs in ascending symbol order, which is the canonical order
/// used both when seeding tree construction and when writing headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the occurrences of each byte in `bytes`
    pub fn count(bytes: &[u8]) -> Self {
        let mut histogram = [0u64; crate::consts::ALPHABET_SIZE];
        for &byte in bytes {
            histogram[byte as usize] += 1;
        }

        let counts = histogram
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as Symbol, count))
            .collect();

        let table = Self { counts };
        log::trace!("Byte frequency: {:?}", table.counts);
        table
    }

    /// Add `count` occurrences of `symbol`.
    ///
    /// A zero count leaves the table unchanged.
    pub fn add(&mut self, symbol: Symbol, count: u64) {
        if count > 0 {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }

    /// Occurrences of `symbol`, zero when absent
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted input
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(Symbol, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.add(symbol, count);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_empty() {
        let table = FrequencyTable::count(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_count_text() {
        let table = FrequencyTable::count(b"abracadabra");
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(b'a'), 5);
        assert_eq!(table.get(b'b'), 2);
        assert_eq!(table.get(b'r'), 2);
        assert_eq!(table.get(b'c'), 1);
        assert_eq!(table.get(b'd'), 1);
        assert_eq!(table.get(b'z'), 0);
        assert!(!table.contains(b'z'));
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let table = FrequencyTable::count(b"zyxZYX\x00\xFF");
        let symbols: Vec<Symbol> = table.iter().map(|(s, _)| s).collect();
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
        assert_eq!(symbols.first(), Some(&0x00));
        assert_eq!(symbols.last(), Some(&0xFF));
    }

    #[test]
    fn test_zero_counts_are_not_stored() {
        let mut table = FrequencyTable::new();
        table.add(b'q', 0);
        assert!(table.is_empty());

        let table: FrequencyTable = vec![(b'a', 3), (b'b', 0), (b'a', 2)].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'a'), 5);
    }

    #[test]
    fn test_all_byte_values() {
        let data: Vec<u8> = (0..=255u8).collect();
        let table = FrequencyTable::count(&data);
        assert_eq!(table.len(), 256);
        assert!(table.iter().all(|(_, count)| count == 1));
    }
}

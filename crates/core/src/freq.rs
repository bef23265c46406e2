//! Symbol frequency analysis.
//!
//! The first pipeline stage: one pass over the input counting how often
//! each byte occurs. The resulting table drives tree construction.
//!
//! # Invariants
//! - sum of counts equals the analyzed input length
//! - every symbol present in the input has count >= 1
//! - no symbol absent from the input appears in the table

use std::collections::BTreeMap;

/// Mapping from symbol to occurrence count.
///
/// Backed by a `BTreeMap` so iteration is always in ascending symbol
/// order, which keeps downstream tree construction reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Count symbol occurrences in `input`.
    ///
    /// Pure function; an empty input yields an empty table, which
    /// downstream stages reject (see `HuffmanTree::build`).
    pub fn analyze(input: &[u8]) -> Self {
        let mut counts = BTreeMap::new();
        for &symbol in input {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `symbol` (0 if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, i.e. the analyzed input length.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// True if no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Fold another table into this one, summing counts per symbol.
    ///
    /// Commutative and associative, so partial tables counted over input
    /// shards can be combined in any order before tree construction.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (symbol, count) in other.iter() {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts() {
        let table = FrequencyTable::analyze(b"hello");
        assert_eq!(table.count(b'h'), 1);
        assert_eq!(table.count(b'e'), 1);
        assert_eq!(table.count(b'l'), 2);
        assert_eq!(table.count(b'o'), 1);
        assert_eq!(table.distinct(), 4);
    }

    #[test]
    fn test_total_equals_input_length() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::analyze(input);
        assert_eq!(table.total(), input.len() as u64);
    }

    #[test]
    fn test_absent_symbols_do_not_appear() {
        let table = FrequencyTable::analyze(b"aab");
        assert_eq!(table.count(b'z'), 0);
        assert!(table.iter().all(|(s, _)| s == b'a' || s == b'b'));
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::analyze(b"");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.distinct(), 0);
    }

    #[test]
    fn test_iter_ascending_symbol_order() {
        let table = FrequencyTable::analyze(b"cba");
        let symbols: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'a', b'b', b'c']);
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut left = FrequencyTable::analyze(b"aabc");
        let right = FrequencyTable::analyze(b"bcdd");
        left.merge(&right);

        assert_eq!(left.count(b'a'), 2);
        assert_eq!(left.count(b'b'), 2);
        assert_eq!(left.count(b'c'), 2);
        assert_eq!(left.count(b'd'), 2);
        assert_eq!(left.total(), 8);
    }

    #[test]
    fn test_merge_matches_whole_input_analysis() {
        let input = b"merge me in any shard order";
        let (a, b) = input.split_at(11);

        let mut sharded = FrequencyTable::analyze(b);
        sharded.merge(&FrequencyTable::analyze(a));

        assert_eq!(sharded, FrequencyTable::analyze(input));
    }
}

//! Code book generation.
//!
//! Derives the symbol -> bit-string mapping from a built tree: descend
//! left appends a 0, descend right appends a 1, and the accumulated path
//! at each leaf becomes that symbol's code. Codes are prefix-free by
//! construction, since no root-to-leaf path is a prefix of another.
//!
//! A tree with a single leaf has no branches to derive a code from, so
//! the sole symbol is assigned the fixed one-bit code "0" — an empty
//! code could not be decoded unambiguously.

use std::collections::BTreeMap;

use crate::bits::BitString;
use crate::tree::{HuffmanTree, Node};

/// Mapping from symbol to its assigned bit-string code.
///
/// Built once from a tree, immutable afterwards. Every symbol present at
/// tree-build time receives exactly one non-empty code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook {
    codes: BTreeMap<u8, BitString>,
}

impl CodeBook {
    /// Generate the code book for `tree`.
    ///
    /// Each call builds a fresh mapping; nothing is shared or
    /// accumulated across invocations.
    pub fn generate(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        match tree.root() {
            Node::Leaf { symbol, .. } => {
                // Degenerate single-symbol tree: fixed 1-bit code.
                let mut code = BitString::new();
                code.push(false);
                codes.insert(*symbol, code);
            }
            root => {
                let mut path = BitString::new();
                assign(root, &mut path, &mut codes);
            }
        }

        Self { codes }
    }

    /// The code for `symbol`, if it was present at tree-build time.
    pub fn code(&self, symbol: u8) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the book holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }
}

/// Record the path to every leaf below `node`, reusing one path buffer.
fn assign(node: &Node, path: &mut BitString, codes: &mut BTreeMap<u8, BitString>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            assign(left, path, codes);
            path.pop();

            path.push(true);
            assign(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn book_for(input: &[u8]) -> CodeBook {
        let freq = FrequencyTable::analyze(input);
        let tree = HuffmanTree::build(&freq).unwrap();
        CodeBook::generate(&tree)
    }

    #[test]
    fn test_every_symbol_gets_a_code() {
        let input = b"abracadabra";
        let book = book_for(input);
        let freq = FrequencyTable::analyze(input);

        assert_eq!(book.len(), freq.distinct());
        for (symbol, _) in freq.iter() {
            assert!(book.code(symbol).is_some());
        }
    }

    #[test]
    fn test_codes_are_non_empty() {
        let book = book_for(b"some ordinary input text");
        assert!(book.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn test_prefix_free() {
        let book = book_for(b"no code may prefix another");
        let codes: Vec<&BitString> = book.iter().map(|(_, c)| c).collect();

        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i == j {
                    continue;
                }
                let is_prefix =
                    a.len() <= b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y);
                assert!(!is_prefix, "{a} is a prefix of {b}");
            }
        }
    }

    #[test]
    fn test_single_symbol_fixed_code() {
        let book = book_for(b"aaaa");
        assert_eq!(book.len(), 1);
        assert_eq!(book.code(b'a').unwrap().to_string(), "0");
    }

    #[test]
    fn test_uniform_alphabet_codes() {
        // Matches the tree shape pinned down in the tree module tests.
        let book = book_for(b"abcd");
        assert_eq!(book.code(b'a').unwrap().to_string(), "00");
        assert_eq!(book.code(b'b').unwrap().to_string(), "01");
        assert_eq!(book.code(b'c').unwrap().to_string(), "10");
        assert_eq!(book.code(b'd').unwrap().to_string(), "11");
    }

    #[test]
    fn test_frequent_symbol_has_shortest_code() {
        // 'l' is the most frequent symbol in "hello"; no other symbol
        // may have a strictly shorter code.
        let book = book_for(b"hello");
        let l_len = book.code(b'l').unwrap().len();
        assert!(book.iter().all(|(_, code)| code.len() >= l_len));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let freq = FrequencyTable::analyze(b"same codes every run");
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(CodeBook::generate(&tree), CodeBook::generate(&tree));
    }

    #[test]
    fn test_fresh_mapping_per_call() {
        let a = book_for(b"first input");
        let b = book_for(b"zz");

        // The second book must not have accumulated entries from the first.
        assert_eq!(b.len(), 1);
        assert!(b.code(b'f').is_none());
        assert!(a.code(b'z').is_none());
    }
}

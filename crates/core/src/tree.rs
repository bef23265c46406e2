//! Huffman tree construction.
//!
//! Builds an optimal prefix-code tree from a frequency table with the
//! classic greedy minimum-merge: repeatedly extract the two lightest
//! nodes, merge them under a new internal node, and reinsert, until a
//! single root remains.
//!
//! # Determinism
//!
//! Extraction order is a total order, so identical inputs always produce
//! identical trees (and therefore identical codes):
//! 1. weight ascending
//! 2. on equal weight, leaves before internal nodes
//! 3. leaves by symbol value ascending
//! 4. internal nodes by creation sequence
//!
//! The first node extracted becomes the left child, the second the right.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// A node in the prefix-code tree.
///
/// The tagged representation makes invalid shapes unrepresentable: a
/// leaf carries exactly one symbol and no children, an internal node
/// carries exactly two owned children and no symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node for a single symbol.
    Leaf { symbol: u8, weight: u64 },
    /// Branching node; weight is the sum of both children's weights.
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Combined frequency of all symbols under this node.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn count_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.count_leaves() + right.count_leaves(),
        }
    }

    fn count_internal(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => {
                1 + left.count_internal() + right.count_internal()
            }
        }
    }
}

/// Secondary extraction key for nodes of equal weight.
///
/// Derived ordering gives leaves (by symbol) priority over internal
/// nodes (by creation sequence).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum TieKey {
    Leaf(u8),
    Internal(u64),
}

/// Heap entry pairing a node with its extraction key.
struct HeapEntry {
    weight: u64,
    tie: TieKey,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.tie == other.tie
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.tie.cmp(&other.tie))
    }
}

/// An immutable prefix-code tree.
///
/// Built once per input; consumed read-only by code generation and
/// decoding. For n distinct symbols the tree has exactly n leaves and
/// n - 1 internal nodes (a single distinct symbol yields a lone leaf).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `freq` with the greedy minimum-merge.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if the table has no symbols.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Min-heap via Reverse; seeded in ascending symbol order.
        let mut heap = BinaryHeap::with_capacity(freq.distinct());
        for (symbol, weight) in freq.iter() {
            heap.push(Reverse(HeapEntry {
                weight,
                tie: TieKey::Leaf(symbol),
                node: Node::Leaf { symbol, weight },
            }));
        }

        let mut next_seq = 0u64;
        while heap.len() > 1 {
            // Both pops are guaranteed by the loop condition.
            let Reverse(first) = heap.pop().unwrap();
            let Reverse(second) = heap.pop().unwrap();

            let weight = first.weight + second.weight;
            heap.push(Reverse(HeapEntry {
                weight,
                tie: TieKey::Internal(next_seq),
                node: Node::Internal {
                    weight,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            }));
            next_seq += 1;
        }

        let Reverse(root) = heap.pop().unwrap();
        Ok(Self { root: root.node })
    }

    /// The root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaf nodes (= distinct symbols at build time).
    pub fn leaf_count(&self) -> usize {
        self.root.count_leaves()
    }

    /// Number of internal nodes (always `leaf_count() - 1` for n >= 2).
    pub fn internal_count(&self) -> usize {
        self.root.count_internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_rejected() {
        let freq = FrequencyTable::analyze(b"");
        assert_eq!(HuffmanTree::build(&freq), Err(Error::EmptyInput));
    }

    #[test]
    fn test_single_symbol_is_lone_leaf() {
        let freq = FrequencyTable::analyze(b"aaaa");
        let tree = HuffmanTree::build(&freq).unwrap();

        assert_eq!(
            tree.root(),
            &Node::Leaf {
                symbol: b'a',
                weight: 4
            }
        );
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.internal_count(), 0);
    }

    #[test]
    fn test_root_weight_is_input_length() {
        let input = b"mississippi";
        let freq = FrequencyTable::analyze(input);
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.root().weight(), input.len() as u64);
    }

    #[test]
    fn test_node_counts() {
        let freq = FrequencyTable::analyze(b"hello world");
        let tree = HuffmanTree::build(&freq).unwrap();

        let n = freq.distinct();
        assert_eq!(tree.leaf_count(), n);
        assert_eq!(tree.internal_count(), n - 1);
    }

    #[test]
    fn test_tie_break_shape_uniform_alphabet() {
        // Four symbols, all weight 1. Leaves merge in symbol order
        // (a with b, then c with d), then the two internal nodes merge
        // in creation order.
        let freq = FrequencyTable::analyze(b"abcd");
        let tree = HuffmanTree::build(&freq).unwrap();

        let leaf = |symbol| {
            Box::new(Node::Leaf { symbol, weight: 1 })
        };
        let expected = Node::Internal {
            weight: 4,
            left: Box::new(Node::Internal {
                weight: 2,
                left: leaf(b'a'),
                right: leaf(b'b'),
            }),
            right: Box::new(Node::Internal {
                weight: 2,
                left: leaf(b'c'),
                right: leaf(b'd'),
            }),
        };
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn test_build_is_deterministic() {
        let freq = FrequencyTable::analyze(b"deterministic trees or bust");
        let first = HuffmanTree::build(&freq).unwrap();
        let second = HuffmanTree::build(&freq).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_internal_node_has_two_children() {
        // Structural property of the enum plus the merge loop: weights
        // of internal nodes always equal the sum of their children.
        fn check(node: &Node) {
            if let Node::Internal {
                weight,
                left,
                right,
            } = node
            {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }

        let freq = FrequencyTable::analyze(b"structural soundness");
        let tree = HuffmanTree::build(&freq).unwrap();
        check(tree.root());
    }
}

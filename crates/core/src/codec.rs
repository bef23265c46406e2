//! Bit-level encoding and decoding.
//!
//! `encode` concatenates each input symbol's code into one bit stream.
//! `decode` is the inverse state machine: walk the tree bit by bit
//! (0 = left, 1 = right), emit the symbol on reaching a leaf, reset to
//! the root, repeat. A well-formed stream ends exactly when the walk is
//! back at the root.
//!
//! `verify` is the round-trip check the pipeline treats as a first-class
//! outcome: decoded output must equal the original input exactly.

use crate::bits::BitString;
use crate::codebook::CodeBook;
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Encode `input` by concatenating code book entries in input order.
///
/// # Errors
/// Returns [`Error::UnknownSymbol`] if any symbol has no code — a
/// code book / input mismatch that only occurs when the book was
/// generated from different data.
pub fn encode(input: &[u8], codes: &CodeBook) -> Result<BitString> {
    let mut bits = BitString::with_capacity(input.len());
    for &symbol in input {
        let code = codes
            .code(symbol)
            .ok_or(Error::UnknownSymbol { symbol })?;
        bits.append(code);
    }
    Ok(bits)
}

/// Decode `bits` back into the original symbol sequence.
///
/// # Errors
/// - [`Error::TruncatedStream`] if the stream ends mid-code
/// - [`Error::MalformedTree`] if the walk would step past a leaf
///   (unreachable for trees built by [`HuffmanTree::build`])
pub fn decode(bits: &BitString, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let root = tree.root();

    // Degenerate single-leaf tree: the one-bit code carries no branch
    // information, so every consumed bit emits the sole symbol.
    if let Node::Leaf { symbol, .. } = root {
        return Ok(vec![*symbol; bits.len()]);
    }

    let mut output = Vec::new();
    let mut cursor = root;

    for bit in bits.iter() {
        cursor = match cursor {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // A leaf is always consumed and reset below; landing here
            // means the tree violated its own structure.
            Node::Leaf { .. } => return Err(Error::MalformedTree),
        };

        if let Node::Leaf { symbol, .. } = cursor {
            output.push(*symbol);
            cursor = root;
        }
    }

    if !std::ptr::eq(cursor, root) {
        return Err(Error::TruncatedStream {
            position: bits.len(),
        });
    }

    Ok(output)
}

/// Structural equality check between the original and decoded sequences.
pub fn verify(original: &[u8], decoded: &[u8]) -> bool {
    original == decoded
}

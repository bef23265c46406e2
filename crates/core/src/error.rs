//! Error types for the Huffman codec.
//!
//! All operations return structured errors rather than panicking.
//! Every error here is fatal for the input that produced it: Huffman
//! coding is deterministic and stateless, so retrying with the same
//! input yields the same failure. Callers report and stop.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - `EmptyInput`: nothing to build a tree from
/// - `UnknownSymbol`: encoder/code book mismatch (caller misuse)
/// - `TruncatedStream`: bit stream ends in the middle of a code
/// - `MalformedTree`: internal invariant broken during decoding
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The frequency table is empty; a tree needs at least one leaf.
    #[error("empty input: cannot build a huffman tree from zero symbols")]
    EmptyInput,

    /// The encoder was handed a symbol with no entry in the code book.
    ///
    /// This cannot happen when the code book was generated from the same
    /// input's frequencies, but the encoder checks rather than assumes.
    #[error("symbol {symbol:#04x} has no code book entry")]
    UnknownSymbol { symbol: u8 },

    /// The bit stream ended while the decoder was mid-code.
    ///
    /// A well-formed stream always ends exactly on a code boundary;
    /// anything else signals truncation or corruption.
    #[error("bit stream ended mid-code at bit {position}")]
    TruncatedStream { position: usize },

    /// Decoding tried to step past a leaf node.
    ///
    /// Unreachable for trees produced by `HuffmanTree::build`; kept as a
    /// checked invariant rather than an assumption.
    #[error("malformed tree: traversal descended past a leaf")]
    MalformedTree,
}

/// Type alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

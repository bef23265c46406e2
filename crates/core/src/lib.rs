//! huffcode-core: Lossless text compression via Huffman coding
//!
//! This library implements a static Huffman codec: analyze symbol
//! frequencies in a byte stream, build an optimal prefix-code tree,
//! derive per-symbol bit codes, encode the stream into a bit sequence,
//! and decode that sequence back to the original bytes.
//!
//! # Architecture
//!
//! The pipeline runs leaf-first through clear module boundaries:
//! - `freq`: symbol frequency analysis
//! - `tree`: prefix-code tree construction (greedy minimum-merge)
//! - `codebook`: symbol -> bit-string code derivation
//! - `codec`: bit-level encoding, decoding, and round-trip verification
//! - `bits`: the logical bit-sequence type shared by all stages
//! - `stats`: size measurements over an encode run
//!
//! ```text
//! input -> FrequencyTable -> HuffmanTree -> CodeBook -> encode
//!       -> BitString -> decode -> output -> verify
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: every failure is a structured [`Error`]
//! - **Deterministic**: tree construction uses a documented total order,
//!   so identical inputs always yield identical codes
//! - **Immutable stages**: table, tree, and code book are built once and
//!   only read afterwards
//! - **Pure**: no I/O and no shared state anywhere in the codec
//!
//! # Example
//! ```
//! use huffcode_core::{CodeBook, FrequencyTable, HuffmanTree, codec};
//!
//! let input = b"hello";
//! let freq = FrequencyTable::analyze(input);
//! let tree = HuffmanTree::build(&freq)?;
//! let codes = CodeBook::generate(&tree);
//!
//! let bits = codec::encode(input, &codes)?;
//! let decoded = codec::decode(&bits, &tree)?;
//! assert!(codec::verify(input, &decoded));
//! # Ok::<(), huffcode_core::Error>(())
//! ```

pub mod bits;
pub mod codebook;
pub mod codec;
pub mod error;
pub mod freq;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use bits::BitString;
pub use codebook::CodeBook;
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use stats::CompressionStats;
pub use tree::HuffmanTree;

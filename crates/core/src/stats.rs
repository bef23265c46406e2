//! Compression statistics.
//!
//! Pure measurements over an input and its encoded bit stream. All
//! formatting and reporting belongs to the caller; this module only
//! computes the numbers.

use crate::bits::BitString;

/// Size measurements for one encode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Original input length in bytes.
    pub input_bytes: usize,
    /// Encoded output length in bits.
    pub encoded_bits: usize,
}

impl CompressionStats {
    /// Measure `input` against its encoded form.
    pub fn measure(input: &[u8], encoded: &BitString) -> Self {
        Self {
            input_bytes: input.len(),
            encoded_bits: encoded.len(),
        }
    }

    /// Original size in bits (8 per input byte).
    pub fn input_bits(&self) -> usize {
        self.input_bytes * 8
    }

    /// Encoded bits divided by original bits (0.0 for empty input).
    ///
    /// Below 1.0 means the encoding is smaller than the original. It may
    /// exceed 1.0 for tiny uniform alphabets; that is a property of
    /// Huffman coding, not a failure.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.input_bits() as f64
        }
    }

    /// Bits saved relative to the original (0 when the encoding grew).
    pub fn saved_bits(&self) -> usize {
        self.input_bits().saturating_sub(self.encoded_bits)
    }
}

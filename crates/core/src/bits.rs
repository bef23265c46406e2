//! Logical bit sequences.
//!
//! A `BitString` is an ordered sequence of binary digits: the output of
//! the encoder, the input of the decoder, and the representation of each
//! symbol's code. Bits are stored packed MSB-first (most significant bit
//! first) into a byte buffer, with an exact bit count kept alongside so
//! the final partial byte's padding is never mistaken for data.
//!
//! Packing is an internal representation choice only; the public API
//! speaks in individual bits and never exposes byte-boundary semantics.
//!
//! # Example
//! ```
//! use huffcode_core::bits::BitString;
//!
//! let mut bits = BitString::new();
//! bits.push(true);
//! bits.push(false);
//! bits.push(true);
//! assert_eq!(bits.len(), 3);
//! assert_eq!(bits.to_string(), "101");
//! ```

use std::fmt;

/// An ordered sequence of bits, packed MSB-first.
///
/// # Invariants
/// - `bit_len <= bytes.len() * 8`
/// - all bits past `bit_len` in the final byte are zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString {
    /// Packed storage; the last byte may be partial.
    bytes: Vec<u8>,
    /// Exact number of valid bits.
    bit_len: usize,
}

impl BitString {
    /// Create an empty bit string.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    /// Create an empty bit string with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    /// Number of bits in the sequence.
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// True if the sequence contains no bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        let offset = self.bit_len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - offset);
        }
        self.bit_len += 1;
    }

    /// Remove and return the last bit, or `None` if empty.
    pub fn pop(&mut self) -> Option<bool> {
        if self.bit_len == 0 {
            return None;
        }
        self.bit_len -= 1;
        let byte_idx = self.bit_len / 8;
        let offset = self.bit_len % 8;
        let mask = 1u8 << (7 - offset);
        let bit = self.bytes[byte_idx] & mask != 0;
        // Keep padding bits zero so equality stays structural.
        self.bytes[byte_idx] &= !mask;
        if offset == 0 {
            self.bytes.pop();
        }
        Some(bit)
    }

    /// Return the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some(byte & (1 << (7 - index % 8)) != 0)
    }

    /// Append all bits of `other`, in order.
    pub fn append(&mut self, other: &BitString) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            bits: self,
            index: 0,
        }
    }

    /// The packed bytes, final byte zero-padded.
    ///
    /// Only meaningful together with [`len`](Self::len); padding bits are
    /// indistinguishable from data otherwise.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Iterator over the bits of a [`BitString`].
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    bits: &'a BitString,
    index: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.index)?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitString::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

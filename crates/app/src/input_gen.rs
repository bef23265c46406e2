//! Sample input generation.
//!
//! When no input file or literal is given, we generate text with skewed
//! symbol frequencies so the compression behavior is visible: a uniform
//! alphabet would make every code the same length and the ratio dull.
//!
//! Letters are drawn with roughly English-like weights, broken into
//! word-shaped runs separated by spaces and the occasional newline.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letters ordered from most to least frequent, with a weight each.
/// Rough English letter frequencies, scaled to small integers.
const WEIGHTED_LETTERS: &[(u8, u32)] = &[
    (b'e', 127),
    (b't', 91),
    (b'a', 82),
    (b'o', 75),
    (b'i', 70),
    (b'n', 67),
    (b's', 63),
    (b'h', 61),
    (b'r', 60),
    (b'd', 43),
    (b'l', 40),
    (b'c', 28),
    (b'u', 28),
    (b'm', 24),
    (b'w', 24),
    (b'f', 22),
    (b'g', 20),
    (b'y', 20),
    (b'p', 19),
    (b'b', 15),
    (b'v', 10),
    (b'k', 8),
    (b'j', 2),
    (b'x', 2),
    (b'q', 1),
    (b'z', 1),
];

/// Generate sample text with skewed letter frequencies.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of the generated text
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let total_weight: u32 = WEIGHTED_LETTERS.iter().map(|&(_, w)| w).sum();

    let mut text = Vec::with_capacity(size_bytes);
    let mut word_len = 0usize;

    while text.len() < size_bytes {
        if word_len >= rng.gen_range(3..=9) {
            // End the word; roughly every tenth break is a newline.
            let separator = if rng.gen_range(0..10) == 0 { b'\n' } else { b' ' };
            text.push(separator);
            word_len = 0;
            continue;
        }

        let mut pick = rng.gen_range(0..total_weight);
        for &(letter, weight) in WEIGHTED_LETTERS {
            if pick < weight {
                text.push(letter);
                break;
            }
            pick -= weight;
        }
        word_len += 1;
    }

    text.truncate(size_bytes);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 100, 512, 4096] {
            assert_eq!(generate_sample_text(7, size).len(), size);
        }
    }

    #[test]
    fn test_determinism() {
        let a = generate_sample_text(12345, 2048);
        let b = generate_sample_text(12345, 2048);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_sample_text(1, 1024);
        let b = generate_sample_text(2, 1024);
        assert_ne!(a, b);
    }

    #[test]
    fn test_frequencies_are_skewed() {
        let text = generate_sample_text(99, 8192);
        let e_count = text.iter().filter(|&&b| b == b'e').count();
        let z_count = text.iter().filter(|&&b| b == b'z').count();
        assert!(e_count > z_count);
    }
}

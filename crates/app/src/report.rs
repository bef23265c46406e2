//! Console reporting for the compression pipeline.
//!
//! All presentation lives here: frequency tables, code book listings,
//! size summaries, and the round-trip verdict. The codec itself only
//! deals in raw symbols; human-readable labels for whitespace bytes are
//! a display concern and never leak into the core.

use huffcode_core::{BitString, CodeBook, CompressionStats, FrequencyTable};

/// Human-readable label for a symbol.
///
/// Whitespace and non-printable bytes get bracketed names so table rows
/// stay aligned and visible.
fn display_label(symbol: u8) -> String {
    match symbol {
        b' ' => "[space]".to_string(),
        b'\n' => "[newline]".to_string(),
        b'\t' => "[tab]".to_string(),
        s if s.is_ascii_graphic() => (s as char).to_string(),
        s => format!("[{s:#04x}]"),
    }
}

/// Print the frequency table: symbol, count, and numeric byte value,
/// most frequent first.
pub fn print_frequency_table(freq: &FrequencyTable) {
    println!("=== Character Frequencies ===");
    println!("{:<10} {:<8} {:<8}", "Char", "Count", "Byte");

    let mut rows: Vec<(u8, u64)> = freq.iter().collect();
    rows.sort_by_key(|&(symbol, count)| (std::cmp::Reverse(count), symbol));

    for (symbol, count) in rows {
        println!("{:<10} {:<8} {:<8}", display_label(symbol), count, symbol);
    }
    println!();
}

/// Print the code book, shortest codes first.
pub fn print_codebook(codes: &CodeBook) {
    println!("=== Huffman Codes ===");

    let mut rows: Vec<(u8, String)> = codes
        .iter()
        .map(|(symbol, code)| (symbol, code.to_string()))
        .collect();
    rows.sort_by(|a, b| (a.1.len(), &a.1).cmp(&(b.1.len(), &b.1)));

    for (symbol, code) in rows {
        println!("{:<10} {}", display_label(symbol), code);
    }
    println!();
}

/// Print encoded-size figures and the compression ratio.
pub fn print_summary(stats: &CompressionStats, encoded: &BitString) {
    println!("=== Compression ===");
    if encoded.len() <= 128 {
        println!("Encoded bits: {encoded}");
    }
    println!("Original size: {} bytes ({} bits)", stats.input_bytes, stats.input_bits());
    println!("Encoded size: {} bits", stats.encoded_bits);
    println!("Ratio: {:.1}%", stats.compression_ratio() * 100.0);
    println!("Saved: {} bits", stats.saved_bits());
    println!();
}

/// Print the round-trip verification verdict.
pub fn print_verification(passed: bool) {
    if passed {
        println!("Verification: PASSED (decoded output matches input)");
    } else {
        println!("Verification: FAILED (decoded output differs from input)");
    }
}

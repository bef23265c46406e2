//! huffcode: compress text with Huffman coding and verify the round trip.
//!
//! Runs the full pipeline over a file, a literal string, or a seeded
//! sample: frequency analysis -> tree construction -> code generation
//! -> encode -> decode -> verify, then reports the results.

mod config;
mod input_gen;
mod report;

use std::process::ExitCode;

use huffcode_core::{codec, CodeBook, CompressionStats, FrequencyTable, HuffmanTree};

use config::{Config, InputSource};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try: huffcode --help");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(passed) if passed => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Execute the pipeline and report; returns the verification verdict.
fn run(config: &Config) -> Result<bool, String> {
    let input = load_input(config)?;

    let freq = FrequencyTable::analyze(&input);
    let tree = HuffmanTree::build(&freq).map_err(|e| e.to_string())?;
    let codes = CodeBook::generate(&tree);

    let encoded = codec::encode(&input, &codes).map_err(|e| e.to_string())?;
    let decoded = codec::decode(&encoded, &tree).map_err(|e| e.to_string())?;
    let passed = codec::verify(&input, &decoded);

    if config.print_freq {
        report::print_frequency_table(&freq);
    }
    if config.print_codes {
        report::print_codebook(&codes);
    }

    let stats = CompressionStats::measure(&input, &encoded);
    report::print_summary(&stats, &encoded);
    report::print_verification(passed);

    Ok(passed)
}

/// Resolve the configured input source into bytes.
fn load_input(config: &Config) -> Result<Vec<u8>, String> {
    match &config.input {
        InputSource::File(path) => {
            std::fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
        }
        InputSource::Text(text) => Ok(text.clone().into_bytes()),
        InputSource::Sample => {
            println!("No input given; compressing a generated sample (seed {})", config.seed);
            println!();
            Ok(input_gen::generate_sample_text(config.seed, config.sample_bytes))
        }
    }
}

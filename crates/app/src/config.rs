//! Configuration for the huffcode command-line tool.
//!
//! Handles parsing command-line arguments and choosing sensible
//! defaults. The tool works with ZERO arguments: without an input file
//! or literal text it compresses a generated sample, seeded so runs are
//! reproducible.

use std::path::PathBuf;

/// Where the input bytes come from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Read a file from disk.
    File(PathBuf),
    /// Use a literal string from the command line.
    Text(String),
    /// Generate seeded sample text.
    Sample,
}

/// Complete configuration for one compression run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input source (file, literal text, or generated sample)
    pub input: InputSource,

    /// Seed for sample generation
    pub seed: u64,

    /// Size of generated sample text in bytes
    pub sample_bytes: usize,

    /// Whether to print the frequency table
    pub print_freq: bool,

    /// Whether to print the code book
    pub print_codes: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If neither `--in` nor `--text` is given, a sample input is
    /// generated. Without `--seed` the sample seed is time-based (and
    /// printed, so the run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input: Option<InputSource> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_freq = true;
        let mut print_codes = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input = Some(InputSource::File(PathBuf::from(&args[i])));
                }
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    input = Some(InputSource::Text(args[i].clone()));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--no-freq" => {
                    print_freq = false;
                }
                "--no-codes" => {
                    print_codes = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input: input.unwrap_or(InputSource::Sample),
            seed,
            sample_bytes: sample_bytes.unwrap_or(512),
            print_freq,
            print_codes,
        })
    }
}

fn print_help() {
    println!("huffcode: Huffman text compression with round-trip verification");
    println!();
    println!("USAGE:");
    println!("    huffcode [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>           Compress the contents of a file");
    println!("    --text <STRING>       Compress a literal string");
    println!("    --seed <N>            Seed for the generated sample input");
    println!("    --sample-bytes <N>    Size of the generated sample (default: 512)");
    println!();
    println!("    --no-freq             Don't print the frequency table");
    println!("    --no-codes            Don't print the code book");
    println!("    --help, -h            Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffcode                           # Compress a seeded sample");
    println!("    huffcode --text 'hello'            # Compress a literal");
    println!("    huffcode --in notes.txt --no-freq  # Compress a file, skip the table");
    println!();
}

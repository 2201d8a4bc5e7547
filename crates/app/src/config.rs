//! Configuration for the infocalc CLI.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//!
//! # Philosophy
//!
//! `info` mode works with ZERO arguments: with no input given, a sample text
//! is generated from a seed, and the seed is printed so the run is
//! reproducible. `huffman` mode needs an explicit frequency specification.

use infocalc_core::info::DEFAULT_PULSE_MS;
use std::path::PathBuf;

/// Which analysis branch to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Frequency table + Hartley/entropy metrics over text
    Info,
    /// Huffman tree, code table, and bit cost over explicit frequencies
    Huffman,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Analysis branch
    pub mode: Mode,

    // === Input (at most one) ===
    /// Inline text (info mode)
    pub text: Option<String>,

    /// Inline frequency specification (huffman mode)
    pub freqs: Option<String>,

    /// Input file path, read as plain text
    pub input_file: Option<PathBuf>,

    // === Parameters ===
    /// Pulse duration r in milliseconds
    pub pulse_ms: f64,

    /// Seed for sample-text generation
    pub seed: u64,

    /// Length of generated sample text in characters
    pub sample_chars: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no input flag is provided, `info` mode falls back to a generated
    /// sample (seeded by `--seed` or the current time). `huffman` mode with
    /// no input is an error.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode = Mode::Info;
        let mut text: Option<String> = None;
        let mut freqs: Option<String> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut pulse_ms: Option<f64> = None;
        let mut seed: Option<u64> = None;
        let mut sample_chars: Option<usize> = None;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--mode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mode requires info or huffman".to_string());
                    }
                    mode = match args[i].as_str() {
                        "info" => Mode::Info,
                        "huffman" => Mode::Huffman,
                        other => return Err(format!("unknown mode: {other}")),
                    };
                }
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    text = Some(args[i].clone());
                }
                "--freqs" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--freqs requires a specification".to_string());
                    }
                    freqs = Some(args[i].clone());
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--pulse" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--pulse requires a number".to_string());
                    }
                    pulse_ms = Some(args[i].parse().map_err(|_| "invalid pulse")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-chars requires a number".to_string());
                    }
                    sample_chars = Some(args[i].parse().map_err(|_| "invalid sample-chars")?);
                }
                "--print-config" => {
                    print_config = true;
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

        // Validate input combinations
        let sources = [text.is_some(), freqs.is_some(), input_file.is_some()]
            .iter()
            .filter(|&&given| given)
            .count();
        if sources > 1 {
            return Err("give at most one of --text, --freqs, --in".to_string());
        }
        if text.is_some() && mode == Mode::Huffman {
            return Err("--text applies to info mode; use --freqs".to_string());
        }
        if freqs.is_some() && mode == Mode::Info {
            return Err("--freqs applies to huffman mode; use --text".to_string());
        }
        if mode == Mode::Huffman && sources == 0 {
            return Err("huffman mode requires --freqs or --in".to_string());
        }

        let pulse_ms = pulse_ms.unwrap_or(DEFAULT_PULSE_MS);
        if !(pulse_ms.is_finite() && pulse_ms > 0.0) {
            return Err(format!("pulse must be positive, got {pulse_ms}"));
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
            mode,
            text,
            freqs,
            input_file,
            pulse_ms,
            seed,
            sample_chars: sample_chars.unwrap_or(400),
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        match (&self.text, &self.freqs, &self.input_file) {
            (Some(text), _, _) => println!("Input: inline text ({} chars)", text.chars().count()),
            (_, Some(freqs), _) => println!("Input: inline frequencies ({freqs})"),
            (_, _, Some(path)) => println!("Input: file {}", path.display()),
            _ => println!("Input: generated sample ({} chars)", self.sample_chars),
        }
        println!("Pulse duration: {} ms", self.pulse_ms);
        println!("Seed: {}", self.seed);
        println!();
    }
}

fn print_help() {
    println!("infocalc: Information-theory metrics and Huffman coding calculator");
    println!();
    println!("USAGE:");
    println!("    infocalc [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <info|huffman>   Analysis to run (default: info)");
    println!();
    println!("    --text <STRING>         Inline text input (info mode)");
    println!("    --freqs <SPEC>          Frequency spec, e.g. \"A10, E7, I5\" (huffman mode)");
    println!("    --in <PATH>             Read input from a plain-text file");
    println!();
    println!("    --pulse <MS>            Pulse duration r in ms (default: 0.7)");
    println!("    --seed <N>              Seed for sample generation");
    println!("    --sample-chars <N>      Generated sample length (default: 400)");
    println!();
    println!("    --print-config          Print resolved configuration");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    infocalc                                   # metrics over a generated sample");
    println!("    infocalc --text \"AABBBC\"                   # metrics over inline text");
    println!("    infocalc --mode huffman --freqs \"A10, E7\"  # huffman codes and bit cost");
    println!();
}

//! infocalc: information-theory metrics and Huffman coding calculator.
//!
//! Thin presentation layer over `infocalc-core`: parses the CLI
//! configuration, obtains input (inline flag, file, or generated sample),
//! runs the selected analysis branch, and renders plain-text tables. All
//! core errors are recoverable here: they become an `error:` line on stderr
//! and a nonzero exit code.

mod config;
mod input_gen;
mod report;

use config::{Config, Mode};
use infocalc_core::cost::CostTable;
use infocalc_core::frequency::FrequencyTable;
use infocalc_core::huffman::HuffmanTree;
use infocalc_core::info::InformationAnalysis;
use infocalc_core::{Error, Result};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    match config.mode {
        Mode::Info => run_info(config),
        Mode::Huffman => run_huffman(config),
    }
}

/// Text -> frequency table -> information metrics.
fn run_info(config: &Config) -> Result<()> {
    let raw_text = match (&config.text, &config.input_file) {
        (Some(text), _) => text.clone(),
        (_, Some(path)) => read_text_file(path)?,
        _ => {
            println!(
                "No input given; analyzing a generated sample (seed {}, {} chars)",
                config.seed, config.sample_chars
            );
            println!();
            input_gen::generate_sample_text(config.seed, config.sample_chars)
        }
    };

    let table = FrequencyTable::from_text(&raw_text);
    if table.is_empty() {
        println!("Input contains no alphabetic symbols; nothing to analyze.");
        return Ok(());
    }

    let processed: String = raw_text
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect();

    let analysis = InformationAnalysis::compute(&table, config.pulse_ms)?;
    report::print_info_report(&processed, &analysis);
    Ok(())
}

/// Frequency specification -> Huffman tree -> code table -> bit cost.
fn run_huffman(config: &Config) -> Result<()> {
    let spec = match (&config.freqs, &config.input_file) {
        (Some(freqs), _) => freqs.clone(),
        (_, Some(path)) => read_text_file(path)?,
        // Unreachable: config validation requires an input for huffman mode.
        _ => return Err(Error::Config("huffman mode requires input".to_string())),
    };

    let table = FrequencyTable::parse_pairs(spec.trim())?;
    let tree = HuffmanTree::build(&table)?;
    let cost = CostTable::evaluate(&table, tree.codes())?;

    report::print_huffman_report(&table, &tree, &cost);
    Ok(())
}

fn read_text_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|err| Error::Config(format!("failed to read {}: {err}", path.display())))
}

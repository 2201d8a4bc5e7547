//! Plain-text report rendering.
//!
//! Prints the tables the original teaching tool shows, in the same order
//! and with its rounding conventions: the Hartley total to 4 decimal
//! places, entropy and information rate to 2. The core hands over
//! full-precision values; all rounding happens here.

use infocalc_core::cost::CostTable;
use infocalc_core::frequency::FrequencyTable;
use infocalc_core::huffman::HuffmanTree;
use infocalc_core::info::InformationAnalysis;

/// Longest prefix of the processed text echoed back to the user.
const TEXT_ECHO_CHARS: usize = 200;

/// Print the full information-metrics report for a text run.
pub fn print_info_report(processed_text: &str, analysis: &InformationAnalysis) {
    println!("=== Processed text ===");
    let count = processed_text.chars().count();
    if count > TEXT_ECHO_CHARS {
        let prefix: String = processed_text.chars().take(TEXT_ECHO_CHARS).collect();
        println!("{prefix}... ({count} characters)");
    } else {
        println!("{processed_text}");
    }
    println!();

    let summary = analysis.summary();
    let by_freq = analysis.by_frequency_desc();

    println!("=== Frequency table ===");
    println!("{:>8} {:>12} {:>14}", "Symbol", "Frequency", "Probability");
    for stat in &by_freq {
        println!(
            "{:>8} {:>12} {:>14.6}",
            stat.symbol, stat.count, stat.probability
        );
    }
    println!();
    println!("Total symbols (N): {}", summary.total_symbols);
    println!("Distinct symbols (M): {}", summary.distinct_symbols);
    println!();

    println!("=== Information per symbol (Hartleys) ===");
    println!("{:>8} {:>14} {:>14}", "Symbol", "Probability", "-log10(p)");
    for stat in &by_freq {
        println!(
            "{:>8} {:>14.6} {:>14.6}",
            stat.symbol, stat.probability, stat.hartley
        );
    }
    println!("Total information I_total = {:.4} Hartleys", summary.total_hartley);
    println!();

    println!("=== Shannon entropy ===");
    println!("{:>8} {:>14} {:>14}", "Symbol", "Probability", "-p*log2(p)");
    for stat in &by_freq {
        println!(
            "{:>8} {:>14.6} {:>14.6}",
            stat.symbol, stat.probability, stat.entropy_term
        );
    }
    println!("Entropy H = {:.2} bits/symbol", summary.entropy);
    println!();

    println!("=== Summary ===");
    println!("Total information (I_total): {:.4} Hartleys", summary.total_hartley);
    println!("Entropy (H): {:.2} bits/symbol", summary.entropy);
    println!("Pulse duration (r): {} ms", summary.pulse_ms);
    println!("Information rate (T): {:.2} bits/ms", summary.information_rate);
    println!();
}

/// Print the full Huffman report: initial list, merge trace, codes, cost.
pub fn print_huffman_report(table: &FrequencyTable, tree: &HuffmanTree, cost: &CostTable) {
    println!("=== Initial frequencies ===");
    println!("{:>8} {:>8}", "Symbol", "f");
    for (symbol, freq) in table.iter() {
        println!("{:>8} {:>8}", symbol, freq);
    }
    println!();

    println!("=== Successive sums ===");
    println!(
        "{:>6} {:>10} {:>6} {:>10} {:>6} {:>8}",
        "Step", "Symbol 1", "f1", "Symbol 2", "f2", "Sum"
    );
    for step in tree.steps() {
        println!(
            "{:>6} {:>10} {:>6} {:>10} {:>6} {:>8}",
            step.step,
            step.first_label,
            step.first_freq,
            step.second_label,
            step.second_freq,
            step.merged_freq
        );
    }
    println!();

    println!("=== Huffman codes ===");
    println!("{:>8} {:>12}", "Symbol", "Code");
    for (symbol, code) in tree.codes() {
        println!("{:>8} {:>12}", symbol, code);
    }
    println!();

    println!("=== Total bits ===");
    println!(
        "{:>8} {:>8} {:>12} {:>6} {:>10}",
        "Symbol", "f", "Code", "L", "f*L"
    );
    for entry in cost.entries() {
        println!(
            "{:>8} {:>8} {:>12} {:>6} {:>10}",
            entry.symbol, entry.freq, entry.code, entry.length, entry.bits
        );
    }
    println!();
    println!("TOTAL = {} bits", cost.total_bits());
}

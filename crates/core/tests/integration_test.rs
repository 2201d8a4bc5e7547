//! Integration tests for the full infocalc pipeline.
//!
//! These tests exercise end-to-end behavior: raw input -> frequency table ->
//! {information metrics | huffman tree -> cost evaluation}, including the
//! reference scenarios and the structural properties every run must satisfy.

use infocalc_core::{
    cost::CostTable,
    error::{Error, ParseError},
    frequency::FrequencyTable,
    huffman::{CodeTable, HuffmanTree},
    info::{InformationAnalysis, DEFAULT_PULSE_MS},
};

/// No code string may be a prefix of another.
fn assert_prefix_free(codes: &CodeTable) {
    let all: Vec<&String> = codes.values().collect();
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            if i != j {
                assert!(
                    !b.starts_with(a.as_str()),
                    "code {a} is a prefix of {b}"
                );
            }
        }
    }
}

#[test]
fn test_text_pipeline_aabbbc() {
    let table = FrequencyTable::from_text("AABBBC");
    assert_eq!(table.get('A'), Some(2));
    assert_eq!(table.get('B'), Some(3));
    assert_eq!(table.get('C'), Some(1));

    // Metrics branch
    let analysis = InformationAnalysis::compute(&table, DEFAULT_PULSE_MS).unwrap();
    assert!((analysis.summary().entropy - 1.4591).abs() < 1e-4);

    let prob_sum: f64 = analysis.stats().iter().map(|s| s.probability).sum();
    assert!((prob_sum - 1.0).abs() < 1e-9);

    // Coding branch: C1+A2 -> CA3, then B3+CA3 -> BCA6
    let tree = HuffmanTree::build(&table).unwrap();
    assert_eq!(tree.codes().get(&'B').map(String::as_str), Some("0"));
    assert_eq!(tree.codes().get(&'C').map(String::as_str), Some("10"));
    assert_eq!(tree.codes().get(&'A').map(String::as_str), Some("11"));

    let cost = CostTable::evaluate(&table, tree.codes()).unwrap();
    assert_eq!(cost.total_bits(), 9);
}

#[test]
fn test_explicit_pipeline_reference_input() {
    let table = FrequencyTable::parse_pairs("A10, E7, I5, S5, O3, H2, Z2").unwrap();
    assert_eq!(table.total(), 34);
    assert_eq!(table.len(), 7);

    let tree = HuffmanTree::build(&table).unwrap();

    // First merge pairs the two rarest symbols, H before Z by insertion order.
    let first = &tree.steps()[0];
    assert_eq!(
        (first.first_label.as_str(), first.first_freq),
        ("H", 2)
    );
    assert_eq!(
        (first.second_label.as_str(), first.second_freq),
        ("Z", 2)
    );
    assert_eq!(first.merged_freq, 4);

    assert_prefix_free(tree.codes());

    let cost = CostTable::evaluate(&table, tree.codes()).unwrap();
    assert_eq!(cost.total_bits(), 89);

    // Rebuilding from identical input reproduces the exact same output.
    let again = HuffmanTree::build(&table).unwrap();
    let cost_again = CostTable::evaluate(&table, again.codes()).unwrap();
    assert_eq!(again.codes(), tree.codes());
    assert_eq!(cost_again.total_bits(), 89);
}

#[test]
fn test_single_symbol_pipeline() {
    let table = FrequencyTable::parse_pairs("A5").unwrap();
    let tree = HuffmanTree::build(&table).unwrap();

    let code = tree.codes().get(&'A').expect("A must have a code");
    assert!(!code.is_empty());
    assert_eq!(code, "0");

    let cost = CostTable::evaluate(&table, tree.codes()).unwrap();
    assert_eq!(cost.total_bits(), 5);
}

#[test]
fn test_malformed_inputs() {
    match FrequencyTable::parse_pairs("A10, , E7") {
        Err(Error::Parse(ParseError::EmptyToken)) => {}
        other => panic!("expected empty-token error, got {:?}", other),
    }

    match FrequencyTable::parse_pairs("A-3") {
        Err(Error::Parse(ParseError::NonPositiveFrequency { symbol, value })) => {
            assert_eq!((symbol, value), ('A', -3));
        }
        other => panic!("expected non-positive-frequency error, got {:?}", other),
    }
}

#[test]
fn test_prefix_property_across_inputs() {
    let inputs = [
        "A1, B1",
        "A10, E7, I5, S5, O3, H2, Z2",
        "Q1, W1, E1, R1, T1, Y1",
        "A100, B1, C1, D1, E1",
    ];
    for input in inputs {
        let table = FrequencyTable::parse_pairs(input).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        assert_prefix_free(tree.codes());
    }
}

#[test]
fn test_merge_count_matches_symbol_count() {
    for text in ["AB", "ABC", "THE QUICK BROWN FOX", "MISSISSIPPI"] {
        let table = FrequencyTable::from_text(text);
        let m = table.len();
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(tree.steps().len(), m - 1, "input {text:?}");
        assert_eq!(tree.codes().len(), m, "input {text:?}");
    }
}

#[test]
fn test_total_bit_cost_bounds() {
    for input in ["A1, B1", "A10, E7, I5, S5, O3, H2, Z2", "A9, B3, C3, D1"] {
        let table = FrequencyTable::parse_pairs(input).unwrap();
        let n = table.total();
        let m = table.len() as u64;

        let tree = HuffmanTree::build(&table).unwrap();
        let cost = CostTable::evaluate(&table, tree.codes()).unwrap();

        assert!(cost.total_bits() >= n, "input {input:?}");
        assert!(cost.total_bits() <= n * (m - 1), "input {input:?}");
    }
}

#[test]
fn test_average_code_length_meets_entropy_bound() {
    // Shannon bound: H <= average code length < H + 1 for an optimal code.
    for input in ["A10, E7, I5, S5, O3, H2, Z2", "A5, B4, C3, D2, E1"] {
        let table = FrequencyTable::parse_pairs(input).unwrap();
        let analysis = InformationAnalysis::compute(&table, DEFAULT_PULSE_MS).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        let cost = CostTable::evaluate(&table, tree.codes()).unwrap();

        let avg_len = cost.total_bits() as f64 / table.total() as f64;
        let entropy = analysis.summary().entropy;
        assert!(avg_len >= entropy - 1e-9, "input {input:?}");
        assert!(avg_len < entropy + 1.0, "input {input:?}");
    }
}

#[test]
fn test_empty_text_short_circuits() {
    let table = FrequencyTable::from_text("0123 .,!");
    assert!(table.is_empty());

    // Both branches reject the empty table rather than computing nonsense.
    assert!(InformationAnalysis::compute(&table, DEFAULT_PULSE_MS).is_err());
    assert!(HuffmanTree::build(&table).is_err());
}

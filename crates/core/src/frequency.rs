//! Symbol frequency extraction.
//!
//! Turns raw symbol input into a canonical [`FrequencyTable`], from either:
//! - free text (uppercased, non-alphabetic characters discarded), or
//! - an explicit specification like `"A10, E7, I5"` (one letter followed by
//!   its count, separated by commas or newlines).
//!
//! # Ordering
//!
//! The table preserves *first-insertion order*: iterating yields symbols in
//! the order they were first seen. A duplicate symbol in an explicit
//! specification overwrites the earlier count but keeps the original
//! position (last-write-wins). This matters downstream: the Huffman builder
//! breaks frequency ties by insertion order, so the table's order is part of
//! the deterministic-output contract.
//!
//! # Last-write-wins
//!
//! Duplicate symbols in an explicit specification do NOT sum; the later
//! count replaces the earlier one. This is a documented behavior, not a bug.
//! Callers that want summation must pre-aggregate.

use crate::error::{ParseError, Result};
use std::collections::HashMap;

/// Uppercase the first character a case mapping yields.
///
/// Multi-char expansions (e.g. 'ß' -> "SS") keep only the first character,
/// which is all a single-symbol table can represent.
fn upper_first(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// A mapping from symbol to positive occurrence count.
///
/// # Invariants
/// - All counts are >= 1.
/// - Iteration order is first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Symbol/count pairs in first-insertion order
    entries: Vec<(char, u64)>,
    /// Position of each symbol in `entries`
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count alphabetic characters in free text.
    ///
    /// Characters are uppercased; everything non-alphabetic is discarded.
    /// An input with no alphabetic characters yields an empty table, which
    /// callers must treat as "no input" and skip downstream computation.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            for upper in c.to_uppercase() {
                table.increment(upper);
            }
        }
        table
    }

    /// Parse an explicit symbol/frequency specification.
    ///
    /// Grammar: `Token (Delimiter Token)*` where `Token = Letter Digits+`
    /// and `Delimiter` is a comma or newline. Spaces and tabs are stripped
    /// before tokenization, so `"A 10"` parses the same as `"A10"`.
    ///
    /// # Errors
    /// - [`ParseError::EmptyToken`] for an empty token (`"A10, , E7"`)
    /// - [`ParseError::InvalidFrequency`] when the remainder after the
    ///   symbol is not an integer
    /// - [`ParseError::NonPositiveFrequency`] for a zero or negative count
    pub fn parse_pairs(input: &str) -> Result<Self> {
        let stripped: String = input
            .chars()
            .filter(|c| !matches!(*c, ' ' | '\t' | '\r'))
            .collect();

        let mut table = Self::new();
        for token in stripped.split(|c| c == ',' || c == '\n') {
            let mut chars = token.chars();
            let symbol = match chars.next() {
                Some(c) => upper_first(c),
                None => return Err(ParseError::EmptyToken.into()),
            };
            let rest = chars.as_str();

            let value: i64 = rest.parse().map_err(|_| ParseError::InvalidFrequency {
                token: token.to_string(),
            })?;
            if value <= 0 {
                return Err(ParseError::NonPositiveFrequency { symbol, value }.into());
            }

            table.set(symbol, value as u64);
        }
        Ok(table)
    }

    /// Set a symbol's count, overwriting any previous value.
    ///
    /// An overwritten symbol keeps its original position in iteration order.
    pub fn set(&mut self, symbol: char, count: u64) {
        match self.index.get(&symbol) {
            Some(&pos) => self.entries[pos].1 = count,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    /// Add one occurrence of a symbol.
    pub fn increment(&mut self, symbol: char) {
        match self.index.get(&symbol) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Count for a symbol, or None if absent.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.index.get(&symbol).map(|&pos| self.entries[pos].1)
    }

    /// Number of distinct symbols (M).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (N).
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate symbol/count pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries sorted by symbol.
    pub fn by_symbol(&self) -> Vec<(char, u64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|&(symbol, _)| symbol);
        sorted
    }

    /// Entries sorted by descending count.
    ///
    /// The sort is stable, so symbols with equal counts keep their
    /// insertion order.
    pub fn by_frequency_desc(&self) -> Vec<(char, u64)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

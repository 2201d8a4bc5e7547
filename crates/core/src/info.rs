//! Information-theory metrics over a frequency table.
//!
//! For each symbol with probability p = count / N this module computes:
//! - Hartley self-information I = -log10(p), in Hartleys
//! - Shannon entropy contribution h = -p * log2(p), in bits
//!
//! and aggregates:
//! - total Hartley information: sum of I over *distinct* symbols, one term
//!   per symbol class, NOT weighted by frequency
//! - Shannon entropy H: sum of h (frequency-weighted by construction)
//! - information rate T = H / r for a pulse duration r in milliseconds
//!
//! The two aggregates deliberately mix granularities: the Hartley total is a
//! per-symbol-class sum while entropy is an expectation. Both formulas are
//! contractual; do not unify them.
//!
//! All values are returned at full precision. Rounding for display (4
//! decimals for the Hartley total, 2 for entropy and rate) belongs to the
//! presentation layer.

use crate::error::{Error, InputError, Result};
use crate::frequency::FrequencyTable;

/// Default pulse duration r in milliseconds.
pub const DEFAULT_PULSE_MS: f64 = 0.7;

/// Hartley self-information of an event with probability `p`, in Hartleys.
///
/// # Panics
/// `p` outside (0, 1] is an invariant violation: probabilities here always
/// derive from positive counts over their sum.
pub fn hartley(p: f64) -> f64 {
    assert!(p > 0.0 && p <= 1.0, "probability {p} out of (0, 1]");
    -p.log10()
}

/// Shannon entropy contribution -p * log2(p) of a symbol with probability `p`.
///
/// # Panics
/// Same invariant as [`hartley`].
pub fn shannon_term(p: f64) -> f64 {
    assert!(p > 0.0 && p <= 1.0, "probability {p} out of (0, 1]");
    -p * p.log2()
}

/// Per-symbol derived statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStat {
    /// The symbol
    pub symbol: char,
    /// Occurrence count
    pub count: u64,
    /// count / N
    pub probability: f64,
    /// -log10(probability), in Hartleys
    pub hartley: f64,
    /// -probability * log2(probability), in bits
    pub entropy_term: f64,
}

/// Aggregate results over the whole distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct InformationSummary {
    /// Total symbol count N
    pub total_symbols: u64,
    /// Distinct symbol count M
    pub distinct_symbols: usize,
    /// Sum of per-symbol Hartley information (unweighted), in Hartleys
    pub total_hartley: f64,
    /// Shannon entropy H, in bits per symbol
    pub entropy: f64,
    /// Pulse duration r, in milliseconds
    pub pulse_ms: f64,
    /// Information rate T = H / r, in bits per millisecond
    pub information_rate: f64,
}

/// Full analysis of one frequency table.
///
/// Ephemeral: recomputed per run, never persisted. The engine itself is
/// order-independent; the stored stats follow the table's insertion order
/// and the two presentation orderings are available as views.
#[derive(Debug, Clone)]
pub struct InformationAnalysis {
    stats: Vec<SymbolStat>,
    summary: InformationSummary,
}

impl InformationAnalysis {
    /// Analyze a frequency table with the given pulse duration.
    ///
    /// # Errors
    /// - [`InputError::EmptyFrequencyTable`] if the table is empty
    /// - `Error::Config` if `pulse_ms` is not a positive finite number
    pub fn compute(table: &FrequencyTable, pulse_ms: f64) -> Result<Self> {
        if table.is_empty() {
            return Err(InputError::EmptyFrequencyTable.into());
        }
        if !(pulse_ms.is_finite() && pulse_ms > 0.0) {
            return Err(Error::Config(format!(
                "pulse duration must be positive, got {pulse_ms}"
            )));
        }

        let total = table.total();
        let n = total as f64;

        let mut stats = Vec::with_capacity(table.len());
        let mut total_hartley = 0.0;
        let mut entropy = 0.0;

        for (symbol, count) in table.iter() {
            let probability = count as f64 / n;
            let info = hartley(probability);
            let term = shannon_term(probability);
            total_hartley += info;
            entropy += term;
            stats.push(SymbolStat {
                symbol,
                count,
                probability,
                hartley: info,
                entropy_term: term,
            });
        }

        let summary = InformationSummary {
            total_symbols: total,
            distinct_symbols: table.len(),
            total_hartley,
            entropy,
            pulse_ms,
            information_rate: entropy / pulse_ms,
        };

        Ok(Self { stats, summary })
    }

    /// Per-symbol stats in the table's insertion order.
    pub fn stats(&self) -> &[SymbolStat] {
        &self.stats
    }

    /// Per-symbol stats sorted by symbol.
    pub fn by_symbol(&self) -> Vec<SymbolStat> {
        let mut sorted = self.stats.clone();
        sorted.sort_by_key(|stat| stat.symbol);
        sorted
    }

    /// Per-symbol stats sorted by descending count.
    ///
    /// Stable: equal counts keep insertion order.
    pub fn by_frequency_desc(&self) -> Vec<SymbolStat> {
        let mut sorted = self.stats.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    /// Aggregate summary.
    pub fn summary(&self) -> &InformationSummary {
        &self.summary
    }
}

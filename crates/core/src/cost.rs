//! Encoded-size evaluation for a code assignment.
//!
//! Given a frequency table and a code table over the same symbols, computes
//! the per-symbol bit cost (frequency x code length) and the total encoded
//! bit length. Pure arithmetic; the only failure mode is a symbol-set
//! mismatch between the two tables.

use crate::error::{ConsistencyError, Result};
use crate::frequency::FrequencyTable;
use crate::huffman::CodeTable;

/// Per-symbol cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostEntry {
    /// The symbol
    pub symbol: char,
    /// Occurrence count
    pub freq: u64,
    /// Assigned binary code
    pub code: String,
    /// Code length in bits
    pub length: usize,
    /// freq x length
    pub bits: u64,
}

/// Full cost breakdown with entries in frequency-table insertion order.
#[derive(Debug, Clone)]
pub struct CostTable {
    entries: Vec<CostEntry>,
    total_bits: u64,
}

impl CostTable {
    /// Evaluate the encoded cost of `codes` applied to `table`.
    ///
    /// # Errors
    /// - [`ConsistencyError::MissingCode`] if a table symbol has no code
    /// - [`ConsistencyError::UnknownCode`] if a code covers a symbol the
    ///   table does not contain
    pub fn evaluate(table: &FrequencyTable, codes: &CodeTable) -> Result<Self> {
        for symbol in codes.keys() {
            if table.get(*symbol).is_none() {
                return Err(ConsistencyError::UnknownCode { symbol: *symbol }.into());
            }
        }

        let mut entries = Vec::with_capacity(table.len());
        let mut total_bits = 0u64;
        for (symbol, freq) in table.iter() {
            let code = codes
                .get(&symbol)
                .ok_or(ConsistencyError::MissingCode { symbol })?;
            let length = code.len();
            let bits = freq * length as u64;
            total_bits += bits;
            entries.push(CostEntry {
                symbol,
                freq,
                code: code.clone(),
                length,
                bits,
            });
        }

        Ok(Self {
            entries,
            total_bits,
        })
    }

    /// Per-symbol entries in frequency-table insertion order.
    pub fn entries(&self) -> &[CostEntry] {
        &self.entries
    }

    /// Total encoded size in bits.
    pub fn total_bits(&self) -> u64 {
        self.total_bits
    }
}

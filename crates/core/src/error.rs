//! Error types for the infocalc core.
//!
//! All operations return structured errors rather than panicking.
//! Every failure here is local and recoverable: the presentation layer
//! catches it, reports a message, and moves on.

use thiserror::Error;

/// Top-level error type for all core operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Parse: malformed explicit frequency specification
/// - Input: empty frequency table handed to a downstream component
/// - Consistency: code table and frequency table disagree on symbols
#[derive(Debug, Error)]
pub enum Error {
    /// Frequency specification could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Input precondition violated (e.g., empty frequency table)
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Frequency table and code table disagree
    #[error("consistency error: {0}")]
    Consistency(#[from] ConsistencyError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from parsing an explicit symbol/frequency specification
/// such as `"A10, E7, I5"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A delimiter-separated token was empty (e.g., `"A10, , E7"`)
    #[error("empty token in frequency specification")]
    EmptyToken,

    /// The part of a token after the symbol is not a valid integer
    #[error("invalid frequency in token {token:?}")]
    InvalidFrequency { token: String },

    /// Frequencies must be at least 1 for a symbol to participate in coding
    #[error("non-positive frequency {value} for symbol {symbol:?}")]
    NonPositiveFrequency { symbol: char, value: i64 },
}

/// Input precondition errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// No symbols to work with (cannot compute metrics or build a tree)
    #[error("empty frequency table")]
    EmptyFrequencyTable,
}

/// Symbol-set mismatches between a frequency table and a code table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    /// A symbol in the frequency table has no assigned code
    #[error("no code assigned for symbol {symbol:?}")]
    MissingCode { symbol: char },

    /// The code table assigns a code to a symbol absent from the frequency table
    #[error("code assigned for unknown symbol {symbol:?}")]
    UnknownCode { symbol: char },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

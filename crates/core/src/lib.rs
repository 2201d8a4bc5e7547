//! infocalc-core: Information-theory metrics and Huffman coding over symbol
//! frequency tables
//!
//! This library provides the computational core of a teaching tool that:
//! - Extracts symbol frequency tables from text or explicit specifications
//! - Computes Hartley information, Shannon entropy, and information rate
//! - Builds a Huffman prefix code with a reproducible merge trace
//! - Evaluates per-symbol and total encoded bit cost
//!
//! # Architecture
//!
//! The pipeline is: raw input -> `frequency` -> `FrequencyTable`, consumed
//! independently by two branches:
//! - `info`: per-symbol probabilities and aggregate information metrics
//! - `huffman` -> `cost`: greedy merge tree, prefix codes, bit cost
//!
//! # Design Principles
//!
//! - **No panics**: user-facing failures are structured errors; assertions
//!   guard only internal invariants (probabilities in (0, 1])
//! - **Deterministic**: frequency ties in the merge queue break by insertion
//!   order, so identical input yields an identical code table
//! - **Pure**: every computation is a single pass over its own data with no
//!   shared state between runs

pub mod cost;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod info;

// Re-export commonly used types
pub use error::{Error, Result};

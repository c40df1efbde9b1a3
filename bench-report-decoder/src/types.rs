//! Core types for the benchmark report decoder library
//!
//! This module defines the types the decoder emits when reading report files.
//! The decoder is stateless and only outputs parsed records - it does not
//! render tables or track anything across grid cells.

use serde::{Deserialize, Serialize};

/// Result type for report parsing operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Value every field of an unavailable report degrades to
pub const PLACEHOLDER: &str = "-";

/// Errors that can occur while parsing a report file
///
/// Consumers of the grid API never see these: `ReportDecoder` collapses
/// every variant into a placeholder record. The variants exist so the parse
/// layer can say in the logs why a cell degraded.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected {expected} lines, found {found}")]
    LineCount { expected: usize, found: usize },

    #[error("Line {line} has no \": \" separator")]
    MissingSeparator { line: usize },
}

/// One parsed benchmark report
///
/// All fields are kept as the strings the harness wrote (units included),
/// except `throughput` which is truncated to its leading numeric token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Wall-clock proving time (report line 0)
    pub proving_time: String,
    /// Proving throughput, first token only - the unit suffix is dropped
    /// (report line 9)
    pub throughput: String,
    /// Size of the produced proof (report line 10)
    pub proof_size: String,
    /// Wall-clock verifying time (report line 11)
    pub verifying_time: String,
    /// Peak resident memory during proving (report line 12)
    pub peak_memory: String,
}

impl ReportRecord {
    /// The record emitted when a report is missing or malformed: all five
    /// fields are `-`
    pub fn placeholder() -> Self {
        Self {
            proving_time: PLACEHOLDER.to_string(),
            throughput: PLACEHOLDER.to_string(),
            proof_size: PLACEHOLDER.to_string(),
            verifying_time: PLACEHOLDER.to_string(),
            peak_memory: PLACEHOLDER.to_string(),
        }
    }

    /// True if this record is the placeholder form
    pub fn is_placeholder(&self) -> bool {
        self == &Self::placeholder()
    }
}

/// One cell of the benchmark grid: its coordinates plus the parsed (or
/// placeholder) record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEntry {
    /// Row parameter of the grid (rounds configuration)
    pub rounds: u32,
    /// Column parameter of the grid (thread count)
    pub threads: u32,
    /// The report for this cell
    pub record: ReportRecord,
}

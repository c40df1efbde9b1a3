//! Benchmark Report Decoder Library
//!
//! A stateless, reusable library for reading the plain-text report files a
//! proving-benchmark harness writes, one per (rounds, threads) grid cell.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Locates report files by the `r{rounds}_t{threads}` naming convention
//! - Parses the five rendered fields out of each 13-line report
//! - Degrades missing or malformed reports to placeholder records
//!
//! The library does NOT:
//! - Run the benchmarks that produce the report files
//! - Render markdown tables or JSON
//! - Validate report content beyond the line/separator shape
//!
//! All higher-level functionality is in the application layer
//! (bench-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use bench_report_decoder::{GridConfig, ReportDecoder};
//!
//! // Read a custom grid from a non-default directory
//! let config = GridConfig::new()
//!     .with_report_dir("bench/report")
//!     .with_rounds(vec![1, 2])
//!     .with_threads(vec![8, 16]);
//!
//! let decoder = ReportDecoder::new(config);
//! for entry in decoder.load_grid() {
//!     println!(
//!         "r{} t{}: {} ({})",
//!         entry.rounds, entry.threads, entry.record.proving_time, entry.record.throughput
//!     );
//! }
//! ```

// Public modules
pub mod config;
pub mod decoder;
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use config::GridConfig;
pub use decoder::ReportDecoder;
pub use parser::{parse_report, parse_report_file, REPORT_LINE_COUNT};
pub use types::{GridEntry, ReportError, ReportRecord, Result, PLACEHOLDER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

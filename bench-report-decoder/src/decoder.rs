//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! The ReportDecoder struct is the entry point for loading the benchmark
//! grid out of a report directory.

use crate::config::GridConfig;
use crate::parser;
use crate::types::{GridEntry, ReportRecord};

/// The main decoder struct - entry point for loading benchmark reports
pub struct ReportDecoder {
    config: GridConfig,
}

impl ReportDecoder {
    /// Create a decoder for the given grid
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Create a decoder for the default harness grid (`report/`, rounds
    /// 1-3, threads 4/8/16/24)
    pub fn with_defaults() -> Self {
        Self::new(GridConfig::default())
    }

    /// The grid this decoder reads
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Load the report for one grid cell
    ///
    /// Never fails: a missing file, I/O error, wrong line count or missing
    /// separator all degrade to the placeholder record. The cause is logged
    /// at debug level and is not otherwise observable.
    ///
    /// # Example
    /// ```no_run
    /// use bench_report_decoder::ReportDecoder;
    ///
    /// let decoder = ReportDecoder::with_defaults();
    /// let record = decoder.load_record(1, 4);
    /// println!("proving time: {}", record.proving_time);
    /// ```
    pub fn load_record(&self, rounds: u32, threads: u32) -> ReportRecord {
        let path = self.config.report_path(rounds, threads);
        match parser::parse_report_file(&path) {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Report unavailable at {:?}: {}", path, e);
                ReportRecord::placeholder()
            }
        }
    }

    /// Load the whole grid in render order: rounds outer, threads inner,
    /// each in configured order
    ///
    /// Always returns exactly `rounds.len() * threads.len()` entries;
    /// unavailable cells carry placeholder records.
    pub fn load_grid(&self) -> Vec<GridEntry> {
        log::info!(
            "Loading {} reports from {:?}",
            self.config.cell_count(),
            self.config.report_dir
        );

        let mut entries = Vec::with_capacity(self.config.cell_count());
        for &rounds in &self.config.rounds {
            for &threads in &self.config.threads {
                entries.push(GridEntry {
                    rounds,
                    threads,
                    record: self.load_record(rounds, threads),
                });
            }
        }
        entries
    }
}

impl Default for ReportDecoder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//! Grid configuration types
//!
//! This module defines the minimal configuration needed by the decoder
//! library: where the report files live and which (rounds, threads)
//! combinations make up the grid. Output formatting is handled by the
//! application layer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of the benchmark grid
///
/// The defaults match the grid the benchmark harness produces: rounds
/// 1, 2, 3 against thread counts 4, 8, 16, 24, with reports written to
/// `report/` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Directory containing the report files
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Row parameter values, in render order
    #[serde(default = "default_rounds")]
    pub rounds: Vec<u32>,

    /// Column parameter values, in render order
    #[serde(default = "default_threads")]
    pub threads: Vec<u32>,
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("report")
}

fn default_rounds() -> Vec<u32> {
    vec![1, 2, 3]
}

fn default_threads() -> Vec<u32> {
    vec![4, 8, 16, 24]
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            report_dir: default_report_dir(),
            rounds: default_rounds(),
            threads: default_threads(),
        }
    }
}

impl GridConfig {
    /// Create a new grid configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the report directory
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = dir.into();
        self
    }

    /// Builder method: set the row parameter values
    pub fn with_rounds(mut self, rounds: Vec<u32>) -> Self {
        self.rounds = rounds;
        self
    }

    /// Builder method: set the column parameter values
    pub fn with_threads(mut self, threads: Vec<u32>) -> Self {
        self.threads = threads;
        self
    }

    /// Path of the report file for one grid cell: `<dir>/r{rounds}_t{threads}`
    pub fn report_path(&self, rounds: u32, threads: u32) -> PathBuf {
        self.report_dir.join(format!("r{}_t{}", rounds, threads))
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.rounds.len() * self.threads.len()
    }
}

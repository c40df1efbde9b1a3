//! Configuration loading and parsing
//!
//! The CLI can run entirely from defaults; a config.toml only needs the
//! keys it wants to override.

use anyhow::{Context, Result};
use bench_report_decoder::GridConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the report files live and which grid to render
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Row parameter values; None means the harness default 1, 2, 3
    #[serde(default)]
    pub rounds: Option<Vec<u32>>,
    /// Column parameter values; None means the harness default 4, 8, 16, 24
    #[serde(default)]
    pub threads: Option<Vec<u32>>,
}

fn default_dir() -> PathBuf {
    PathBuf::from("report")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            rounds: None,
            threads: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl AppConfig {
    /// Build the decoder-side grid configuration
    pub fn grid_config(&self) -> GridConfig {
        let mut grid = GridConfig::new().with_report_dir(self.report.dir.clone());
        if let Some(rounds) = &self.report.rounds {
            grid = grid.with_rounds(rounds.clone());
        }
        if let Some(threads) = &self.report.threads {
            grid = grid.with_threads(threads.clone());
        }
        grid
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [report]
            dir = "bench/report"
            rounds = [1, 2]
            threads = [8, 16]

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.report.dir, PathBuf::from("bench/report"));
        assert_eq!(config.report.rounds, Some(vec![1, 2]));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.report.dir, PathBuf::from("report"));
        assert_eq!(config.report.rounds, None);
        assert_eq!(config.output.format, OutputFormat::Markdown);

        // And the derived grid matches the harness default
        assert_eq!(config.grid_config(), GridConfig::default());
    }

    #[test]
    fn test_grid_config_mapping() {
        let toml_content = r#"
            [report]
            rounds = [7]
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        let grid = config.grid_config();
        assert_eq!(grid.rounds, vec![7]);
        assert_eq!(grid.threads, vec![4, 8, 16, 24]);
        assert_eq!(grid.report_dir, PathBuf::from("report"));
    }
}

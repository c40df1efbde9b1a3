//! Table rendering
//!
//! Turns the loaded grid into the markdown results table, or a JSON dump of
//! the raw records. The markdown layout is fixed: a 7-column header, a
//! dash divider, one data row per cell, and a blank row between rounds
//! groups as a visual break.

use anyhow::Result;
use bench_report_decoder::GridEntry;

/// Column abbreviations: rounds, threads, proving time, throughput, proof
/// size, peak memory, verifying time
const HEADER: &str = "| `R` | `T` | `PT` | `TP` | `PS` | `PM` | `VT` |";
const DIVIDER: &str = "| - | - | - | - | - | - | - |";

/// Blank row separating rounds groups in the rendered table
const GROUP_SEPARATOR: &str = "| | | | | | | |";

/// Render the markdown table for the grid entries
///
/// Entries are expected in rounds-major order, as produced by
/// `ReportDecoder::load_grid`; a separator row is inserted whenever the
/// rounds value changes.
pub fn markdown_table(entries: &[GridEntry]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(DIVIDER);
    out.push('\n');

    let mut current_rounds = None;
    for entry in entries {
        if current_rounds.is_some() && current_rounds != Some(entry.rounds) {
            out.push_str(GROUP_SEPARATOR);
            out.push('\n');
        }
        current_rounds = Some(entry.rounds);

        out.push_str(&data_row(entry));
        out.push('\n');
    }
    out
}

/// One data row; every cell is backtick-quoted
fn data_row(entry: &GridEntry) -> String {
    let record = &entry.record;
    format!(
        "| `{}` | `{}` | `{}` | `{}` | `{}` | `{}` | `{}` |",
        entry.rounds,
        entry.threads,
        record.proving_time,
        record.throughput,
        record.proof_size,
        record.peak_memory,
        record.verifying_time,
    )
}

/// Pretty-printed JSON dump of the grid entries
pub fn json_report(entries: &[GridEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    Ok(json)
}

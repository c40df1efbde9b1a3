//! Report file parser
//!
//! A report file is the 13-line text summary the benchmark harness writes
//! per grid cell. Every line is `label: value`. Five lines carry the fields
//! the table renders:
//!
//! - line 0: elapsed proving time
//! - line 9: throughput, written as `<value> <unit>`
//! - line 10: proof size
//! - line 11: verifying time
//! - line 12: peak memory
//!
//! The remaining lines are intermediate harness detail and are ignored.
//! Parsing is all-or-nothing: a wrong line count or a selected line without
//! the `": "` separator fails the whole record, never a single field.

use crate::types::{ReportError, ReportRecord, Result};
use std::fs;
use std::path::Path;

/// Number of lines a well-formed report file must contain
pub const REPORT_LINE_COUNT: usize = 13;

/// 0-based indices of the rendered lines
const PROVING_TIME_LINE: usize = 0;
const THROUGHPUT_LINE: usize = 9;
const PROOF_SIZE_LINE: usize = 10;
const VERIFYING_TIME_LINE: usize = 11;
const PEAK_MEMORY_LINE: usize = 12;

/// Label/value separator within a report line
const SEPARATOR: &str = ": ";

/// Parse report file contents into a record
///
/// Fails if the text is not exactly [`REPORT_LINE_COUNT`] lines or any of
/// the selected lines lacks the `": "` separator.
pub fn parse_report(text: &str) -> Result<ReportRecord> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != REPORT_LINE_COUNT {
        return Err(ReportError::LineCount {
            expected: REPORT_LINE_COUNT,
            found: lines.len(),
        });
    }

    let throughput = field_value(&lines, THROUGHPUT_LINE)?;
    Ok(ReportRecord {
        proving_time: field_value(&lines, PROVING_TIME_LINE)?,
        throughput: first_token(&throughput),
        proof_size: field_value(&lines, PROOF_SIZE_LINE)?,
        verifying_time: field_value(&lines, VERIFYING_TIME_LINE)?,
        peak_memory: field_value(&lines, PEAK_MEMORY_LINE)?,
    })
}

/// Read and parse one report file
pub fn parse_report_file(path: &Path) -> Result<ReportRecord> {
    let text = fs::read_to_string(path)?;
    parse_report(&text)
}

/// Everything after the first `": "` on the given line, trimmed
fn field_value(lines: &[&str], line: usize) -> Result<String> {
    lines[line]
        .split_once(SEPARATOR)
        .map(|(_, value)| value.trim().to_string())
        .ok_or(ReportError::MissingSeparator { line })
}

/// Throughput lines read `<value> <unit>`; keep only the value
fn first_token(value: &str) -> String {
    value.split_whitespace().next().unwrap_or(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A report in the shape the harness writes
    const VALID_REPORT: &str = "\
Elapsed time: 38.27s
Segments: 4
Total cells: 1234567
Main trace commit time: 5.12s
Perm trace commit time: 7.90s
Quotient compute time: 6.41s
Opening time: 9.33s
App proof size: 1.9 MiB
Recursion depth: 2
Throughput: 53.4 sigs/s
Proof size: 1.4 MiB
Verifying time: 212ms
Peak memory: 14.2 GiB
";

    #[test]
    fn test_parse_valid_report() {
        let record = parse_report(VALID_REPORT).unwrap();
        assert_eq!(record.proving_time, "38.27s");
        assert_eq!(record.throughput, "53.4");
        assert_eq!(record.proof_size, "1.4 MiB");
        assert_eq!(record.verifying_time, "212ms");
        assert_eq!(record.peak_memory, "14.2 GiB");
    }

    #[test]
    fn test_throughput_unit_is_dropped() {
        let record = parse_report(VALID_REPORT).unwrap();
        assert!(!record.throughput.contains("sigs"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let text = VALID_REPORT.replace("Elapsed time: 38.27s", "Elapsed time:   38.27s  ");
        let record = parse_report(&text).unwrap();
        assert_eq!(record.proving_time, "38.27s");
    }

    #[test]
    fn test_value_keeps_second_separator() {
        // Only the first ": " delimits label from value
        let text = VALID_REPORT.replace("Proof size: 1.4 MiB", "Proof size: total: 1.4 MiB");
        let record = parse_report(&text).unwrap();
        assert_eq!(record.proof_size, "total: 1.4 MiB");
    }

    #[test]
    fn test_wrong_line_count_short() {
        let truncated: String = VALID_REPORT.lines().take(12).collect::<Vec<_>>().join("\n");
        let err = parse_report(&truncated).unwrap_err();
        assert!(matches!(
            err,
            ReportError::LineCount {
                expected: 13,
                found: 12
            }
        ));
    }

    #[test]
    fn test_wrong_line_count_long() {
        let extended = format!("{}Extra line: x\n", VALID_REPORT);
        let err = parse_report(&extended).unwrap_err();
        assert!(matches!(err, ReportError::LineCount { found: 14, .. }));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_report("").unwrap_err();
        assert!(matches!(err, ReportError::LineCount { found: 0, .. }));
    }

    #[test]
    fn test_missing_separator_fails_whole_record() {
        let text = VALID_REPORT.replace("Throughput: 53.4 sigs/s", "Throughput");
        let err = parse_report(&text).unwrap_err();
        assert!(matches!(err, ReportError::MissingSeparator { line: 9 }));
    }

    #[test]
    fn test_separator_needs_trailing_space() {
        // "Throughput:53.4" has a colon but not the ": " separator
        let text = VALID_REPORT.replace("Throughput: 53.4 sigs/s", "Throughput:53.4");
        assert!(parse_report(&text).is_err());
    }

    #[test]
    fn test_ignored_lines_may_be_arbitrary() {
        // Lines 1-8 are not parsed, so they do not need a separator
        let text = VALID_REPORT.replace("Segments: 4", "segments four");
        assert!(parse_report(&text).is_ok());
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_report_file(Path::new("/nonexistent/report/r1_t4")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}

//! CSV parsing module for reading integer sequences and range tables.
//!
//! Every input file carries a header row. Cells are parsed as signed
//! integers; empty or non-numeric cells in a column that is actually used
//! are reported with their line number.
//!
//! # Column Detection
//!
//! The sequence column is matched by header name (case-insensitive):
//! - `value`, `values`, `x`, `num`, `nums`
//!
//! and falls back to the first column when none of these is present.
//! Range tables use `start`, `end` and an optional `amount` column.

use crate::error::{CliError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;
use window_scan::kernels::prefix_delta::RangeIncrement;

/// Header names recognised as the sequence column, in priority order.
const SEQUENCE_HEADERS: &[&str] = &["value", "values", "x", "num", "nums"];

/// Header names recognised as the demand column, in priority order.
const DEMAND_HEADERS: &[&str] = &["demand", "value", "values"];

/// Parsed CSV data with column mapping.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers from the CSV.
    pub headers: Vec<String>,
    /// Mapping of normalized column name to column index.
    pub column_map: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl ParsedCsv {
    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Index of a column by header name (case-insensitive).
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_map.get(&normalize_header(name)).copied()
    }

    /// Parse the column at `idx` as integers.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CsvParseError` with the offending line for a cell
    /// that is missing, empty or not an integer.
    pub fn integer_column(&self, idx: usize) -> Result<Vec<i64>> {
        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| parse_cell(record.get(idx).unwrap_or(""), row))
            .collect()
    }

    /// Parse a column by header name.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArgument` if no column has that name, or
    /// `CliError::CsvParseError` for an unparsable cell.
    pub fn named_column(&self, name: &str) -> Result<Vec<i64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| CliError::InvalidArgument {
                argument: "column".to_string(),
                reason: format!("no column named '{name}'"),
                suggestion: Some(format!("Available columns: {}", self.headers.join(", "))),
            })?;
        self.integer_column(idx)
    }

    /// Parse the first column whose header is in `candidates`, or the first
    /// column when none matches.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CsvParseError` for an unparsable cell.
    pub fn detected_column(&self, candidates: &[&str]) -> Result<Vec<i64>> {
        let idx = candidates
            .iter()
            .find_map(|name| self.column_index(name))
            .unwrap_or(0);
        debug!(column = %self.headers[idx], "selected input column");
        self.integer_column(idx)
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Parse one integer cell; `row` is the zero-based data row.
fn parse_cell(value: &str, row: usize) -> Result<i64> {
    let trimmed = value.trim();
    // +2 for header and 0-indexing
    let line = Some(row + 2);
    if trimmed.is_empty() {
        return Err(CliError::CsvParseError {
            message: "empty cell".to_string(),
            line,
        });
    }
    trimmed.parse::<i64>().map_err(|_| CliError::CsvParseError {
        message: format!("cannot parse '{trimmed}' as integer"),
        line,
    })
}

/// Convert a parsed integer to an index, rejecting negatives.
fn to_index(value: i64, column: &str, row: usize) -> Result<usize> {
    usize::try_from(value).map_err(|_| CliError::CsvParseError {
        message: format!("{column} must be a non-negative index, got {value}"),
        line: Some(row + 2),
    })
}

/// Parse a CSV file into a structured format.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    parse_csv_from_reader(BufReader::new(file))
}

/// Parse CSV data from a reader.
///
/// This is useful for testing or parsing from non-file sources.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` if the CSV is malformed or has no
/// header columns.
pub fn parse_csv_from_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut column_map = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        // first occurrence wins on duplicate headers
        column_map.entry(normalize_header(header)).or_insert(idx);
    }

    let records = csv_reader
        .records()
        .enumerate()
        .map(|(row, result)| {
            result.map_err(|e| CliError::CsvParseError {
                message: e.to_string(),
                line: Some(row + 2),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(columns = headers.len(), rows = records.len(), "parsed csv");

    Ok(ParsedCsv {
        headers,
        column_map,
        records,
    })
}

/// Parse the integer sequence from a CSV file.
///
/// Uses `column` when given, otherwise auto-detects the sequence column.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a named
/// column does not exist.
pub fn parse_sequence<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<Vec<i64>> {
    let parsed = parse_csv(path)?;
    match column {
        Some(name) => parsed.named_column(name),
        None => parsed.detected_column(SEQUENCE_HEADERS),
    }
}

/// Parse a demand table from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn parse_demand<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    parse_csv(path)?.detected_column(DEMAND_HEADERS)
}

/// Parse range increments from a CSV file with `start,end[,amount]` columns.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn parse_ranges<P: AsRef<Path>>(path: P) -> Result<Vec<RangeIncrement>> {
    ranges_from_parsed(&parse_csv(path)?)
}

/// Build range increments from parsed CSV data.
///
/// Missing `start`/`end` headers fall back to the first two columns; a
/// missing `amount` column means every range adds one.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` for fewer than two columns, an
/// unparsable cell, or a negative bound.
pub fn ranges_from_parsed(parsed: &ParsedCsv) -> Result<Vec<RangeIncrement>> {
    if parsed.headers.len() < 2 {
        return Err(CliError::CsvParseError {
            message: "range table needs start and end columns".to_string(),
            line: Some(1),
        });
    }

    let start_idx = parsed.column_index("start").unwrap_or(0);
    let end_idx = parsed.column_index("end").unwrap_or(1);
    let starts = parsed.integer_column(start_idx)?;
    let ends = parsed.integer_column(end_idx)?;
    let amounts = match parsed.column_index("amount") {
        Some(idx) => parsed.integer_column(idx)?,
        None => vec![1; parsed.row_count()],
    };

    starts
        .iter()
        .zip(&ends)
        .zip(&amounts)
        .enumerate()
        .map(|(row, ((&start, &end), &amount))| {
            Ok(RangeIncrement::new(
                to_index(start, "start", row)?,
                to_index(end, "end", row)?,
                amount,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> ParsedCsv {
        parse_csv_from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_detects_value_column() {
        let parsed = parse("id,value\n1,10\n2,20\n3,30\n");
        assert_eq!(
            parsed.detected_column(SEQUENCE_HEADERS).unwrap(),
            vec![10, 20, 30]
        );
    }

    #[test]
    fn test_header_matching_is_case_insensitive() {
        let parsed = parse("ID, Nums \n1,4\n2,5\n");
        assert_eq!(parsed.detected_column(SEQUENCE_HEADERS).unwrap(), vec![4, 5]);
        assert_eq!(parsed.column_index("NUMS"), Some(1));
    }

    #[test]
    fn test_falls_back_to_first_column() {
        let parsed = parse("reading,label\n7,7\n-3,9\n");
        assert_eq!(parsed.detected_column(SEQUENCE_HEADERS).unwrap(), vec![7, -3]);
    }

    #[test]
    fn test_named_column() {
        let parsed = parse("a,b\n1,2\n3,4\n");
        assert_eq!(parsed.named_column("b").unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_named_column_missing() {
        let parsed = parse("a,b\n1,2\n");
        match parsed.named_column("c") {
            Err(CliError::InvalidArgument { reason, suggestion, .. }) => {
                assert!(reason.contains("'c'"));
                assert!(suggestion.unwrap().contains("a, b"));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_cell_reports_line() {
        let parsed = parse("value\n1\n2\nthree\n");
        match parsed.integer_column(0) {
            Err(CliError::CsvParseError { message, line }) => {
                assert!(message.contains("'three'"));
                assert_eq!(line, Some(4));
            }
            other => panic!("Expected CsvParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_cell_is_an_error() {
        let parsed = parse("value\n1\n\n");
        // csv skips blank lines entirely
        assert_eq!(parsed.row_count(), 1);

        let parsed = parse("value,other\n1,2\n,3\n");
        assert!(matches!(
            parsed.integer_column(0),
            Err(CliError::CsvParseError { line: Some(3), .. })
        ));
    }

    #[test]
    fn test_unused_columns_are_not_parsed() {
        let parsed = parse("label,value\nfoo,1\nbar,2\n");
        assert_eq!(parsed.detected_column(SEQUENCE_HEADERS).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_header_only_file() {
        let parsed = parse("value\n");
        assert_eq!(parsed.row_count(), 0);
        assert!(parsed.detected_column(SEQUENCE_HEADERS).unwrap().is_empty());
    }

    #[test]
    fn test_ranges_with_amount() {
        let parsed = parse("start,end,amount\n0,2,1\n1,3,4\n");
        assert_eq!(
            ranges_from_parsed(&parsed).unwrap(),
            vec![RangeIncrement::new(0, 2, 1), RangeIncrement::new(1, 3, 4)]
        );
    }

    #[test]
    fn test_ranges_default_amount() {
        let parsed = parse("end,start\n3,1\n2,0\n");
        assert_eq!(
            ranges_from_parsed(&parsed).unwrap(),
            vec![RangeIncrement::unit(1, 3), RangeIncrement::unit(0, 2)]
        );
    }

    #[test]
    fn test_ranges_negative_bound() {
        let parsed = parse("start,end\n0,1\n-1,2\n");
        match ranges_from_parsed(&parsed) {
            Err(CliError::CsvParseError { message, line }) => {
                assert!(message.contains("start"));
                assert_eq!(line, Some(3));
            }
            other => panic!("Expected CsvParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_ranges_need_two_columns() {
        let parsed = parse("start\n0\n");
        assert!(ranges_from_parsed(&parsed).is_err());
    }

    #[test]
    fn test_missing_file() {
        match parse_csv("/definitely/not/here.csv") {
            Err(CliError::IoError { path, .. }) => {
                assert_eq!(path.as_deref(), Some("/definitely/not/here.csv"));
            }
            other => panic!("Expected IoError, got {other:?}"),
        }
    }
}

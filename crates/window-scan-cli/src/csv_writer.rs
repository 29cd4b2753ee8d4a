//! CSV output module for writing scan results.
//!
//! Scalar results (a count, a range sum) are written as a one-row table
//! under a named header. Per-position results (left bounds, coverage) are
//! written one row per position with one column per output.

use crate::error::{CliError, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Destination for an optional `-o` argument.
    #[must_use]
    pub fn from_arg(output: Option<&str>) -> Self {
        output.map_or(Self::Stdout, |path| Self::File(path.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Write named scalar results as a single-row table.
///
/// # Errors
///
/// Returns `CliError::IoError` on write failure.
pub fn write_summary<W: Write>(writer: &mut W, fields: &[(&str, String)]) -> Result<()> {
    let headers: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    let values: Vec<&str> = fields.iter().map(|(_, value)| value.as_str()).collect();
    writeln!(writer, "{}", headers.join(","))?;
    writeln!(writer, "{}", values.join(","))?;
    writer.flush()?;
    Ok(())
}

/// Write equally long columns, one row per position.
///
/// Columns shorter than the first are padded with empty cells.
///
/// # Errors
///
/// Returns `CliError::IoError` on write failure.
pub fn write_columns<W: Write, T: Display>(writer: &mut W, columns: &[(&str, &[T])]) -> Result<()> {
    if columns.is_empty() {
        return Ok(());
    }

    let headers: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    writeln!(writer, "{}", headers.join(","))?;

    let len = columns[0].1.len();
    for i in 0..len {
        for (idx, (_, values)) in columns.iter().enumerate() {
            if idx > 0 {
                write!(writer, ",")?;
            }
            if let Some(value) = values.get(i) {
                write!(writer, "{value}")?;
            }
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a summary to the given destination.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_summary_to(dest: &OutputDest, fields: &[(&str, String)]) -> Result<()> {
    write_summary(&mut dest.writer()?, fields)
}

/// Write columns to the given destination.
///
/// # Errors
///
/// Returns `CliError::IoError` if the destination cannot be opened or written.
pub fn write_columns_to<T: Display>(dest: &OutputDest, columns: &[(&str, &[T])]) -> Result<()> {
    write_columns(&mut dest.writer()?, columns)
}

//! CLI argument parsing module.
//!
//! This module defines the command-line interface for window-scan using clap.
//! The CLI follows the pattern: `window-scan <command> <input.csv> [params] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # Count subarrays with sum below 10
//! window-scan count input.csv 10
//!
//! # Count subarrays with sum * length below 40
//! window-scan count input.csv 40 --predicate score-below
//!
//! # Minimal left boundary for every right boundary
//! window-scan bounds input.csv 10 --predicate at-most -o bounds.csv
//!
//! # Per-position coverage of a range table over 8 positions
//! window-scan coverage ranges.csv 8
//!
//! # Whether the ranges meet a demand table, and the shortest covering prefix
//! window-scan coverage ranges.csv 8 --demand demand.csv
//!
//! # Sum of positions 2 through 5 inclusive
//! window-scan range-sum input.csv 2 5
//!
//! # Count subarrays summing to exactly -3
//! window-scan sum-count input.csv -3
//! ```

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{CliError, Result};

/// window-scan: linear-time windowed counting over integer sequences
#[derive(Parser, Debug)]
#[command(name = "window-scan")]
#[command(author, version, about = "Linear-time sliding window and range increment queries")]
#[command(long_about = "window-scan counts bounded subarrays with a two-pointer sliding \
    window and answers batched range-increment queries with a difference array. Input \
    is read from CSV files and output can be written to files or stdout.")]
pub struct Args {
    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Window predicate selected on the command line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum PredicateKind {
    /// Window sum strictly below the threshold
    #[default]
    Below,
    /// Window sum at most the threshold
    AtMost,
    /// Window sum times window length strictly below the threshold
    ScoreBelow,
}

/// Available query commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count bounded subarrays
    #[command(about = "Count contiguous subarrays whose window satisfies the predicate")]
    Count {
        /// Input CSV file
        input: String,

        /// Threshold for the predicate
        #[arg(allow_hyphen_values = true)]
        threshold: String,

        /// Window predicate
        #[arg(short, long, value_enum, default_value_t = PredicateKind::Below)]
        predicate: PredicateKind,

        /// Column holding the sequence (auto-detected if not specified)
        #[arg(short, long)]
        column: Option<String>,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Minimal left boundary per right boundary
    #[command(about = "Minimal qualifying left boundary for every right boundary")]
    Bounds {
        /// Input CSV file
        input: String,

        /// Threshold for the predicate
        #[arg(allow_hyphen_values = true)]
        threshold: String,

        /// Window predicate
        #[arg(short, long, value_enum, default_value_t = PredicateKind::Below)]
        predicate: PredicateKind,

        /// Column holding the sequence
        #[arg(short, long)]
        column: Option<String>,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Range increment coverage
    #[command(about = "Apply range increments and optionally check a demand table")]
    Coverage {
        /// CSV file with start,end[,amount] columns
        input: String,

        /// Number of positions covered by the ranges
        length: usize,

        /// CSV file with one demand value per position
        #[arg(short, long)]
        demand: Option<String>,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inclusive range sum
    #[command(about = "Sum of an inclusive index range")]
    RangeSum {
        /// Input CSV file
        input: String,

        /// First index of the range
        start: usize,

        /// Last index of the range
        end: usize,

        /// Column holding the sequence
        #[arg(short, long)]
        column: Option<String>,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Exact-sum subarray count
    #[command(about = "Count contiguous subarrays whose sum equals the target")]
    SumCount {
        /// Input CSV file
        input: String,

        /// Target sum
        #[arg(allow_hyphen_values = true)]
        target: String,

        /// Column holding the sequence
        #[arg(short, long)]
        column: Option<String>,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the input file path from the command.
    #[must_use]
    pub fn input_path(&self) -> &str {
        match &self.command {
            Command::Count { input, .. }
            | Command::Bounds { input, .. }
            | Command::Coverage { input, .. }
            | Command::RangeSum { input, .. }
            | Command::SumCount { input, .. } => input,
        }
    }

    /// Get the output file path from the command, if specified.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Count { output, .. }
            | Command::Bounds { output, .. }
            | Command::Coverage { output, .. }
            | Command::RangeSum { output, .. }
            | Command::SumCount { output, .. } => output.as_deref(),
        }
    }
}

/// Parse a signed integer argument such as a threshold or target sum.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` naming `argument` if `value` is not
/// an integer.
pub fn parse_integer(argument: &str, value: &str) -> Result<i128> {
    value.trim().parse::<i128>().map_err(|_| CliError::InvalidArgument {
        argument: argument.to_string(),
        reason: format!("cannot parse '{value}' as integer"),
        suggestion: Some("Use a whole number like 10 or -3".to_string()),
    })
}

/// Parse the threshold for a predicate.
///
/// Score thresholds bound `sum * length`, which is never negative for the
/// non-negative sequences the score predicate is meant for, so a negative
/// score threshold is rejected rather than silently counting nothing.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` for a non-integer threshold or a
/// negative score threshold.
pub fn parse_threshold(value: &str, predicate: PredicateKind) -> Result<i128> {
    let threshold = parse_integer("threshold", value)?;
    if predicate == PredicateKind::ScoreBelow && threshold < 0 {
        return Err(CliError::InvalidArgument {
            argument: "threshold".to_string(),
            reason: "score threshold must not be negative".to_string(),
            suggestion: Some("Use a non-negative integer like 40".to_string()),
        });
    }
    Ok(threshold)
}

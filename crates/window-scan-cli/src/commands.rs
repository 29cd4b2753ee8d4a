//! Command execution: read the inputs, run the library query, write CSV.

use tracing::{debug, info};
use window_scan::kernels::prefix_delta::{
    apply_weighted_increments, covers_demand_weighted, min_prefix_covering,
};
use window_scan::kernels::prefix_sum::{count_subarrays_summing_to, PrefixSums};
use window_scan::kernels::sliding_window::{count_bounded_subarrays, left_bounds};
use window_scan::predicates::{ScoreBelow, SumAtMost, SumBelow};
use window_scan::traits::{WindowPredicate, WindowState};

use crate::args::{parse_integer, parse_threshold, Args, Command, PredicateKind};
use crate::csv_parser::{parse_demand, parse_ranges, parse_sequence};
use crate::csv_writer::{write_columns_to, write_summary_to, OutputDest};
use crate::error::Result;

/// Run the parsed command to completion.
///
/// # Errors
///
/// Returns the first I/O, parse, argument or scan error encountered.
pub fn run(args: &Args) -> Result<()> {
    debug!(input = args.input_path(), "running command");
    let dest = OutputDest::from_arg(args.output_path());

    match &args.command {
        Command::Count {
            input,
            threshold,
            predicate,
            column,
            ..
        } => {
            let data = parse_sequence(input, column.as_deref())?;
            let threshold = parse_threshold(threshold, *predicate)?;
            let count = count_bounded_subarrays(&data, build_predicate(*predicate, threshold))?;
            info!(count, len = data.len(), "counted bounded subarrays");
            write_summary_to(&dest, &[("count", count.to_string())])
        }
        Command::Bounds {
            input,
            threshold,
            predicate,
            column,
            ..
        } => {
            let data = parse_sequence(input, column.as_deref())?;
            let threshold = parse_threshold(threshold, *predicate)?;
            let lefts = left_bounds(&data, build_predicate(*predicate, threshold))?;
            let rights: Vec<usize> = (0..lefts.len()).collect();
            let counts: Vec<usize> = lefts
                .iter()
                .enumerate()
                .map(|(right, &left)| right + 1 - left)
                .collect();
            write_columns_to(
                &dest,
                &[("right", &rights[..]), ("left", &lefts[..]), ("count", &counts[..])],
            )
        }
        Command::Coverage {
            input,
            length,
            demand,
            ..
        } => {
            let ranges = parse_ranges(input)?;
            debug!(ranges = ranges.len(), length, "loaded range table");
            match demand {
                None => {
                    let coverage = apply_weighted_increments(*length, &ranges)?;
                    write_columns_to(&dest, &[("coverage", &coverage[..])])
                }
                Some(path) => {
                    let demand = parse_demand(path)?;
                    let covered = covers_demand_weighted(*length, &ranges, &demand)?;
                    let prefix = if ranges.iter().any(|range| range.amount < 0) {
                        debug!("negative amounts present, min_prefix left empty");
                        None
                    } else {
                        min_prefix_covering(&demand, &ranges)?
                    };
                    write_summary_to(
                        &dest,
                        &[
                            ("covered", covered.to_string()),
                            ("min_prefix", prefix.map(|k| k.to_string()).unwrap_or_default()),
                        ],
                    )
                }
            }
        }
        Command::RangeSum {
            input,
            start,
            end,
            column,
            ..
        } => {
            let data = parse_sequence(input, column.as_deref())?;
            let sum = PrefixSums::new(&data)?.range_sum(*start, *end)?;
            write_summary_to(&dest, &[("sum", sum.to_string())])
        }
        Command::SumCount {
            input,
            target,
            column,
            ..
        } => {
            let data = parse_sequence(input, column.as_deref())?;
            let target = parse_integer("target", target)?;
            let count = count_subarrays_summing_to(&data, target)?;
            write_summary_to(&dest, &[("count", count.to_string())])
        }
    }
}

/// Window predicate for the selected kind and threshold.
fn build_predicate(kind: PredicateKind, threshold: i128) -> impl WindowPredicate + Copy {
    debug!(?kind, threshold, "selected window predicate");
    move |window: WindowState| match kind {
        PredicateKind::Below => SumBelow(threshold).holds(window),
        PredicateKind::AtMost => SumAtMost(threshold).holds(window),
        PredicateKind::ScoreBelow => ScoreBelow(threshold).holds(window),
    }
}

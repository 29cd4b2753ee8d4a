//! Range Coverage Example
//!
//! This example applies range increments with a difference array, checks a
//! demand profile, and finds the shortest prefix of increments that covers
//! it.
//!
//! Run with: `cargo run --example range_coverage`

use window_scan::prelude::*;

fn main() -> Result<()> {
    let length = 6;
    let ranges = [(0, 2), (1, 4), (3, 5), (2, 3)];

    println!("=== Range Coverage ===");
    println!("Ranges: {ranges:?}");
    println!("Coverage: {:?}", apply_range_increments(length, &ranges)?);
    println!();

    let demand = [1_i64, 1, 2, 2, 1, 1];
    println!("Demand: {demand:?}");
    println!("Covered: {}", covers_demand(length, &ranges, &demand)?);
    println!();

    let weighted = [
        RangeIncrement::new(0, 2, 1),
        RangeIncrement::new(2, 5, 2),
        RangeIncrement::new(0, 5, 1),
        RangeIncrement::new(4, 4, 3),
    ];
    let demand = [2_i64, 1, 3, 2, 4, 2];
    match min_prefix_covering(&demand, &weighted)? {
        Some(k) => println!("The first {k} weighted increments cover {demand:?}"),
        None => println!("No prefix of the increments covers {demand:?}"),
    }

    // Reuse scratch buffers across many queries
    let mut ctx = ScanContext::new();
    for shift in 0..3 {
        let shifted: Vec<(usize, usize)> = ranges
            .iter()
            .map(|&(s, e)| ((s + shift).min(length - 1), (e + shift).min(length - 1)))
            .collect();
        println!("Shift {shift}: {:?}", ctx.apply_range_increments(length, &shifted)?);
    }

    Ok(())
}

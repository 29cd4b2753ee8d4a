//! Basic Counting Example
//!
//! This example counts bounded subarrays with the built-in predicates and
//! a custom closure, and reports the longest qualifying window.
//!
//! Run with: `cargo run --example basic_counting`

use window_scan::prelude::*;
use window_scan::total_subarrays;

fn main() -> Result<()> {
    let data: Vec<i64> = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9];

    println!("=== Bounded Subarray Counting ===");
    println!("Sequence: {data:?}");
    println!("Total subarrays: {}", total_subarrays(data.len()));
    println!();

    for threshold in [5, 10, 20] {
        let below = count_subarrays_below(&data, threshold)?;
        let at_most = count_subarrays_at_most(&data, threshold)?;
        println!("sum < {threshold:>2}: {below:>3}    sum <= {threshold:>2}: {at_most:>3}");
    }
    println!();

    let score = count_subarrays_score_below(&data, 40)?;
    println!("sum * len < 40: {score}");

    // A custom predicate: short windows with a small sum
    let custom = SumAtMost(12).and(LengthAtMost(3));
    println!("sum <= 12 and len <= 3: {}", count_bounded_subarrays(&data, custom)?);

    // Closures work too, as long as they are monotonic
    let closure = |w: WindowState| w.sum + w.len_i128() < 15;
    println!("sum + len < 15: {}", count_bounded_subarrays(&data, closure)?);
    println!();

    if let Some(span) = longest_bounded_window(&data, SumAtMost(15))? {
        println!(
            "Longest window with sum <= 15: [{}, {}] (len {}, sum {})",
            span.start,
            span.end,
            span.len(),
            span.sum
        );
    }

    let bounds = left_bounds(&data, SumAtMost(15))?;
    println!("Left bounds (sum <= 15): {bounds:?}");

    Ok(())
}

//! Error Handling Examples
//!
//! This example demonstrates the errors window-scan reports for malformed
//! input and non-monotonic predicates.
//!
//! Run with: `cargo run --example error_handling`

use window_scan::kernels::sliding_window::{count_bounded_subarrays_with, ScanConfig};
use window_scan::prelude::*;

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    println!("1. Invalid Range:");
    match apply_range_increments(4, &[(0, 1), (3, 4)]) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InvalidRange { start, end, length }) => {
            println!("   Range [{start}, {end}] does not fit length {length}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    println!("2. Length Mismatch:");
    match covers_demand(4, &[(0, 3)], &[1, 1, 1]) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::LengthMismatch { expected, actual }) => {
            println!("   Demand has {actual} entries, expected {expected}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    println!("3. Non-monotonic Predicate:");
    let config = ScanConfig::new().verify_monotonic(true);
    match count_bounded_subarrays_with(&[-5_i64, 6], SumBelow(3), &config) {
        Ok(count) => println!("   Unexpected count {count}"),
        Err(Error::PreconditionViolation { left, right }) => {
            println!("   Window [{left}, {right}] holds but [{}, {right}] does not", left + 1);
            println!("   Fix: use non-negative values with sum predicates");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    println!("4. Using ? for propagation:");
    match run_pipeline() {
        Ok(count) => println!("   Pipeline counted {count} subarrays"),
        Err(e) => println!("   Pipeline failed: {e}"),
    }
}

fn run_pipeline() -> Result<u64> {
    let coverage = apply_range_increments(5, &[(0, 4), (1, 3)])?;
    count_subarrays_below(&coverage, 5)
}

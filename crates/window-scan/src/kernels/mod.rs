//! Linear-time scanning kernels.
//!
//! # Kernels
//!
//! - [`sliding_window`]: two-pointer engine driven by a monotonic window predicate
//! - [`prefix_delta`]: difference arrays for batched range increments and demand checks
//! - [`prefix_sum`]: prefix sums for subarray-sum queries
//!
//! # Performance
//!
//! Every kernel is a single pass over its input. The sliding-window engine
//! moves each boundary at most `n` times, so a scan evaluates the predicate
//! at most `2n` times. Monotonicity verification adds at most one
//! evaluation per right boundary, for a bound of `3n`.

pub mod prefix_delta;
pub mod prefix_sum;
pub mod sliding_window;

// Re-export kernel types for convenient access, e.g. `use window_scan::kernels::left_bounds;`

pub use prefix_delta::{
    apply_range_increments, apply_weighted_increments, covers_demand, covers_demand_weighted,
    min_prefix_covering, DeltaArray, RangeIncrement,
};
pub use prefix_sum::{count_subarrays_summing_to, PrefixSums};
pub use sliding_window::{
    count_bounded_subarrays, count_bounded_subarrays_naive, count_bounded_subarrays_with,
    count_subarrays_at_most, count_subarrays_below, count_subarrays_score_below, left_bounds,
    left_bounds_into, left_bounds_into_with, left_bounds_with, longest_bounded_window,
    longest_bounded_window_with, ScanConfig, Window, WindowSpan,
};

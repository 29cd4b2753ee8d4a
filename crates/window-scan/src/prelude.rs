//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use window_scan::prelude::*;
//!
//! let data = [2_i64, 1, 4, 3, 5];
//!
//! let below = count_subarrays_below(&data, 6).unwrap();
//! let score = count_subarrays_score_below(&data, 10).unwrap();
//! let bounds = left_bounds(&data, SumAtMost(5)).unwrap();
//!
//! assert_eq!(below, 7);
//! assert_eq!(score, 6);
//! assert_eq!(bounds, vec![0, 0, 1, 3, 4]);
//! ```
//!
//! # Contents
//!
//! ## Error Handling
//! - [`Error`], [`Result`]
//!
//! ## Traits
//! - [`ScanElement`], [`WindowPredicate`], [`WindowPredicateExt`], [`ValidatedInput`]
//!
//! ## Kernels
//! - Sliding window: `count_*`, `left_bounds*`, `longest_bounded_window`
//! - Difference arrays: `apply_*_increments`, `covers_demand*`, `min_prefix_covering`
//! - Prefix sums: [`PrefixSums`], `count_subarrays_summing_to`
//!
//! ## Predicates
//! - [`SumBelow`], [`SumAtMost`], [`ScoreBelow`], [`LengthAtMost`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::predicates::WindowPredicateExt;
pub use crate::traits::{ScanElement, ValidatedInput, WindowPredicate, WindowState};

// Sliding window
pub use crate::kernels::sliding_window::{
    count_bounded_subarrays, count_bounded_subarrays_with, count_subarrays_at_most,
    count_subarrays_below, count_subarrays_score_below, left_bounds, left_bounds_into,
    left_bounds_into_with, left_bounds_with, longest_bounded_window, longest_bounded_window_with,
    ScanConfig, WindowSpan,
};

// Difference arrays
pub use crate::kernels::prefix_delta::{
    apply_range_increments, apply_weighted_increments, covers_demand, covers_demand_weighted,
    min_prefix_covering, RangeIncrement,
};

// Prefix sums
pub use crate::kernels::prefix_sum::{count_subarrays_summing_to, PrefixSums};

// Predicates
pub use crate::predicates::{LengthAtMost, ScoreBelow, SumAtMost, SumBelow};

// Scratch space and batches
pub use crate::batch::BatchProcessor;
pub use crate::context::ScanContext;

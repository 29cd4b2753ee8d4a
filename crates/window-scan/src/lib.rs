//! window-scan: linear-time array scanning kernels
//!
//! This crate provides one-pass implementations of the sliding-window and
//! prefix-sum families of array algorithms over integer sequences.
//!
//! # Features
//!
//! - **Sliding window**: count and enumerate subarrays whose window satisfies
//!   a monotonic predicate, in O(n) with O(1) extra space
//! - **Difference arrays**: apply many range increments in O(length + ranges)
//!   and test the result against per-position demands
//! - **Prefix sums**: O(1) range-sum queries and exact-sum subarray counting
//! - **Safety**: invalid ranges fail fast, non-monotonic predicates are
//!   detected in debug builds
//!
//! # Quick Start
//!
//! ```
//! use window_scan::prelude::*;
//!
//! // Subarrays of [1, 1, 1] with a sum below 3
//! assert_eq!(count_subarrays_below(&[1_i64, 1, 1], 3).unwrap(), 5);
//!
//! // Coverage of positions 0..4 by two inclusive ranges
//! assert_eq!(apply_range_increments(4, &[(1, 3), (0, 2)]).unwrap(), vec![1, 2, 2, 1]);
//! assert!(covers_demand(4, &[(1, 3), (0, 2)], &[1, 1, 1, 1]).unwrap());
//! ```
//!
//! # Custom Predicates
//!
//! New problems are solved by supplying a predicate, not by rewriting the scan:
//!
//! ```
//! use window_scan::prelude::*;
//!
//! // Windows of at most 3 elements whose sum stays at most 10
//! let fits = |w: WindowState| w.len <= 3 && w.sum <= 10;
//! let count = count_bounded_subarrays(&[4_i64, 2, 6, 1, 1], fits).unwrap();
//! assert_eq!(count, 11);
//! ```
//!
//! # Error Handling
//!
//! All fallible functions return [`Result<T, Error>`]:
//!
//! ```
//! use window_scan::prelude::*;
//!
//! // Ranges are never clamped
//! let result = apply_range_increments(3, &[(1, 3)]);
//! assert!(matches!(result, Err(Error::InvalidRange { .. })));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod batch;
pub mod context;
pub mod error;
pub mod kernels;
pub mod predicates;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use kernels::{count_bounded_subarrays, count_subarrays_below, covers_demand};
pub use traits::{ScanElement, ValidatedInput, WindowPredicate, WindowState};
pub use utils::total_subarrays;

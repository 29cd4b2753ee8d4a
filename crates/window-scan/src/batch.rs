//! Batch processing utilities for running one query over many sequences.
//!
//! Queries are pure and independent, so a batch can be fanned out with Rayon
//! when the `parallel` feature is enabled.
//!
//! # Feature Flag
//!
//! Parallel execution requires the `parallel` feature:
//!
//! ```toml
//! [dependencies]
//! window-scan = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use window_scan::batch::BatchProcessor;
//! use window_scan::kernels::sliding_window::count_subarrays_below;
//!
//! let series = vec![vec![1_i64, 1, 1], vec![5, 1], vec![]];
//!
//! let counts = BatchProcessor::new()
//!     .process(&series, |s| count_subarrays_below(s, 3))
//!     .unwrap();
//! assert_eq!(counts, vec![5, 1, 0]);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::kernels::sliding_window::count_subarrays_below;
use crate::traits::ScanElement;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch processor for running a query over many sequences.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Minimum number of sequences required to use parallel processing.
    /// Smaller batches are processed sequentially.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a new batch processor with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 64,
        }
    }

    /// Sets the minimum number of sequences required to use parallel processing.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `query` to every sequence, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `query`.
    #[cfg(feature = "parallel")]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], query: F) -> Result<Vec<R>>
    where
        T: ScanElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            debug!(batch = series.len(), "processing batch sequentially");
            series.iter().map(|s| query(s)).collect()
        } else {
            debug!(batch = series.len(), "processing batch in parallel");
            series.par_iter().map(|s| query(s)).collect()
        }
    }

    /// Applies `query` to every sequence, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `query`.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], query: F) -> Result<Vec<R>>
    where
        T: ScanElement,
        F: Fn(&[T]) -> Result<R>,
    {
        debug!(batch = series.len(), "processing batch sequentially");
        series.iter().map(|s| query(s)).collect()
    }
}

/// Counts subarrays with a sum below `threshold` for every sequence of the batch.
///
/// # Errors
///
/// Returns the first error produced by any query.
pub fn count_batch<T: ScanElement>(series: &[Vec<T>], threshold: i128) -> Result<Vec<u64>> {
    BatchProcessor::new().process(series, |s| count_subarrays_below(s, threshold))
}

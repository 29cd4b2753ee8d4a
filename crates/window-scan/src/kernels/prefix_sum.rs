//! Prefix sums for O(1) subarray-sum queries.
//!
//! `prefix[i]` holds the sum of the first `i` elements, so the sum of the
//! inclusive range `[start, end]` is `prefix[end + 1] - prefix[start]`.
//!
//! # Example
//!
//! ```
//! use window_scan::kernels::prefix_sum::{count_subarrays_summing_to, PrefixSums};
//!
//! let sums = PrefixSums::new(&[3_i64, -1, 4, 1, -5]).unwrap();
//! assert_eq!(sums.range_sum(1, 3).unwrap(), 4);
//! assert_eq!(sums.total(), 2);
//!
//! // [1, 1] and [2] sum to 2
//! assert_eq!(count_subarrays_summing_to(&[1_i64, 1, 2], 2).unwrap(), 2);
//! ```

use std::collections::HashMap;

use crate::error::Result;
use crate::traits::{validate_range, ScanElement};

/// Cumulative sums of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    prefix: Vec<i128>,
}

impl PrefixSums {
    /// Builds the prefix sums of `data` in one pass.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if an element cannot be widened.
    pub fn new<T: ScanElement>(data: &[T]) -> Result<Self> {
        let mut prefix = Vec::with_capacity(data.len() + 1);
        let mut running = 0_i128;
        prefix.push(running);
        for value in data {
            running += value.widen()?;
            prefix.push(running);
        }
        Ok(Self { prefix })
    }

    /// Returns the length of the underlying sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Returns true if the underlying sequence is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sum of the whole sequence.
    #[inline]
    #[must_use]
    pub fn total(&self) -> i128 {
        self.prefix[self.len()]
    }

    /// Returns the sum of the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if `start > end` or `end >= len()`.
    #[inline]
    pub fn range_sum(&self, start: usize, end: usize) -> Result<i128> {
        validate_range(start, end, self.len())?;
        Ok(self.prefix[end + 1] - self.prefix[start])
    }

    /// Returns the prefix sums, starting with the empty prefix `0`.
    #[must_use]
    pub fn as_slice(&self) -> &[i128] {
        &self.prefix
    }
}

/// Counts subarrays whose sum equals `target` exactly.
///
/// A frequency map of the prefix sums seen so far answers, for each right
/// boundary, how many left boundaries produce the target. Negative values
/// are allowed: nothing here depends on monotonicity.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if an element cannot be widened.
pub fn count_subarrays_summing_to<T: ScanElement>(data: &[T], target: i128) -> Result<u64> {
    let mut seen: HashMap<i128, u64> = HashMap::with_capacity(data.len() + 1);
    seen.insert(0, 1);

    let mut running = 0_i128;
    let mut count = 0_u64;
    for value in data {
        running += value.widen()?;
        if let Some(&matches) = seen.get(&(running - target)) {
            count += matches;
        }
        *seen.entry(running).or_insert(0) += 1;
    }

    Ok(count)
}

//! Sliding-window engine for monotonic window predicates.
//!
//! This module counts and enumerates contiguous subarrays whose window
//! satisfies a [`WindowPredicate`], in a single linear pass.
//!
//! # Algorithm
//!
//! Both boundaries start at 0 and the window aggregate (its sum) starts at 0.
//! For each right boundary:
//!
//! 1. The element at `right` is added to the aggregate.
//! 2. While the window is non-empty and the predicate fails, the element at
//!    `left` is removed from the aggregate and `left` advances.
//! 3. The window `[left, right]` is now the longest satisfying window ending
//!    at `right`. Because the predicate is monotonic, every window ending at
//!    `right` that starts in `[left, right]` also satisfies it, which
//!    contributes `right - left + 1` subarrays.
//!
//! When even the single-element window fails, the window becomes empty
//! (`left == right + 1`) with an aggregate of exactly zero.
//!
//! # Complexity
//!
//! - Time: O(n); each index enters and leaves the window at most once
//! - Space: O(1) beyond the input (O(n) for [`left_bounds`])
//!
//! # Example
//!
//! ```
//! use window_scan::kernels::sliding_window::{count_bounded_subarrays, count_subarrays_below};
//! use window_scan::traits::WindowState;
//!
//! let data = [1_i64, 1, 1];
//!
//! // Every subarray except the full one has a sum below 3.
//! assert_eq!(count_subarrays_below(&data, 3).unwrap(), 5);
//!
//! // Any monotonic closure works as a predicate.
//! let short = |w: WindowState| w.len <= 2;
//! assert_eq!(count_bounded_subarrays(&data, short).unwrap(), 5);
//! ```

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::predicates::{ScoreBelow, SumAtMost, SumBelow};
use crate::traits::{ScanElement, ValidatedInput, WindowPredicate, WindowState};

/// A contiguous window over a sequence with an incrementally maintained sum.
///
/// The window covers the half-open index range `[start, end)`, so
/// `start <= end` always holds and `start == end` is the empty window.
/// The sum is updated in O(1) per boundary move and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    start: usize,
    end: usize,
    sum: i128,
}

impl Window {
    /// Creates an empty window positioned at index 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: 0,
            end: 0,
            sum: 0,
        }
    }

    /// Returns the first index inside the window.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the index one past the last element of the window.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the exact sum of the elements in the window.
    #[inline]
    #[must_use]
    pub const fn sum(&self) -> i128 {
        self.sum
    }

    /// Returns the number of elements in the window.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the window holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the predicate view of the window.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> WindowState {
        WindowState {
            sum: self.sum,
            len: self.len(),
        }
    }

    /// Extends the window by the element at `end`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the element cannot be widened.
    ///
    /// # Panics
    ///
    /// Panics if `end` is out of bounds for `data`.
    #[inline]
    pub fn push_back<T: ScanElement>(&mut self, data: &[T]) -> Result<()> {
        self.sum += data[self.end].widen()?;
        self.end += 1;
        Ok(())
    }

    /// Removes the element at `start` from the window.
    ///
    /// Does nothing if the window is empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the element cannot be widened.
    #[inline]
    pub fn pop_front<T: ScanElement>(&mut self, data: &[T]) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        self.sum -= data[self.start].widen()?;
        self.start += 1;
        Ok(())
    }
}

/// An inclusive span `[start, end]` reported by [`longest_bounded_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpan {
    /// First index of the span.
    pub start: usize,
    /// Last index of the span.
    pub end: usize,
    /// Sum of the elements in the span.
    pub sum: i128,
}

impl WindowSpan {
    /// Returns the number of elements in the span.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false: a span holds at least one element.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Configuration for a sliding-window scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    verify_monotonic: bool,
}

impl Default for ScanConfig {
    /// Monotonicity verification is on in debug builds and off in release builds.
    fn default() -> Self {
        Self {
            verify_monotonic: cfg!(debug_assertions),
        }
    }
}

impl ScanConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables monotonicity verification.
    ///
    /// When enabled, after each shrink step the engine checks that the
    /// satisfying window, shortened by one element on the left, still
    /// satisfies the predicate, and fails with
    /// `Error::PreconditionViolation` otherwise. When disabled, a
    /// non-monotonic predicate silently yields an incorrect count.
    #[must_use]
    pub const fn verify_monotonic(mut self, enabled: bool) -> Self {
        self.verify_monotonic = enabled;
        self
    }

    /// Returns whether monotonicity verification is enabled.
    #[must_use]
    pub const fn verifies_monotonic(&self) -> bool {
        self.verify_monotonic
    }
}

/// Runs the two-pointer scan and reports the settled window for every right boundary.
fn scan<T, P, F>(data: &[T], predicate: &P, config: &ScanConfig, mut on_right: F) -> Result<()>
where
    T: ScanElement,
    P: WindowPredicate + ?Sized,
    F: FnMut(usize, &Window),
{
    let mut window = Window::new();

    for right in 0..data.len() {
        window.push_back(data)?;

        while !window.is_empty() && !predicate.holds(window.state()) {
            window.pop_front(data)?;
        }

        if config.verify_monotonic && window.len() >= 2 {
            let shrunk = WindowState {
                sum: window.sum() - data[window.start()].widen()?,
                len: window.len() - 1,
            };
            if !predicate.holds(shrunk) {
                debug!(
                    left = window.start(),
                    right, "window predicate failed on a left-shrunk sub-window"
                );
                return Err(Error::PreconditionViolation {
                    left: window.start(),
                    right,
                });
            }
        }

        on_right(right, &window);
    }

    Ok(())
}

/// Counts the contiguous subarrays whose window satisfies `predicate`.
///
/// Uses the default [`ScanConfig`].
///
/// # Arguments
///
/// * `data` - The input sequence
/// * `predicate` - A monotonic window predicate
///
/// # Returns
///
/// The number of qualifying subarrays; `0` for an empty sequence.
///
/// # Errors
///
/// Returns `Error::PreconditionViolation` if verification is enabled and the
/// predicate is detected to be non-monotonic for `data`.
///
/// # Example
///
/// ```
/// use window_scan::kernels::sliding_window::count_bounded_subarrays;
/// use window_scan::predicates::ScoreBelow;
///
/// // Subarrays of [2, 1, 4, 3, 5] with sum * len < 10
/// let count = count_bounded_subarrays(&[2_i32, 1, 4, 3, 5], ScoreBelow(10)).unwrap();
/// assert_eq!(count, 6);
/// ```
pub fn count_bounded_subarrays<T, P>(data: &[T], predicate: P) -> Result<u64>
where
    T: ScanElement,
    P: WindowPredicate,
{
    count_bounded_subarrays_with(data, predicate, &ScanConfig::default())
}

/// Counts qualifying subarrays with an explicit [`ScanConfig`].
///
/// # Errors
///
/// Returns `Error::PreconditionViolation` if `config` enables verification
/// and the predicate is detected to be non-monotonic for `data`.
pub fn count_bounded_subarrays_with<T, P>(data: &[T], predicate: P, config: &ScanConfig) -> Result<u64>
where
    T: ScanElement,
    P: WindowPredicate,
{
    let mut count = 0_u64;
    scan(data, &predicate, config, |_, window| {
        count += window.len() as u64;
    })?;

    trace!(len = data.len(), count, "bounded subarray count");
    Ok(count)
}

/// Counts subarrays whose sum is strictly below `threshold`.
///
/// Correct for sequences of non-negative values, where the sum predicate is
/// monotonic.
///
/// # Errors
///
/// Returns `Error::PreconditionViolation` in debug builds when negative
/// values break monotonicity in a detectable way.
///
/// # Example
///
/// ```
/// use window_scan::kernels::sliding_window::count_subarrays_below;
///
/// assert_eq!(count_subarrays_below(&[1_i64, 1, 1], 3).unwrap(), 5);
/// assert_eq!(count_subarrays_below::<i64>(&[], 3).unwrap(), 0);
/// ```
pub fn count_subarrays_below<T: ScanElement>(data: &[T], threshold: i128) -> Result<u64> {
    count_bounded_subarrays(data, SumBelow(threshold))
}

/// Counts subarrays whose sum is at most `threshold`.
///
/// # Errors
///
/// Same conditions as [`count_subarrays_below`].
pub fn count_subarrays_at_most<T: ScanElement>(data: &[T], threshold: i128) -> Result<u64> {
    count_bounded_subarrays(data, SumAtMost(threshold))
}

/// Counts subarrays whose score (sum multiplied by length) is strictly below `k`.
///
/// # Errors
///
/// Same conditions as [`count_subarrays_below`].
///
/// # Example
///
/// ```
/// use window_scan::kernels::sliding_window::count_subarrays_score_below;
///
/// assert_eq!(count_subarrays_score_below(&[1_i64, 1, 1], 5).unwrap(), 5);
/// ```
pub fn count_subarrays_score_below<T: ScanElement>(data: &[T], k: i128) -> Result<u64> {
    count_bounded_subarrays(data, ScoreBelow(k))
}

/// Computes, for each right boundary, the minimal qualifying left boundary.
///
/// `result[r]` is the smallest `l` such that the window `[l, r]` satisfies
/// the predicate. `result[r] == r + 1` means that no window ending at `r`
/// qualifies. Uses the default [`ScanConfig`]; see [`left_bounds_with`].
///
/// # Errors
///
/// Same conditions as [`count_bounded_subarrays`]. In debug builds this
/// includes `Error::PreconditionViolation` for a detectably non-monotonic
/// predicate.
///
/// # Example
///
/// ```
/// use window_scan::kernels::sliding_window::left_bounds;
/// use window_scan::predicates::SumAtMost;
///
/// let bounds = left_bounds(&[2_i64, 5, 1, 1], SumAtMost(3)).unwrap();
/// assert_eq!(bounds, vec![0, 2, 2, 2]);
/// ```
pub fn left_bounds<T, P>(data: &[T], predicate: P) -> Result<Vec<usize>>
where
    T: ScanElement,
    P: WindowPredicate,
{
    left_bounds_with(data, predicate, &ScanConfig::default())
}

/// Computes minimal left boundaries with an explicit [`ScanConfig`].
///
/// # Errors
///
/// Same conditions as [`count_bounded_subarrays_with`].
///
/// # Example
///
/// ```
/// use window_scan::kernels::sliding_window::{left_bounds_with, ScanConfig};
/// use window_scan::predicates::LengthAtMost;
///
/// let config = ScanConfig::new().verify_monotonic(false);
/// let bounds = left_bounds_with(&[-1_i64, 4, -2], LengthAtMost(2), &config).unwrap();
/// assert_eq!(bounds, vec![0, 0, 1]);
/// ```
pub fn left_bounds_with<T, P>(data: &[T], predicate: P, config: &ScanConfig) -> Result<Vec<usize>>
where
    T: ScanElement,
    P: WindowPredicate,
{
    let mut output = vec![0; data.len()];
    left_bounds_into_with(data, predicate, &mut output, config)?;
    Ok(output)
}

/// Computes minimal left boundaries into a pre-allocated buffer.
///
/// # Arguments
///
/// * `data` - The input sequence
/// * `predicate` - A monotonic window predicate
/// * `output` - Buffer of at least `data.len()` elements
///
/// # Returns
///
/// The total number of qualifying subarrays.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `output` is shorter than `data`, or
/// the errors of [`count_bounded_subarrays`]. Verification follows the
/// default [`ScanConfig`]; see [`left_bounds_into_with`].
pub fn left_bounds_into<T, P>(data: &[T], predicate: P, output: &mut [usize]) -> Result<u64>
where
    T: ScanElement,
    P: WindowPredicate,
{
    left_bounds_into_with(data, predicate, output, &ScanConfig::default())
}

/// Computes minimal left boundaries into a buffer with an explicit [`ScanConfig`].
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `output` is shorter than `data`, or
/// the errors of [`count_bounded_subarrays_with`].
pub fn left_bounds_into_with<T, P>(
    data: &[T],
    predicate: P,
    output: &mut [usize],
    config: &ScanConfig,
) -> Result<u64>
where
    T: ScanElement,
    P: WindowPredicate,
{
    output.validate_min_len(data.len())?;

    let mut count = 0_u64;
    scan(data, &predicate, config, |right, window| {
        output[right] = window.start();
        count += window.len() as u64;
    })?;

    Ok(count)
}

/// Finds the longest window satisfying `predicate`.
///
/// Ties are resolved in favour of the earliest window.
///
/// # Returns
///
/// `None` if the sequence is empty or no single element qualifies.
///
/// # Errors
///
/// Same conditions as [`count_bounded_subarrays`], using the default
/// [`ScanConfig`]; see [`longest_bounded_window_with`].
///
/// # Example
///
/// ```
/// use window_scan::kernels::sliding_window::longest_bounded_window;
/// use window_scan::predicates::SumAtMost;
///
/// let span = longest_bounded_window(&[3_i64, 1, 2, 1, 4], SumAtMost(4)).unwrap().unwrap();
/// assert_eq!((span.start, span.end, span.sum), (1, 3, 4));
/// ```
pub fn longest_bounded_window<T, P>(data: &[T], predicate: P) -> Result<Option<WindowSpan>>
where
    T: ScanElement,
    P: WindowPredicate,
{
    longest_bounded_window_with(data, predicate, &ScanConfig::default())
}

/// Finds the longest qualifying window with an explicit [`ScanConfig`].
///
/// # Errors
///
/// Same conditions as [`count_bounded_subarrays_with`].
pub fn longest_bounded_window_with<T, P>(
    data: &[T],
    predicate: P,
    config: &ScanConfig,
) -> Result<Option<WindowSpan>>
where
    T: ScanElement,
    P: WindowPredicate,
{
    let mut best: Option<WindowSpan> = None;
    scan(data, &predicate, config, |right, window| {
        if window.is_empty() {
            return;
        }
        if best.map_or(true, |b| window.len() > b.len()) {
            best = Some(WindowSpan {
                start: window.start(),
                end: right,
                sum: window.sum(),
            });
        }
    })?;

    Ok(best)
}

/// Counts qualifying subarrays by testing every subarray.
///
/// O(n²) reference implementation; it does not rely on monotonicity.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if an element cannot be widened.
pub fn count_bounded_subarrays_naive<T, P>(data: &[T], predicate: P) -> Result<u64>
where
    T: ScanElement,
    P: WindowPredicate,
{
    let mut count = 0_u64;
    for start in 0..data.len() {
        let mut sum = 0_i128;
        for (offset, value) in data[start..].iter().enumerate() {
            sum += value.widen()?;
            if predicate.holds(WindowState {
                sum,
                len: offset + 1,
            }) {
                count += 1;
            }
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::LengthAtMost;
    use crate::utils::total_subarrays;

    #[test]
    fn test_window_push_pop() {
        let data = [3_i64, -1, 4];
        let mut window = Window::new();
        assert!(window.is_empty());

        window.push_back(&data).unwrap();
        window.push_back(&data).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window.sum(), 2);

        window.pop_front(&data).unwrap();
        assert_eq!(window.start(), 1);
        assert_eq!(window.sum(), -1);

        window.pop_front(&data).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.sum(), 0);

        // popping an empty window is a no-op
        window.pop_front(&data).unwrap();
        assert_eq!(window.start(), 2);
        assert_eq!(window.end(), 2);
    }

    #[test]
    fn test_count_example_sum_below_three() {
        assert_eq!(count_subarrays_below(&[1_i64, 1, 1], 3).unwrap(), 5);
    }

    #[test]
    fn test_count_empty_sequence() {
        let empty: [i64; 0] = [];
        assert_eq!(count_subarrays_below(&empty, 3).unwrap(), 0);
        assert_eq!(count_subarrays_below(&empty, i128::MIN).unwrap(), 0);
        assert_eq!(count_bounded_subarrays(&empty, |_: WindowState| false).unwrap(), 0);
    }

    #[test]
    fn test_count_single_element() {
        assert_eq!(count_subarrays_below(&[2_i64], 3).unwrap(), 1);
        assert_eq!(count_subarrays_below(&[3_i64], 3).unwrap(), 0);
    }

    #[test]
    fn test_count_all_qualify() {
        let data = [4_i64, 0, 2, 7, 1];
        assert_eq!(count_subarrays_below(&data, 15).unwrap(), total_subarrays(5));
    }

    #[test]
    fn test_count_none_qualify() {
        let data = [5_i64, 6, 7];
        assert_eq!(count_subarrays_at_most(&data, 4).unwrap(), 0);
    }

    #[test]
    fn test_oversized_elements_reset_window() {
        // 9 can never be part of a window; it must not stall the left boundary.
        let data = [1_i64, 9, 1, 1, 9, 1];
        assert_eq!(count_subarrays_at_most(&data, 2).unwrap(), 1 + 3 + 1);
        assert_eq!(left_bounds(&data, SumAtMost(2)).unwrap(), vec![0, 2, 2, 2, 5, 5]);
    }

    #[test]
    fn test_score_below_matches_naive() {
        let data = [2_i64, 1, 4, 3, 5];
        assert_eq!(count_subarrays_score_below(&data, 10).unwrap(), 6);
        assert_eq!(
            count_bounded_subarrays_naive(&data, ScoreBelow(10)).unwrap(),
            6
        );
    }

    #[test]
    fn test_length_predicate_counts_short_windows() {
        let data = [7_i64, -3, 2, 8];
        // windows of length <= 2: 4 + 3
        assert_eq!(count_bounded_subarrays(&data, LengthAtMost(2)).unwrap(), 7);
    }

    #[test]
    fn test_left_bounds_sum_to_count() {
        let data = [1_i64, 2, 3, 1, 1, 4];
        let bounds = left_bounds(&data, SumBelow(5)).unwrap();
        let from_bounds: u64 = bounds
            .iter()
            .enumerate()
            .map(|(right, &left)| (right + 1 - left) as u64)
            .sum();
        assert_eq!(from_bounds, count_subarrays_below(&data, 5).unwrap());
    }

    #[test]
    fn test_left_bounds_into_insufficient_output() {
        let data = [1_i64, 2, 3];
        let mut output = [0_usize; 2];
        assert_eq!(
            left_bounds_into(&data, SumBelow(5), &mut output),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_longest_window_none() {
        assert_eq!(longest_bounded_window(&[5_i64, 6], SumAtMost(1)).unwrap(), None);
        let empty: [i64; 0] = [];
        assert_eq!(longest_bounded_window(&empty, SumAtMost(1)).unwrap(), None);
    }

    #[test]
    fn test_longest_window_prefers_earliest() {
        let span = longest_bounded_window(&[1_i64, 1, 5, 1, 1], SumAtMost(2))
            .unwrap()
            .unwrap();
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 1);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_non_monotonic_detected_when_verifying() {
        // [-5, 6] has sum 1 < 3 but [6] does not.
        let config = ScanConfig::new().verify_monotonic(true);
        let result = count_bounded_subarrays_with(&[-5_i64, 6], SumBelow(3), &config);
        assert_eq!(result, Err(Error::PreconditionViolation { left: 0, right: 1 }));
    }

    #[test]
    fn test_non_monotonic_silent_without_verification() {
        let config = ScanConfig::new().verify_monotonic(false);
        let count = count_bounded_subarrays_with(&[-5_i64, 6], SumBelow(3), &config).unwrap();
        // [6] alone is counted although 6 >= 3; the true count is 2.
        assert_eq!(count, 3);
    }

    #[test]
    fn test_predicate_evaluations_are_linear() {
        use std::cell::Cell;

        let data: Vec<i64> = (0..200).map(|i| (i * 37) % 11).collect();
        let n = data.len();
        let calls = Cell::new(0_usize);
        let counting = |window: WindowState| {
            calls.set(calls.get() + 1);
            SumAtMost(20).holds(window)
        };

        let unverified = ScanConfig::new().verify_monotonic(false);
        let count = count_bounded_subarrays_with(&data, counting, &unverified).unwrap();
        assert!(calls.get() <= 2 * n, "{} evaluations for n = {n}", calls.get());
        assert_eq!(count, count_bounded_subarrays_naive(&data, SumAtMost(20)).unwrap());

        calls.set(0);
        let verified = ScanConfig::new().verify_monotonic(true);
        count_bounded_subarrays_with(&data, counting, &verified).unwrap();
        assert!(calls.get() <= 3 * n, "{} evaluations for n = {n}", calls.get());
    }

    #[test]
    fn test_evaluations_with_oversized_elements() {
        use std::cell::Cell;

        // every element alone breaks the bound, so each window empties out
        let data = [9_i64; 50];
        let calls = Cell::new(0_usize);
        let counting = |window: WindowState| {
            calls.set(calls.get() + 1);
            SumBelow(5).holds(window)
        };
        let config = ScanConfig::new().verify_monotonic(false);
        assert_eq!(count_bounded_subarrays_with(&data, counting, &config).unwrap(), 0);
        assert_eq!(calls.get(), data.len());
    }

    #[test]
    fn test_with_variants_honour_config() {
        let data = [-5_i64, 6];
        let verify = ScanConfig::new().verify_monotonic(true);
        let skip = ScanConfig::new().verify_monotonic(false);

        assert_eq!(
            left_bounds_with(&data, SumBelow(3), &verify),
            Err(Error::PreconditionViolation { left: 0, right: 1 })
        );
        assert_eq!(left_bounds_with(&data, SumBelow(3), &skip).unwrap(), vec![0, 0]);

        let mut output = [7_usize; 2];
        assert_eq!(
            left_bounds_into_with(&data, SumBelow(3), &mut output, &skip).unwrap(),
            3
        );
        assert_eq!(output, [0, 0]);

        assert!(longest_bounded_window_with(&data, SumBelow(3), &verify).is_err());
        let span = longest_bounded_window_with(&data, SumBelow(3), &skip)
            .unwrap()
            .unwrap();
        assert_eq!((span.start, span.end, span.sum), (0, 1, 1));
    }

    #[test]
    fn test_default_variants_match_default_config() {
        let data = [2_i64, 5, 1, 1];
        let config = ScanConfig::default();
        assert_eq!(
            left_bounds(&data, SumAtMost(3)).unwrap(),
            left_bounds_with(&data, SumAtMost(3), &config).unwrap()
        );
        assert_eq!(
            longest_bounded_window(&data, SumAtMost(3)).unwrap(),
            longest_bounded_window_with(&data, SumAtMost(3), &config).unwrap()
        );
    }

    #[test]
    fn test_negative_values_with_length_predicate_are_fine() {
        let config = ScanConfig::new().verify_monotonic(true);
        let count =
            count_bounded_subarrays_with(&[-5_i64, 6, -1], LengthAtMost(1), &config).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_idempotent() {
        let data = [3_i32, 1, 4, 1, 5, 9, 2, 6];
        let first = count_subarrays_at_most(&data, 10).unwrap();
        let second = count_subarrays_at_most(&data, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let data = [i64::MAX, i64::MAX, i64::MAX];
        assert_eq!(
            count_subarrays_at_most(&data, 3 * i128::from(i64::MAX)).unwrap(),
            6
        );
    }

    #[test]
    fn test_small_integer_types() {
        let data = [100_i8, 100, 100];
        assert_eq!(count_subarrays_below(&data, 250).unwrap(), 5);
    }

    #[test]
    fn test_scan_config_default() {
        assert_eq!(
            ScanConfig::default().verifies_monotonic(),
            cfg!(debug_assertions)
        );
        assert!(ScanConfig::new().verify_monotonic(true).verifies_monotonic());
    }
}

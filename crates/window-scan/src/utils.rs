//! Utility functions for window-scan.

/// Number of non-empty contiguous subarrays of a sequence of length `n`.
///
/// This is `n * (n + 1) / 2`, the count returned by any scan whose predicate
/// accepts every window.
///
/// # Example
///
/// ```
/// use window_scan::utils::total_subarrays;
///
/// assert_eq!(total_subarrays(0), 0);
/// assert_eq!(total_subarrays(3), 6);
/// ```
#[inline]
#[must_use]
pub const fn total_subarrays(n: usize) -> u64 {
    let n = n as u64;
    n * (n + 1) / 2
}

//! Shared test utilities for window-scan tests.
//!
//! Naive quadratic reference implementations used to cross-check the
//! linear kernels.

/// Count subarrays whose sum is strictly below `threshold` by brute force.
#[allow(dead_code)]
pub fn naive_count_below(data: &[i64], threshold: i128) -> u64 {
    let mut count = 0;
    for start in 0..data.len() {
        let mut sum = 0_i128;
        for &value in &data[start..] {
            sum += i128::from(value);
            if sum < threshold {
                count += 1;
            }
        }
    }
    count
}

/// Minimal qualifying left boundary per right boundary, by brute force,
/// for the "sum at most" predicate on non-negative data.
#[allow(dead_code)]
pub fn naive_left_bounds_at_most(data: &[i64], threshold: i128) -> Vec<usize> {
    (0..data.len())
        .map(|right| {
            (0..=right)
                .find(|&left| {
                    data[left..=right]
                        .iter()
                        .map(|&v| i128::from(v))
                        .sum::<i128>()
                        <= threshold
                })
                .unwrap_or(right + 1)
        })
        .collect()
}

/// Apply inclusive range increments one position at a time.
#[allow(dead_code)]
pub fn naive_coverage(length: usize, ranges: &[(usize, usize)]) -> Vec<i64> {
    let mut values = vec![0; length];
    for &(start, end) in ranges {
        for value in &mut values[start..=end] {
            *value += 1;
        }
    }
    values
}

/// Sum of an inclusive range computed directly.
#[allow(dead_code)]
pub fn naive_range_sum(data: &[i64], start: usize, end: usize) -> i128 {
    data[start..=end].iter().map(|&v| i128::from(v)).sum()
}

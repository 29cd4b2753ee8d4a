//! Difference-array engine for batched range increments.
//!
//! Many inclusive range increments are recorded in O(1) each on a
//! difference array (`+amount` at `start`, `-amount` at `end + 1`), then a
//! single running-sum pass reconstructs the per-position values.
//!
//! # Complexity
//!
//! - Time: O(length + ranges)
//! - Space: O(length) for the difference array
//!
//! # Example
//!
//! ```
//! use window_scan::kernels::prefix_delta::{apply_range_increments, covers_demand};
//!
//! let counts = apply_range_increments(4, &[(1, 3), (0, 2)]).unwrap();
//! assert_eq!(counts, vec![1, 2, 2, 1]);
//!
//! assert!(covers_demand(4, &[(1, 3), (0, 2)], &[1, 1, 1, 1]).unwrap());
//! assert!(!covers_demand(4, &[(1, 3), (0, 2)], &[2, 1, 1, 1]).unwrap());
//! ```

use tracing::trace;

use crate::error::{Error, Result};
use crate::traits::{validate_range, ValidatedInput};

/// An inclusive range `[start, end]` incremented by `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeIncrement {
    /// First index covered by the range.
    pub start: usize,
    /// Last index covered by the range.
    pub end: usize,
    /// Value added to every covered position.
    pub amount: i64,
}

impl RangeIncrement {
    /// Creates a range increment.
    #[must_use]
    pub const fn new(start: usize, end: usize, amount: i64) -> Self {
        Self { start, end, amount }
    }

    /// Creates a range that adds one to every covered position.
    #[must_use]
    pub const fn unit(start: usize, end: usize) -> Self {
        Self::new(start, end, 1)
    }
}

impl From<(usize, usize)> for RangeIncrement {
    fn from((start, end): (usize, usize)) -> Self {
        Self::unit(start, end)
    }
}

impl From<(usize, usize, i64)> for RangeIncrement {
    fn from((start, end, amount): (usize, usize, i64)) -> Self {
        Self::new(start, end, amount)
    }
}

/// A difference array over a zero-initialized sequence of `length` positions.
///
/// Deltas and running sums are kept as `i128`, so any number of `i64`
/// increments accumulates exactly. Only the per-position values handed
/// back as `i64` can fail to fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaArray {
    // One extra slot so that `end + 1` is always addressable.
    deltas: Vec<i128>,
}

impl DeltaArray {
    /// Creates a difference array for `length` positions.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            deltas: vec![0; length + 1],
        }
    }

    /// Returns the number of positions covered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deltas.len() - 1
    }

    /// Returns true if the array covers no positions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records a range increment in O(1).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if `start > end` or `end >= len()`.
    #[inline]
    pub fn apply(&mut self, range: RangeIncrement) -> Result<()> {
        validate_range(range.start, range.end, self.len())?;
        let amount = i128::from(range.amount);
        self.deltas[range.start] += amount;
        self.deltas[range.end + 1] -= amount;
        Ok(())
    }

    /// Resets every position to zero without releasing the allocation.
    pub fn clear(&mut self) {
        self.deltas.fill(0);
    }

    /// Resizes to `length` zeroed positions, reusing the allocation when possible.
    pub fn reset(&mut self, length: usize) {
        self.deltas.clear();
        self.deltas.resize(length + 1, 0);
    }

    /// Reconstructs the cumulative per-position values.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if a position's value does not fit in `i64`.
    pub fn cumulative(&self) -> Result<Vec<i64>> {
        self.iter_cumulative().map(narrow).collect()
    }

    /// Reconstructs the cumulative values into a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `output` is shorter than `len()`, or
    /// `Error::NumericConversion` if a position's value does not fit in `i64`.
    /// On a conversion error the buffer holds the positions before the failing one.
    pub fn cumulative_into(&self, output: &mut [i64]) -> Result<()> {
        output.validate_min_len(self.len())?;
        for (slot, value) in output.iter_mut().zip(self.iter_cumulative()) {
            *slot = narrow(value)?;
        }
        Ok(())
    }

    /// Iterates over the exact cumulative per-position values.
    pub fn iter_cumulative(&self) -> impl Iterator<Item = i128> + '_ {
        self.deltas[..self.len()].iter().scan(0_i128, |running, &delta| {
            *running += delta;
            Some(*running)
        })
    }
}

fn narrow(value: i128) -> Result<i64> {
    i64::try_from(value).map_err(|_| Error::NumericConversion {
        context: "cumulative increment does not fit in i64",
    })
}

/// Applies unit increments over inclusive `(start, end)` ranges.
///
/// # Arguments
///
/// * `length` - Number of positions of the zero-initialized target
/// * `ranges` - Inclusive ranges, each adding one to every covered position
///
/// # Returns
///
/// The cumulative increment count of every position.
///
/// # Errors
///
/// Returns `Error::InvalidRange` for the first range with `start > end` or
/// `end >= length`.
pub fn apply_range_increments(length: usize, ranges: &[(usize, usize)]) -> Result<Vec<i64>> {
    let mut deltas = DeltaArray::new(length);
    for &range in ranges {
        deltas.apply(range.into())?;
    }
    deltas.cumulative()
}

/// Applies weighted increments over inclusive ranges.
///
/// # Errors
///
/// Returns `Error::InvalidRange` for the first range that does not fit `length`,
/// or `Error::NumericConversion` if a position's total does not fit in `i64`.
///
/// # Example
///
/// ```
/// use window_scan::kernels::prefix_delta::{apply_weighted_increments, RangeIncrement};
///
/// let values = apply_weighted_increments(
///     3,
///     &[RangeIncrement::new(0, 1, 5), RangeIncrement::new(1, 2, -2)],
/// )
/// .unwrap();
/// assert_eq!(values, vec![5, 3, -2]);
/// ```
pub fn apply_weighted_increments(length: usize, ranges: &[RangeIncrement]) -> Result<Vec<i64>> {
    let mut deltas = DeltaArray::new(length);
    for &range in ranges {
        deltas.apply(range)?;
    }
    deltas.cumulative()
}

/// Returns whether every position's cumulative increment meets its demand.
///
/// The comparison happens during the reconstruction pass; no per-position
/// output is allocated.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `demand.len() != length`, or
/// `Error::InvalidRange` for a range that does not fit `length`.
pub fn covers_demand(length: usize, ranges: &[(usize, usize)], demand: &[i64]) -> Result<bool> {
    demand.validate_len(length)?;

    let mut deltas = DeltaArray::new(length);
    for &range in ranges {
        deltas.apply(range.into())?;
    }

    Ok(meets(&deltas, demand))
}

/// Weighted variant of [`covers_demand`].
///
/// # Errors
///
/// Same conditions as [`covers_demand`].
pub fn covers_demand_weighted(
    length: usize,
    ranges: &[RangeIncrement],
    demand: &[i64],
) -> Result<bool> {
    demand.validate_len(length)?;

    let mut deltas = DeltaArray::new(length);
    for &range in ranges {
        deltas.apply(range)?;
    }

    Ok(meets(&deltas, demand))
}

pub(crate) fn meets(deltas: &DeltaArray, demand: &[i64]) -> bool {
    deltas
        .iter_cumulative()
        .zip(demand)
        .all(|(value, &needed)| value >= i128::from(needed))
}

/// Finds the smallest number of leading ranges that together meet every demand.
///
/// Positions are visited left to right and ranges are consumed in order
/// only while the current position is short, so the whole search is one
/// linear sweep.
///
/// # Returns
///
/// `Some(k)` for the smallest `k` such that `ranges[..k]` meets `demand`
/// (`Some(0)` when no increments are needed), or `None` if even all ranges
/// together fall short.
///
/// # Errors
///
/// Returns `Error::InvalidRange` for a range that does not fit
/// `demand.len()`, or `Error::InvalidInput` for a negative amount.
///
/// # Example
///
/// ```
/// use window_scan::kernels::prefix_delta::{min_prefix_covering, RangeIncrement};
///
/// let ranges = [
///     RangeIncrement::new(0, 2, 1),
///     RangeIncrement::new(0, 2, 1),
///     RangeIncrement::new(1, 1, 3),
/// ];
/// assert_eq!(min_prefix_covering(&[2, 0, 2], &ranges).unwrap(), Some(2));
/// assert_eq!(min_prefix_covering(&[4, 3, 2, 1], &ranges[..2]).unwrap(), None);
/// ```
pub fn min_prefix_covering(demand: &[i64], ranges: &[RangeIncrement]) -> Result<Option<usize>> {
    let length = demand.len();
    for range in ranges {
        validate_range(range.start, range.end, length)?;
        if range.amount < 0 {
            return Err(Error::InvalidInput {
                reason: "range amounts must be non-negative",
            });
        }
    }

    let mut deltas = vec![0_i128; length + 1];
    let mut running = 0_i128;
    let mut consumed = 0;

    for (i, &needed) in demand.iter().enumerate() {
        let needed = i128::from(needed);
        while running + deltas[i] < needed {
            let Some(range) = ranges.get(consumed) else {
                trace!(position = i, consumed, "ranges exhausted before demand was met");
                return Ok(None);
            };
            consumed += 1;

            // Positions before `i` are already settled.
            if range.end < i {
                continue;
            }
            let amount = i128::from(range.amount);
            deltas[range.start.max(i)] += amount;
            deltas[range.end + 1] -= amount;
        }
        running += deltas[i];
    }

    Ok(Some(consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_range_increments_example() {
        let values = apply_range_increments(4, &[(1, 3), (0, 2)]).unwrap();
        assert_eq!(values, vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_apply_no_ranges() {
        assert_eq!(apply_range_increments(3, &[]).unwrap(), vec![0, 0, 0]);
        assert!(apply_range_increments(0, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_position_range() {
        assert_eq!(apply_range_increments(3, &[(2, 2)]).unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_full_range() {
        assert_eq!(
            apply_range_increments(3, &[(0, 2), (0, 2)]).unwrap(),
            vec![2, 2, 2]
        );
    }

    #[test]
    fn test_start_after_end_fails_fast() {
        assert_eq!(
            apply_range_increments(4, &[(0, 1), (3, 2)]),
            Err(Error::InvalidRange {
                start: 3,
                end: 2,
                length: 4
            })
        );
    }

    #[test]
    fn test_end_out_of_bounds_is_not_clamped() {
        assert_eq!(
            apply_range_increments(4, &[(1, 4)]),
            Err(Error::InvalidRange {
                start: 1,
                end: 4,
                length: 4
            })
        );
        assert!(apply_range_increments(0, &[(0, 0)]).is_err());
    }

    #[test]
    fn test_covers_demand_example() {
        assert!(covers_demand(4, &[(1, 3), (0, 2)], &[1, 1, 1, 1]).unwrap());
    }

    #[test]
    fn test_covers_demand_shortfall() {
        assert!(!covers_demand(3, &[(0, 1)], &[1, 1, 1]).unwrap());
    }

    #[test]
    fn test_covers_demand_length_mismatch() {
        assert_eq!(
            covers_demand(4, &[(0, 1)], &[1, 1, 1]),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_covers_demand_weighted() {
        let ranges = [RangeIncrement::new(0, 2, 2), RangeIncrement::new(1, 1, 1)];
        assert!(covers_demand_weighted(3, &ranges, &[2, 3, 2]).unwrap());
        assert!(!covers_demand_weighted(3, &ranges, &[2, 4, 2]).unwrap());
    }

    #[test]
    fn test_delta_array_reuse() {
        let mut deltas = DeltaArray::new(3);
        deltas.apply(RangeIncrement::unit(0, 1)).unwrap();
        assert_eq!(deltas.cumulative().unwrap(), vec![1, 1, 0]);

        deltas.clear();
        deltas.apply(RangeIncrement::new(1, 2, 4)).unwrap();
        let mut output = [9_i64; 4];
        deltas.cumulative_into(&mut output).unwrap();
        assert_eq!(output, [0, 4, 4, 9]);
    }

    #[test]
    fn test_delta_array_reset_changes_length() {
        let mut deltas = DeltaArray::new(2);
        deltas.apply(RangeIncrement::unit(0, 1)).unwrap();
        deltas.reset(4);
        assert_eq!(deltas.len(), 4);
        assert_eq!(deltas.cumulative().unwrap(), vec![0, 0, 0, 0]);
        deltas.reset(0);
        assert!(deltas.is_empty());
    }

    #[test]
    fn test_delta_array_cumulative_into_short_buffer() {
        let deltas = DeltaArray::new(3);
        let mut output = [0_i64; 2];
        assert!(deltas.cumulative_into(&mut output).is_err());
    }

    #[test]
    fn test_min_prefix_already_met() {
        assert_eq!(
            min_prefix_covering(&[0, 0], &[RangeIncrement::unit(0, 1)]).unwrap(),
            Some(0)
        );
        assert_eq!(min_prefix_covering(&[], &[]).unwrap(), Some(0));
    }

    #[test]
    fn test_min_prefix_needs_all() {
        let ranges = [
            RangeIncrement::new(1, 2, 2),
            RangeIncrement::new(0, 2, 1),
            RangeIncrement::new(0, 0, 1),
        ];
        // position 0 needs 2: ranges 1 and 2
        assert_eq!(min_prefix_covering(&[2, 3, 1], &ranges).unwrap(), Some(3));
    }

    #[test]
    fn test_min_prefix_skips_settled_ranges() {
        let ranges = [
            RangeIncrement::new(0, 0, 1),
            RangeIncrement::new(0, 0, 5),
            RangeIncrement::new(1, 1, 1),
        ];
        assert_eq!(min_prefix_covering(&[1, 1], &ranges).unwrap(), Some(3));
    }

    #[test]
    fn test_min_prefix_rejects_negative_amounts() {
        let ranges = [RangeIncrement::new(0, 0, -1)];
        assert!(matches!(
            min_prefix_covering(&[0], &ranges),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_min_prefix_rejects_invalid_range() {
        let ranges = [RangeIncrement::unit(0, 5)];
        assert!(matches!(
            min_prefix_covering(&[1, 1], &ranges),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_total_above_i64_max_is_conversion_error() {
        let ranges = [
            RangeIncrement::new(0, 0, i64::MAX),
            RangeIncrement::new(0, 0, 1),
        ];
        assert!(matches!(
            apply_weighted_increments(2, &ranges),
            Err(Error::NumericConversion { .. })
        ));

        let mut deltas = DeltaArray::new(2);
        for range in ranges {
            deltas.apply(range).unwrap();
        }
        let mut output = [0_i64; 2];
        assert!(matches!(
            deltas.cumulative_into(&mut output),
            Err(Error::NumericConversion { .. })
        ));
    }

    #[test]
    fn test_extreme_amounts_cancel_exactly() {
        // the delta at position 1 is -2 * i64::MAX before the values are read
        let ranges = [
            RangeIncrement::new(0, 0, i64::MAX),
            RangeIncrement::new(1, 1, -i64::MAX),
        ];
        assert_eq!(
            apply_weighted_increments(2, &ranges).unwrap(),
            vec![i64::MAX, -i64::MAX]
        );
    }

    #[test]
    fn test_covers_demand_with_overlapping_max_amounts() {
        let ranges = [
            RangeIncrement::new(0, 1, i64::MAX),
            RangeIncrement::new(1, 1, i64::MAX),
        ];
        assert!(covers_demand_weighted(2, &ranges, &[0, 0]).unwrap());
        assert!(covers_demand_weighted(2, &ranges, &[i64::MAX, i64::MAX]).unwrap());
    }

    #[test]
    fn test_min_prefix_with_max_amounts() {
        let ranges = [
            RangeIncrement::new(0, 0, i64::MAX - 1),
            RangeIncrement::new(0, 0, 5),
        ];
        assert_eq!(
            min_prefix_covering(&[i64::MAX, 0], &ranges).unwrap(),
            Some(2)
        );
        assert_eq!(
            min_prefix_covering(&[i64::MAX - 1, 0], &ranges).unwrap(),
            Some(1)
        );
    }
}

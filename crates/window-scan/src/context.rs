//! Reusable scratch space for repeated queries.
//!
//! A [`ScanContext`] is constructed explicitly by the caller and passed to
//! each query. Its buffers are allocated on first use and grown on demand,
//! so a long-running caller answering many queries allocates only when a
//! query is larger than any seen before. Nothing is shared between contexts.
//!
//! # Example
//!
//! ```
//! use window_scan::context::ScanContext;
//! use window_scan::predicates::SumBelow;
//!
//! let mut ctx = ScanContext::new();
//!
//! let counts = ctx.apply_range_increments(4, &[(1, 3), (0, 2)]).unwrap();
//! assert_eq!(counts, &[1, 2, 2, 1]);
//!
//! assert!(ctx.covers_demand(4, &[(1, 3), (0, 2)], &[1, 1, 1, 1]).unwrap());
//!
//! let bounds = ctx.left_bounds(&[1_i64, 1, 1], SumBelow(3)).unwrap();
//! assert_eq!(bounds, &[0, 0, 1]);
//! ```

use crate::error::Result;
use crate::kernels::prefix_delta::{meets, DeltaArray};
use crate::kernels::sliding_window::left_bounds_into;
use crate::traits::{ScanElement, ValidatedInput, WindowPredicate};

/// Lazily allocated scratch buffers for scanning queries.
#[derive(Debug, Default, Clone)]
pub struct ScanContext {
    deltas: Option<DeltaArray>,
    cumulative: Vec<i64>,
    bounds: Vec<usize>,
}

impl ScanContext {
    /// Creates an empty context. No memory is allocated until the first query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once any query has allocated scratch space.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.deltas.is_some() || self.cumulative.capacity() > 0 || self.bounds.capacity() > 0
    }

    fn deltas(&mut self, length: usize) -> &mut DeltaArray {
        let deltas = self.deltas.get_or_insert_with(|| DeltaArray::new(0));
        deltas.reset(length);
        deltas
    }

    /// Applies unit range increments using the context's scratch space.
    ///
    /// The returned slice borrows the context and is overwritten by the next query.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` for a range that does not fit `length`.
    pub fn apply_range_increments(
        &mut self,
        length: usize,
        ranges: &[(usize, usize)],
    ) -> Result<&[i64]> {
        let deltas = self.deltas(length);
        for &range in ranges {
            deltas.apply(range.into())?;
        }

        self.cumulative.resize(length, 0);
        if let Some(deltas) = &self.deltas {
            deltas.cumulative_into(&mut self.cumulative)?;
        }
        Ok(&self.cumulative)
    }

    /// Returns whether every position's cumulative increment meets its demand.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `demand.len() != length`, or
    /// `Error::InvalidRange` for a range that does not fit `length`.
    pub fn covers_demand(
        &mut self,
        length: usize,
        ranges: &[(usize, usize)],
        demand: &[i64],
    ) -> Result<bool> {
        demand.validate_len(length)?;

        let deltas = self.deltas(length);
        for &range in ranges {
            deltas.apply(range.into())?;
        }
        Ok(meets(deltas, demand))
    }

    /// Computes minimal left boundaries using the context's scratch space.
    ///
    /// # Errors
    ///
    /// Same conditions as
    /// [`count_bounded_subarrays`](crate::kernels::sliding_window::count_bounded_subarrays).
    pub fn left_bounds<T, P>(&mut self, data: &[T], predicate: P) -> Result<&[usize]>
    where
        T: ScanElement,
        P: WindowPredicate,
    {
        self.bounds.resize(data.len(), 0);
        left_bounds_into(data, predicate, &mut self.bounds)?;
        Ok(&self.bounds)
    }
}

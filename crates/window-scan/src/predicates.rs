//! Ready-made monotonic window predicates.
//!
//! Each predicate captures its threshold and implements
//! [`WindowPredicate`]. All of them are monotonic for sequences of
//! non-negative values; [`LengthAtMost`] is monotonic for any sequence.
//!
//! # Example
//!
//! ```
//! use window_scan::kernels::sliding_window::count_bounded_subarrays;
//! use window_scan::predicates::{LengthAtMost, SumAtMost, WindowPredicateExt};
//!
//! let data = [2_i64, 1, 3, 1];
//! let count = count_bounded_subarrays(&data, SumAtMost(4).and(LengthAtMost(2))).unwrap();
//! assert_eq!(count, 7); // 4 singles + [2,1], [1,3], [3,1]
//! ```

use crate::traits::{WindowPredicate, WindowState};

/// Window sum strictly below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumBelow(pub i128);

impl WindowPredicate for SumBelow {
    #[inline]
    fn holds(&self, window: WindowState) -> bool {
        window.sum < self.0
    }
}

/// Window sum at most the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumAtMost(pub i128);

impl WindowPredicate for SumAtMost {
    #[inline]
    fn holds(&self, window: WindowState) -> bool {
        window.sum <= self.0
    }
}

/// Window score (sum multiplied by length) strictly below the threshold.
///
/// Saturating multiplication keeps huge windows from wrapping into a
/// small score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBelow(pub i128);

impl WindowPredicate for ScoreBelow {
    #[inline]
    fn holds(&self, window: WindowState) -> bool {
        window.sum.saturating_mul(window.len_i128()) < self.0
    }
}

/// Window length at most the given number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthAtMost(pub usize);

impl WindowPredicate for LengthAtMost {
    #[inline]
    fn holds(&self, window: WindowState) -> bool {
        window.len <= self.0
    }
}

/// Conjunction of two predicates.
///
/// The conjunction of two monotonic predicates is monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Both<A, B>(pub A, pub B);

impl<A: WindowPredicate, B: WindowPredicate> WindowPredicate for Both<A, B> {
    #[inline]
    fn holds(&self, window: WindowState) -> bool {
        self.0.holds(window) && self.1.holds(window)
    }
}

/// Combinators available on every predicate.
pub trait WindowPredicateExt: WindowPredicate + Sized {
    /// Returns a predicate that holds when both `self` and `other` hold.
    fn and<P: WindowPredicate>(self, other: P) -> Both<Self, P> {
        Both(self, other)
    }
}

impl<P: WindowPredicate> WindowPredicateExt for P {}

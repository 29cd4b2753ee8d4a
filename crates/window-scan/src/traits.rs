//! Core traits for window-scan.
//!
//! This module defines the abstractions shared by every scanning kernel.
//!
//! # Overview
//!
//! - [`ScanElement`] abstracts over the signed integer types a sequence may
//!   hold. Elements are widened to an `i128` aggregate so that window sums
//!   over `i64` data cannot overflow in practice.
//! - [`WindowPredicate`] is the capability interface of the sliding-window
//!   engine: a single method deciding whether a window satisfies the bound.
//! - [`ValidatedInput`] and [`validate_range`] perform the fail-fast checks
//!   used before any scan starts.
//!
//! # Example
//!
//! ```
//! use window_scan::traits::{WindowPredicate, WindowState};
//!
//! // Any `Fn(WindowState) -> bool` is a predicate.
//! let fits = |w: WindowState| w.sum * (w.len as i128) < 10;
//!
//! assert!(fits.holds(WindowState { sum: 4, len: 2 }));
//! assert!(!fits.holds(WindowState { sum: 5, len: 2 }));
//! ```

use std::fmt::Debug;

use num_traits::{PrimInt, Signed, ToPrimitive};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements of a scanned sequence.
///
/// Implemented for every primitive signed integer through a blanket impl.
/// Window aggregates are computed in `i128`.
///
/// # Example
///
/// ```
/// use window_scan::traits::ScanElement;
///
/// fn total<T: ScanElement>(data: &[T]) -> window_scan::Result<i128> {
///     data.iter().try_fold(0_i128, |acc, &x| Ok(acc + x.widen()?))
/// }
///
/// assert_eq!(total(&[1_i32, -2, 3]).unwrap(), 2);
/// assert_eq!(total(&[i64::MAX, i64::MAX]).unwrap(), 2 * i128::from(i64::MAX));
/// ```
pub trait ScanElement: PrimInt + Signed + Debug + Send + Sync + 'static {
    /// Widens the element to the aggregate type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented as `i128`.
    #[inline]
    fn widen(self) -> Result<i128> {
        ToPrimitive::to_i128(&self).ok_or(Error::NumericConversion {
            context: "sequence element to i128 aggregate",
        })
    }
}

impl<T: PrimInt + Signed + Debug + Send + Sync + 'static> ScanElement for T {}

/// Read-only view of a window handed to a [`WindowPredicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowState {
    /// Exact sum of the elements in the window.
    pub sum: i128,
    /// Number of elements in the window.
    pub len: usize,
}

impl WindowState {
    /// Returns the window length as an aggregate-typed value.
    #[inline]
    #[must_use]
    pub fn len_i128(&self) -> i128 {
        // usize always fits in i128 on supported targets
        self.len as i128
    }
}

/// Boundedness test over a window.
///
/// Implementations must be monotonic: if a window ending at some index
/// satisfies the predicate, every shorter window ending at the same index
/// must satisfy it too. The sliding-window engine relies on this to discard
/// left boundaries for good.
///
/// Closures of type `Fn(WindowState) -> bool` implement this trait.
pub trait WindowPredicate {
    /// Returns `true` if the window satisfies the bound.
    fn holds(&self, window: WindowState) -> bool;
}

impl<F> WindowPredicate for F
where
    F: Fn(WindowState) -> bool,
{
    #[inline]
    fn holds(&self, window: WindowState) -> bool {
        self(window)
    }
}

/// Trait for validating input data before a scan.
pub trait ValidatedInput {
    /// Returns the length of the input.
    fn len(&self) -> usize;

    /// Returns true if the input is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the input has exactly `expected` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the lengths differ.
    #[inline]
    fn validate_len(&self, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                expected,
                actual: self.len(),
            })
        }
    }

    /// Validates that the input has at least `min_len` elements.
    ///
    /// Used for pre-allocated output buffers.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the input is shorter than `min_len`.
    #[inline]
    fn validate_min_len(&self, min_len: usize) -> Result<()> {
        if self.len() < min_len {
            Err(Error::LengthMismatch {
                expected: min_len,
                actual: self.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl<T> ValidatedInput for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> ValidatedInput for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Validates an inclusive range against a sequence length.
///
/// # Errors
///
/// Returns `Error::InvalidRange` if `start > end` or `end >= length`.
#[inline]
pub const fn validate_range(start: usize, end: usize, length: usize) -> Result<()> {
    if start > end || end >= length {
        Err(Error::InvalidRange { start, end, length })
    } else {
        Ok(())
    }
}

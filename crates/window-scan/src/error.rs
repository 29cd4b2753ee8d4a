//! Error types for window-scan.
//!
//! This module defines the error types returned by every scanning kernel.
//! All errors are reported synchronously; the computations are pure, so
//! retrying a failed call never changes its outcome.

use thiserror::Error;

/// The main error type for window-scan operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is malformed in a way not covered by a more specific variant.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of what is wrong with the input.
        reason: &'static str,
    },

    /// A range increment does not fit the target sequence.
    ///
    /// Returned when `start > end` or when `end` is outside `0..length`.
    /// Ranges are never clamped.
    #[error("invalid range [{start}, {end}] for length {length}")]
    InvalidRange {
        /// Inclusive start of the offending range.
        start: usize,
        /// Inclusive end of the offending range.
        end: usize,
        /// Length of the sequence the range was applied to.
        length: usize,
    },

    /// Two inputs that must have the same length do not.
    ///
    /// Used for demand tables and for pre-allocated output buffers.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// The required length.
        expected: usize,
        /// The length that was provided.
        actual: usize,
    },

    /// The window predicate is not monotonic for the supplied data.
    ///
    /// The window `[left, right]` satisfied the predicate while the shorter
    /// window `[left + 1, right]` did not. Only reported when monotonicity
    /// verification is enabled in [`ScanConfig`](crate::kernels::sliding_window::ScanConfig).
    #[error("predicate is not monotonic: window [{left}, {right}] holds but its left-shrunk sub-window does not")]
    PreconditionViolation {
        /// Left boundary of the satisfying window.
        left: usize,
        /// Right boundary of the satisfying window.
        right: usize,
    },

    /// Failed to convert a numeric value to the aggregate type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the window-scan Error type.
pub type Result<T> = std::result::Result<T, Error>;

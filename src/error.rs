//! Structured errors for range validation.

use thiserror::Error;

/// Errors produced when validating generation bounds.
///
/// The bounds are carried pre-rendered as strings so the error type stays
/// non-generic across every numeric element type.
///
/// # Examples
/// ```
/// use randseq::{NumericRange, RangeError};
///
/// let err = NumericRange::new(9, 1).unwrap_err();
/// assert_eq!(format!("{}", err), "Inverted range: low 9 exceeds high 1");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Lower bound exceeds upper bound (or a bound is not comparable, e.g. NaN).
    #[error("Inverted range: low {low} exceeds high {high}")]
    Inverted {
        /// Rejected lower bound.
        low: String,
        /// Rejected upper bound.
        high: String,
    },
}

/// Convenience alias for fallible generation operations.
pub type Result<T> = std::result::Result<T, RangeError>;

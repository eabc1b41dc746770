//! Shared error types.
//!
//! Only malformed construction inputs and out-of-range degree parameters
//! surface as errors. Out-of-range queries and numerically degenerate data
//! (duplicate x-values, zero pivots) degrade to NaN sentinels instead and
//! are never reported through this type.

use thiserror::Error;

/// Result type alias for fallible toolkit operations.
pub type Result<T> = core::result::Result<T, InterpolateError>;

/// Errors raised by interpolator and regression construction or by the
/// degree-selecting evaluation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpolateError {
    /// One or both input arrays were empty.
    #[error("input arrays must not be empty")]
    EmptyInput,

    /// The x and y arrays differ in length.
    #[error("mismatched input lengths: x has {x_len} values, y has {y_len}")]
    MismatchedInputs {
        /// Length of the independent-variable array.
        x_len: usize,
        /// Length of the dependent-variable array.
        y_len: usize,
    },

    /// Fewer sample points were supplied than the operation requires.
    #[error("too few sample points: got {got}, need at least {min}")]
    TooFewPoints {
        /// Number of points supplied.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// The requested polynomial degree cannot be served by the sample set.
    #[error("invalid polynomial degree {got}: must be below the sample count {n}")]
    InvalidDegree {
        /// Requested degree.
        got: usize,
        /// Number of sample points available.
        n: usize,
    },
}

//! Input validation for interpolator and regression construction.
//!
//! ## Purpose
//!
//! This module provides the fail-fast structural checks that run before any
//! numeric work: array lengths, minimum point counts, and the degree bound
//! of the adaptive evaluation entry points.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: it returns on the first violation found.
//! * Checks are ordered from cheap to expensive.
//! * Only *structural* problems are rejected here. Unsorted abscissas,
//!   duplicates, and non-finite values pass validation deliberately; the
//!   arithmetic downstream turns them into NaN/Inf sentinels, which is the
//!   contract for numerically degenerate data.
//!
//! ## Visibility
//!
//! Internal detail of the construction paths; not part of the public API.

use num_traits::Float;

use crate::primitives::errors::InterpolateError;

/// Validation utility for construction inputs and query parameters.
///
/// All methods return `Result<(), InterpolateError>` and fail fast on the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate a pair of sample arrays.
    pub fn validate_samples<T: Float>(
        x: &[T],
        y: &[T],
        min_points: usize,
    ) -> Result<(), InterpolateError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolateError::EmptyInput);
        }

        if x.len() != y.len() {
            return Err(InterpolateError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if x.len() < min_points {
            return Err(InterpolateError::TooFewPoints {
                got: x.len(),
                min: min_points,
            });
        }

        Ok(())
    }

    /// Validate the degree requested from an adaptive evaluation.
    ///
    /// A polynomial of degree `d` needs `d + 1` samples, so any degree at
    /// or above the sample count is rejected rather than clamped.
    pub fn validate_degree(degree: usize, n: usize) -> Result<(), InterpolateError> {
        if degree >= n {
            return Err(InterpolateError::InvalidDegree { got: degree, n });
        }
        Ok(())
    }
}

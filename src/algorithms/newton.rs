//! Newton divided-difference interpolation.
//!
//! ## Purpose
//!
//! This module provides [`NewtonPolynomial`], the interpolator built on the
//! divided-difference coefficient vector. Coefficients are computed once at
//! construction; every query is a read-only evaluation.
//!
//! ## Design notes
//!
//! * **Global coefficient run**: a window `[lo, hi]` selects *how many*
//!   leading coefficients participate, not a relocated sub-table. The sum
//!   always runs over `b[0..=hi-lo]` against the leading abscissas
//!   `x[0..]`. Callers wanting a polynomial through a specific sub-range of
//!   samples should use the Lagrange form, which localizes its basis.
//! * **NaN sentinels**: out-of-range and malformed-window queries return
//!   NaN; only an out-of-bounds degree parameter is a hard error.
//!
//! ## Invariants
//!
//! * The coefficient vector has exactly one entry per sample and is never
//!   mutated after construction.
//! * No query mutates the interpolator, so shared read-only use across
//!   threads is safe.

use core::fmt::Display;

use num_traits::Float;
use tracing::trace;

use crate::algorithms::selection;
use crate::engine::output::newton_form;
use crate::engine::validator::Validator;
use crate::math::divided::divided_differences;
use crate::primitives::errors::Result;
use crate::primitives::sample::SampleSet;
use crate::primitives::window::Window;

/// Newton-form interpolating polynomial over a fixed sample set.
#[derive(Debug, Clone)]
pub struct NewtonPolynomial<T> {
    samples: SampleSet<T>,
    coefficients: Vec<T>,
}

impl<T: Float> NewtonPolynomial<T> {
    /// Build the interpolator, copying the samples and computing the
    /// divided-difference coefficients once.
    ///
    /// Requires equal-length arrays with at least two points. Duplicate or
    /// unsorted abscissas are accepted and degrade to NaN during
    /// evaluation.
    pub fn new(x: &[T], y: &[T]) -> Result<Self> {
        Validator::validate_samples(x, y, 2)?;
        let samples = SampleSet::new(x, y);
        let coefficients = divided_differences(samples.x(), samples.y());
        Ok(Self {
            samples,
            coefficients,
        })
    }

    /// Interpolate at `x_query` using every sample.
    pub fn interpolate(&self, x_query: T) -> T {
        self.interpolate_within(x_query, Window::full(self.samples.len()))
    }

    /// Interpolate at `x_query` using `window.len()` leading coefficients.
    ///
    /// Returns NaN when the window falls outside the sample range or no
    /// coefficients exist.
    pub fn interpolate_within(&self, x_query: T, window: Window) -> T {
        let n = self.samples.len();
        let Some((lo, hi)) = window.resolve(n) else {
            trace!(
                "newton: window [{}, {}] invalid for {} samples",
                window.lo,
                window.hi,
                n
            );
            return T::nan();
        };
        if self.coefficients.is_empty() {
            return T::nan();
        }

        let x = self.samples.x();
        let b = &self.coefficients;

        let mut value = b[0];
        for k in 1..=(hi - lo) {
            let mut product = T::one();
            for &xj in &x[..k] {
                product = product * (x_query - xj);
            }
            value = value + b[k] * product;
        }
        value
    }

    /// Interpolate at `x_query` with a polynomial of the given degree,
    /// letting the window-selection policy place the sample window.
    ///
    /// Degrees at or above the sample count are rejected as
    /// [`InvalidDegree`](crate::primitives::errors::InterpolateError::InvalidDegree);
    /// queries outside `[x[0], x[n-1])` yield `Ok(NaN)`.
    pub fn interpolate_degree(&self, x_query: T, degree: usize) -> Result<T> {
        Validator::validate_degree(degree, self.samples.len())?;
        Ok(selection::adaptive(&self.samples, x_query, degree, |w| {
            self.interpolate_within(x_query, w)
        }))
    }

    /// Difference between the full-window interpolation at `x_query` and
    /// the ordinate of the nearest sample at or above it.
    ///
    /// Meaningful as an error probe only when `x_query` lies on or next to
    /// a sample.
    pub fn error_estimate(&self, x_query: T) -> T {
        self.reference_error(x_query, self.interpolate(x_query))
    }

    /// Windowed variant of [`error_estimate`](Self::error_estimate).
    pub fn error_estimate_within(&self, x_query: T, window: Window) -> T {
        self.reference_error(x_query, self.interpolate_within(x_query, window))
    }

    /// Degree-based variant of [`error_estimate`](Self::error_estimate).
    pub fn error_estimate_degree(&self, x_query: T, degree: usize) -> Result<T> {
        let interpolated = self.interpolate_degree(x_query, degree)?;
        Ok(self.reference_error(x_query, interpolated))
    }

    fn reference_error(&self, x_query: T, interpolated: T) -> T {
        let pos = self.samples.lower_bound(x_query);
        if pos >= self.samples.len() {
            trace!(
                "newton: no sample at or above query {}",
                x_query.to_f64().unwrap_or(f64::NAN)
            );
            return T::nan();
        }
        interpolated - self.samples.y()[pos]
    }

    /// The divided-difference coefficients `b[0..n]`.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Abscissas of the sample set.
    #[inline]
    pub fn x(&self) -> &[T] {
        self.samples.x()
    }

    /// Ordinates of the sample set.
    #[inline]
    pub fn y(&self) -> &[T] {
        self.samples.y()
    }
}

impl<T: Float + Display> NewtonPolynomial<T> {
    /// Human-readable rendering of the interpolating polynomial.
    pub fn polynomial(&self) -> String {
        newton_form(&self.coefficients, self.samples.x())
    }
}

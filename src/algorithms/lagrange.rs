//! Lagrange-form interpolation.
//!
//! ## Purpose
//!
//! This module provides [`LagrangePolynomial`], which evaluates the direct
//! basis-polynomial sum over a chosen window. Unlike the Newton form it
//! localizes fully: every window evaluation uses exactly the samples inside
//! the window and nothing else.
//!
//! ## Design notes
//!
//! * **Recomputed per query**: the basis products are rebuilt from scratch
//!   on every call, quadratic in the window length. No cache is shared
//!   across queries.
//! * **Shared policy**: degree-based evaluation delegates window placement
//!   and the truncation-error tie-break to the same selection algorithm the
//!   Newton form uses; only the per-window evaluation differs.
//! * A divided-difference coefficient vector is still built at construction.
//!   It feeds the polynomial rendering and nothing on the query path.

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

/// Lagrange-form interpolating polynomial over a fixed sample set.
#[derive(Debug, Clone)]
pub struct LagrangePolynomial<T> {
    samples: SampleSet<T>,
    coefficients: Vec<T>,
}

impl<T: Float> LagrangePolynomial<T> {
    /// Build the interpolator, copying the samples.
    ///
    /// Requires equal-length arrays with at least two points.
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

    /// Interpolate at `x_query` over the samples inside `window`.
    ///
    /// Returns NaN when the window falls outside the sample range.
    pub fn interpolate_within(&self, x_query: T, window: Window) -> T {
        let n = self.samples.len();
        let Some((lo, hi)) = window.resolve(n) else {
            trace!(
                "lagrange: window [{}, {}] invalid for {} samples",
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
        let y = self.samples.y();

        let mut value = T::zero();
        for j in lo..=hi {
            let mut basis = T::one();
            for k in lo..=hi {
                if k != j {
                    basis = basis * (x_query - x[k]) / (x[j] - x[k]);
                }
            }
            value = value + y[j] * basis;
        }
        value
    }

    /// Interpolate at `x_query` with a polynomial of the given degree.
    ///
    /// Window placement and the tie-break between overlapping candidates
    /// follow the Newton path; the value returned is always the Lagrange
    /// evaluation of the winning window.
    pub fn interpolate_degree(&self, x_query: T, degree: usize) -> Result<T> {
        Validator::validate_degree(degree, self.samples.len())?;
        Ok(selection::adaptive(&self.samples, x_query, degree, |w| {
            self.interpolate_within(x_query, w)
        }))
    }

    /// Difference between the full-window interpolation at `x_query` and
    /// the ordinate of the nearest sample at or above it.
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
                "lagrange: no sample at or above query {}",
                x_query.to_f64().unwrap_or(f64::NAN)
            );
            return T::nan();
        }
        interpolated - self.samples.y()[pos]
    }

    /// The divided-difference coefficients of the sample set.
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

impl<T: Float + Display> LagrangePolynomial<T> {
    /// Human-readable Newton-form rendering of the interpolating polynomial.
    pub fn polynomial(&self) -> String {
        newton_form(&self.coefficients, self.samples.x())
    }
}

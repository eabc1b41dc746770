//! Natural cubic spline interpolation.
//!
//! ## Purpose
//!
//! This module provides [`CubicSpline`], the piecewise cubic interpolant
//! with zero second derivative at both endpoints. Construction solves for
//! the interior second derivatives once; queries evaluate the cubic of the
//! containing interval.
//!
//! ## Design notes
//!
//! * The continuity conditions at the interior knots form a banded system,
//!   but it is assembled as a dense augmented matrix and handed to the
//!   shared Gaussian solver, the same path quadratic regression takes.
//! * The leading matrix column is identically zero (the first interior row
//!   has no sub-diagonal entry) and is stripped before solving, leaving an
//!   `(intervals - 1) x intervals` augmented system.
//!
//! ## Invariants
//!
//! * `f2` has one entry per sample with `f2[0] = f2[n-1] = 0`.
//! * `f2` is computed once and never mutated; queries are read-only.

use num_traits::Float;
use tracing::trace;

use crate::engine::validator::Validator;
use crate::math::gauss;
use crate::primitives::errors::Result;
use crate::primitives::sample::SampleSet;

/// Natural cubic spline over a fixed sample set.
#[derive(Debug, Clone)]
pub struct CubicSpline<T> {
    samples: SampleSet<T>,
    f2: Vec<T>,
}

impl<T: Float> CubicSpline<T> {
    /// Build the spline, copying the samples and solving for the interior
    /// second derivatives.
    ///
    /// Requires equal-length arrays with at least three points. Duplicate
    /// abscissas make the knot system singular and degrade the resulting
    /// derivatives to NaN/Inf.
    pub fn new(x: &[T], y: &[T]) -> Result<Self> {
        Validator::validate_samples(x, y, 3)?;
        let samples = SampleSet::new(x, y);
        let f2 = second_derivatives(samples.x(), samples.y());
        Ok(Self { samples, f2 })
    }

    /// Interpolate at `x_query`, or NaN outside `[x[0], x[n-1]]`.
    pub fn interpolate(&self, x_query: T) -> T {
        let x = self.samples.x();
        let y = self.samples.y();
        let f2 = &self.f2;
        let n = x.len();
        let intervals = n - 1;

        if x_query < x[0] || x_query > x[n - 1] {
            trace!(
                "cubic spline: query {} outside sample range [{}, {}]",
                x_query.to_f64().unwrap_or(f64::NAN),
                x[0].to_f64().unwrap_or(f64::NAN),
                x[n - 1].to_f64().unwrap_or(f64::NAN)
            );
            return T::nan();
        }

        // First interval containing the query, both ends inclusive. The scan
        // leaves i at the last interval when none of the earlier ones match.
        let mut i = intervals;
        for k in 1..intervals {
            if x_query >= x[k - 1] && x_query <= x[k] {
                i = k;
                break;
            }
        }

        let six = T::from(6.0).unwrap();
        let h = x[i] - x[i - 1];

        let curvature = f2[i - 1] / (six * h) * (x[i] - x_query).powi(3)
            + f2[i] / (six * h) * (x_query - x[i - 1]).powi(3);
        let left = (y[i - 1] / h - f2[i - 1] * h / six) * (x[i] - x_query);
        let right = (y[i] / h - f2[i] * h / six) * (x_query - x[i - 1]);

        curvature + left + right
    }

    /// The second-derivative vector, one entry per sample, zero at both
    /// endpoints.
    #[inline]
    pub fn second_derivatives(&self) -> &[T] {
        &self.f2
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

/// Assemble and solve the interior-knot continuity system, then pad the
/// natural boundary zeros onto both ends.
fn second_derivatives<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let n = x.len();
    let intervals = n - 1;
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();

    let mut m = vec![vec![T::zero(); n]; intervals - 1];
    for i in 1..intervals {
        let row = &mut m[i - 1];

        if i > 1 {
            row[i - 1] = x[i] - x[i - 1];
        }
        row[i] = two * (x[i + 1] - x[i - 1]);
        if i < intervals - 1 {
            row[i + 1] = x[i + 1] - x[i];
        }

        let rhs = six / (x[i + 1] - x[i]) * (y[i + 1] - y[i])
            + six / (x[i] - x[i - 1]) * (y[i - 1] - y[i]);
        row[intervals] = rhs;
    }

    // The leading column is all zeros; drop it so the solver sees an
    // (intervals - 1) x intervals augmented system.
    let reduced: Vec<Vec<T>> = m.into_iter().map(|row| row[1..].to_vec()).collect();
    let interior = gauss::solve(reduced);

    let mut f2 = Vec::with_capacity(n);
    f2.push(T::zero());
    f2.extend(interior);
    f2.push(T::zero());
    f2
}

#[cfg(test)]
mod tests {
    use super::CubicSpline;
    use crate::primitives::errors::InterpolateError;

    fn zigzag() -> CubicSpline<f64> {
        CubicSpline::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0]).unwrap()
    }

    #[test]
    fn endpoint_second_derivatives_are_zero() {
        let s = zigzag();
        let f2 = s.second_derivatives();
        assert_eq!(f2.len(), 4);
        assert_eq!(f2[0], 0.0);
        assert_eq!(f2[3], 0.0);
    }

    #[test]
    fn reproduces_samples_at_their_own_abscissas() {
        let s = zigzag();
        for (&xi, &yi) in s.x().iter().zip(s.y().iter()) {
            assert!((s.interpolate(xi) - yi).abs() < 1e-9);
        }
    }

    #[test]
    fn interior_second_derivatives_solve_the_knot_system() {
        // Knot equations for the zigzag: 4 f2[1] + f2[2] = -12 and
        // f2[1] + 4 f2[2] = 12, hence f2 = [0, -4, 4, 0].
        let s = zigzag();
        let f2 = s.second_derivatives();
        assert!((f2[1] + 4.0).abs() < 1e-12);
        assert!((f2[2] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_queries_yield_nan() {
        let s = zigzag();
        assert!(s.interpolate(-0.5).is_nan());
        assert!(s.interpolate(3.5).is_nan());
        // Both endpoints are inside the inclusive range.
        assert!((s.interpolate(0.0) - 0.0).abs() < 1e-12);
        assert!((s.interpolate(3.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn three_point_spline_matches_hand_solution() {
        // Single interior knot: 2 (x2 - x0) f2[1] = rhs.
        let s = CubicSpline::new(&[0.0f64, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        let f2 = s.second_derivatives();
        // rhs = 6(-1) + 6(-1) = -12, diagonal = 4.
        assert!((f2[1] + 3.0).abs() < 1e-12);
        assert!((s.interpolate(0.5) - s.interpolate(1.5)).abs() < 1e-12);
    }

    #[test]
    fn construction_requires_three_points() {
        assert_eq!(
            CubicSpline::new(&[0.0, 1.0], &[0.0, 1.0]).err(),
            Some(InterpolateError::TooFewPoints { got: 2, min: 3 })
        );
    }
}

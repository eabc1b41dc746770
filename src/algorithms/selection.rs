//! Adaptive degree-based window selection.
//!
//! ## Purpose
//!
//! This module centers the one policy both polynomial interpolators share:
//! given a query and a requested degree, choose which contiguous run of
//! samples the polynomial is built over. The interpolators differ only in
//! how a chosen window is evaluated, so the evaluation is injected as a
//! closure.
//!
//! ## Key concepts
//!
//! ### Window placement
//!
//! The query is bracketed between the last sample at or below it and the
//! first sample above it, then extended by `degree / 2` samples on each
//! side. When `degree + 1` is even this single window is used as is.
//!
//! ### Competing candidates
//!
//! When `degree + 1` is odd the window holds one sample too many, and two
//! candidates compete: the outer window and the same window with one sample
//! dropped from each end. Each candidate's truncation error is estimated as
//! the leading unused divided difference times the product of
//! `(query - x_k)` over its retained abscissas, and the candidate with the
//! smaller estimate in magnitude wins. Equal magnitudes select the inner
//! candidate.
//!
//! ## Invariants
//!
//! * Queries outside `[x[0], x[n-1])` never reach a window evaluation; the
//!   upper endpoint itself is rejected.
//! * A candidate that evaluates to NaN concedes to the other candidate.
//!
//! ## Visibility
//!
//! Internal to the algorithms layer; callers validate the degree bound
//! before entering.

use num_traits::Float;
use tracing::trace;

use crate::math::divided::divided_differences;
use crate::primitives::sample::SampleSet;
use crate::primitives::window::Window;

/// Interpolate at `x_query` with a polynomial of the requested degree,
/// evaluating candidate windows through `eval`.
///
/// Returns NaN for queries outside the half-open sample range.
pub(crate) fn adaptive<T, F>(samples: &SampleSet<T>, x_query: T, degree: usize, mut eval: F) -> T
where
    T: Float,
    F: FnMut(Window) -> T,
{
    let x = samples.x();
    let n = samples.len();

    if x_query < x[0] || x_query >= x[n - 1] {
        trace!(
            "degree-based interpolation: query {} outside half-open range [{}, {})",
            x_query.to_f64().unwrap_or(f64::NAN),
            x[0].to_f64().unwrap_or(f64::NAN),
            x[n - 1].to_f64().unwrap_or(f64::NAN)
        );
        return T::nan();
    }

    let (pos_before, pos_after) = samples.bracket(x_query);
    let half = (degree / 2) as isize;
    let outer = Window::new(pos_before as isize - half, pos_after as isize + half);

    // An even point count needs no arbitration.
    if (degree + 1) % 2 == 0 {
        return eval(outer);
    }

    let inner = outer.shrunk();
    if inner.resolve(n).is_none() {
        return eval(outer);
    }

    let outer_value = eval(outer);
    let inner_value = eval(inner);
    if outer_value.is_nan() {
        return inner_value;
    }
    if inner_value.is_nan() {
        return outer_value;
    }

    // Both candidates evaluated cleanly, so the outer window is in bounds.
    let Some((lo, hi)) = outer.resolve(n) else {
        return inner_value;
    };

    let outer_err = truncation_estimate(samples, x_query, lo, hi, DroppedEnd::Last);
    let inner_err = truncation_estimate(samples, x_query, lo, hi - 1, DroppedEnd::First);

    if outer_err.abs() < inner_err.abs() {
        outer_value
    } else {
        inner_value
    }
}

/// Which end of the coefficient table's point run the candidate leaves out.
#[derive(Copy, Clone)]
enum DroppedEnd {
    First,
    Last,
}

/// Leading divided difference over `x[lo..=hi]` times the product of
/// `(x_query - x_k)` over the abscissas the candidate actually keeps.
fn truncation_estimate<T: Float>(
    samples: &SampleSet<T>,
    x_query: T,
    lo: usize,
    hi: usize,
    dropped: DroppedEnd,
) -> T {
    let x = samples.x();
    let y = samples.y();

    let coefficients = divided_differences(&x[lo..=hi], &y[lo..=hi]);
    let leading = coefficients[coefficients.len() - 1];

    let retained = match dropped {
        DroppedEnd::First => (lo + 1)..=hi,
        DroppedEnd::Last => lo..=(hi - 1),
    };

    let mut product = T::one();
    for k in retained {
        product = product * (x_query - x[k]);
    }
    leading * product
}

#[cfg(test)]
mod tests {
    use super::adaptive;
    use crate::primitives::sample::SampleSet;
    use crate::primitives::window::Window;

    fn samples() -> SampleSet<f64> {
        SampleSet::new(
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            &[0.0, 1.0, 4.0, 9.0, 16.0, 25.0],
        )
    }

    #[test]
    fn rejects_queries_at_or_past_last_sample() {
        let s = samples();
        assert!(adaptive(&s, 5.0, 2, |_| 0.0).is_nan());
        assert!(adaptive(&s, 7.5, 2, |_| 0.0).is_nan());
        assert!(adaptive(&s, -0.1, 2, |_| 0.0).is_nan());
    }

    #[test]
    fn odd_degree_uses_single_window() {
        let s = samples();
        let mut seen = Vec::new();
        adaptive(&s, 2.5, 1, |w| {
            seen.push(w);
            0.0
        });
        // Bracket [2, 3] with no extension on either side.
        assert_eq!(seen, vec![Window::new(2, 3)]);
    }

    #[test]
    fn even_degree_offers_outer_and_inner_candidates() {
        let s = samples();
        let mut seen = Vec::new();
        adaptive(&s, 2.5, 2, |w| {
            seen.push(w);
            0.0
        });
        assert_eq!(seen, vec![Window::new(1, 4), Window::new(2, 3)]);
    }

    #[test]
    fn degenerate_inner_window_falls_back_to_outer() {
        let s = samples();
        let mut seen = Vec::new();
        adaptive(&s, 2.5, 0, |w| {
            seen.push(w);
            0.0
        });
        assert_eq!(seen, vec![Window::new(2, 3)]);
    }

    #[test]
    fn nan_candidate_concedes() {
        let s = samples();
        let v = adaptive(&s, 2.5, 2, |w| if w == Window::new(1, 4) { f64::NAN } else { 7.0 });
        assert_eq!(v, 7.0);
    }
}

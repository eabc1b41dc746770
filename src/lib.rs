//! # polyspline — Polynomial and Natural Cubic Spline Interpolation
//!
//! A small numerical toolkit for interpolating tabulated `(x, y)` data with
//! Newton divided-difference polynomials, direct Lagrange-form polynomials,
//! and natural cubic splines, plus the classic least-squares fits built on
//! the same kernels.
//!
//! ## What it does
//!
//! Every interpolator copies its sample data once at construction, derives
//! its coefficients (divided differences or spline second derivatives), and
//! then answers queries without ever mutating itself.
//!
//! **Evaluation modes:**
//! - Full-window interpolation through every sample
//! - Fixed-window interpolation over a caller-chosen index range
//! - Adaptive degree-based interpolation, which brackets the query, extends
//!   the window to the requested degree, and arbitrates between overlapping
//!   candidate windows by their estimated truncation error
//!
//! **Failure philosophy:** out-of-range queries and numerically degenerate
//! data (duplicate abscissas, singular knot systems) return NaN and keep
//! going; only malformed construction input and an out-of-bounds degree
//! parameter are hard errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyspline::prelude::*;
//!
//! let x: [f64; 7] = [0.4, 0.8, 1.3, 1.8, 2.0, 2.2, 2.6];
//! let y: [f64; 7] = [1.452360, 1.995632, 2.719678, 3.273019, 3.359425, 3.316678, 2.669452];
//!
//! let newton = NewtonPolynomial::new(&x, &y)?;
//!
//! // Through every sample, or with a bounded-degree polynomial around the query.
//! let full = newton.interpolate(2.0);
//! let local = newton.interpolate_degree(2.0, 2)?;
//! assert!((full - 3.359425).abs() < 1e-9);
//! assert!(local.is_finite());
//! # Ok::<(), polyspline::InterpolateError>(())
//! ```
//!
//! Natural cubic splines expose their second-derivative vector alongside
//! evaluation:
//!
//! ```rust
//! use polyspline::prelude::*;
//!
//! let spline = CubicSpline::new(&[0.0f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0])?;
//!
//! assert_eq!(spline.second_derivatives()[0], 0.0);
//! assert!((spline.interpolate(1.0) - 1.0).abs() < 1e-9);
//! assert!(spline.interpolate(4.0).is_nan());
//! # Ok::<(), polyspline::InterpolateError>(())
//! ```
//!
//! Least-squares fits share the interpolators' Gaussian solver:
//!
//! ```rust
//! use polyspline::prelude::*;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.1, 3.9, 6.2, 7.8, 10.1];
//!
//! let line = regression::linear(&x, &y)?;
//! assert!(line.r_squared > 0.99);
//! # Ok::<(), polyspline::InterpolateError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 4: Engine (validator, output)
//!   ↓
//! Layer 3: Algorithms (newton, lagrange, spline, selection, regression)
//!   ↓
//! Layer 2: Math (divided, gauss)
//!   ↓
//! Layer 1: Primitives (errors, sample, window)
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. Instances are immutable
//! after construction, so sharing one read-only across threads is safe.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared types.
//
// Contains the error enum, the owned sample storage, and the index window.
pub mod primitives;

// Layer 2: Math - numerical kernels.
//
// Contains divided-difference construction and Gaussian elimination.
pub mod math;

// Layer 3: Algorithms - the interpolators and fits.
//
// Contains the Newton, Lagrange, and spline interpolators, the shared
// window-selection policy, and the least-squares fits.
pub mod algorithms;

// Layer 4: Engine - validation and presentation.
//
// Contains construction-time input checks and string rendering.
pub mod engine;

pub use primitives::errors::{InterpolateError, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyspline prelude.
pub mod prelude {
    pub use crate::algorithms::lagrange::LagrangePolynomial;
    pub use crate::algorithms::newton::NewtonPolynomial;
    pub use crate::algorithms::regression::{
        self, ExponentialFit, LinearFit, PowerFit, QuadraticFit,
    };
    pub use crate::algorithms::spline::CubicSpline;
    pub use crate::engine::output::{newton_form, sample_table};
    pub use crate::math::divided::divided_differences;
    pub use crate::math::gauss;
    pub use crate::primitives::errors::{InterpolateError, Result};
    pub use crate::primitives::window::Window;
}

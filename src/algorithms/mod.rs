//! Layer 3: Algorithms
//!
//! The interpolators and fits themselves.
//!
//! This layer builds the user-visible numerical methods from the math
//! kernels: the two polynomial interpolation forms, the natural cubic
//! spline, the window-selection policy they share, and the least-squares
//! fits.
//!
//! # Module Organization
//!
//! - **newton**: Divided-difference interpolation
//! - **lagrange**: Direct basis-polynomial interpolation
//! - **spline**: Natural cubic spline
//! - **selection**: Shared adaptive degree-based window selection
//! - **regression**: Linear, power, exponential, and quadratic fits
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Engine (validator, output)
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math (divided, gauss)
//!   ↓
//! Layer 1: Primitives (errors, sample, window)
//! ```

/// Newton divided-difference interpolation.
///
/// Provides:
/// - [`newton::NewtonPolynomial`] with fixed-window, full, and adaptive
///   evaluation
pub mod newton;

/// Lagrange-form interpolation.
///
/// Provides:
/// - [`lagrange::LagrangePolynomial`] with the same evaluation surface
pub mod lagrange;

/// Natural cubic spline interpolation.
///
/// Provides:
/// - [`spline::CubicSpline`] built on the shared linear solver
pub mod spline;

/// Adaptive window selection.
///
/// Provides:
/// - The degree-based candidate-window policy shared by both polynomial
///   forms
pub mod selection;

/// Least-squares fitting.
///
/// Provides:
/// - [`regression::linear`], [`regression::power`],
///   [`regression::exponential`], and [`regression::quadratic`]
pub mod regression;

//! Layer 2: Math
//!
//! Low-level numerical routines.
//!
//! This layer contains the numerically sensitive kernels the algorithms are
//! built from. It depends only on the primitives layer.
//!
//! # Module Organization
//!
//! - **divided**: Newton divided-difference table construction
//! - **gauss**: Gaussian elimination over augmented matrices
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Engine (validator, output)
//!   ↓
//! Layer 3: Algorithms (newton, lagrange, spline, selection, regression)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, sample, window)
//! ```

/// Divided-difference construction.
///
/// Provides:
/// - The shared [`divided::divided_differences`] pure function
pub mod divided;

/// Dense linear-system solving.
///
/// Provides:
/// - [`gauss::solve`] over `m x (m+1)` augmented matrices
pub mod gauss;

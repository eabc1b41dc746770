//! Layer 4: Engine
//!
//! Construction-time checks and result presentation.
//!
//! This layer wraps the algorithms with the non-numeric concerns: verifying
//! inputs before any table or system is built, and rendering results for
//! human consumption.
//!
//! # Module Organization
//!
//! - **validator**: Input and parameter validation rules
//! - **output**: Polynomial and sample-table string rendering
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms (newton, lagrange, spline, selection, regression)
//!   ↓
//! Layer 2: Math (divided, gauss)
//!   ↓
//! Layer 1: Primitives (errors, sample, window)
//! ```

/// Validation utilities.
///
/// Provides:
/// - Structural checks for sample arrays (lengths, minimum counts)
/// - The degree bound for adaptive evaluation
pub mod validator;

/// Rendering helpers.
///
/// Provides:
/// - Sign-aware Newton-form polynomial strings
/// - Ruled two-column sample tables
pub mod output;

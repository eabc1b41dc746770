//! Gaussian elimination over an augmented matrix.
//!
//! Solves dense `m x (m+1)` systems for the spline second-derivative vector
//! and the quadratic-regression normal equations. The matrix is consumed by
//! value; the solver keeps no state between calls.

use num_traits::Float;

/// Solve the augmented system `m`, returning the solution vector.
///
/// Each of the `m.len()` rows must carry `m.len() + 1` entries, the last
/// being the right-hand side.
///
/// The row-swap pass compares row `i`'s entry in each later column `j`
/// against the diagonal `m[i][i]` and swaps rows `i` and `j` outright when
/// the former is larger. This matches the elimination's historical output
/// on existing data sets and is kept over a column-max pivot search; see
/// DESIGN.md before changing it.
///
/// A zero pivot after the swap pass divides through and propagates NaN/Inf
/// into the solution instead of failing.
pub fn solve<T: Float>(mut m: Vec<Vec<T>>) -> Vec<T> {
    let n = m.len();
    debug_assert!(n >= 1, "gauss::solve: empty system");
    debug_assert!(
        m.iter().all(|row| row.len() == n + 1),
        "gauss::solve: rows must have n + 1 columns"
    );

    // Row reordering
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            if m[i][j] > m[i][i] {
                m.swap(i, j);
            }
        }
    }

    // Forward elimination over the full row, augmented column included
    for i in 0..n {
        for j in (i + 1)..n {
            let v = m[j][i] / m[i][i];
            for k in 0..=n {
                let updated = m[j][k] - v * m[i][k];
                m[j][k] = updated;
            }
        }
    }

    // Back-substitution
    let mut solution = vec![T::zero(); n];
    for i in (0..n).rev() {
        let mut value = m[i][n];
        for j in (i + 1)..n {
            value = value - m[i][j] * solution[j];
        }
        solution[i] = value / m[i][i];
    }

    solution
}

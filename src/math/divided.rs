//! Newton divided-difference construction.
//!
//! This is the one shared routine behind Newton-form coefficients,
//! Lagrange-form error estimates, and the adaptive window tie-break. It is
//! a pure function of its inputs: rebuilding from the same arrays yields
//! bit-identical output.

use num_traits::Float;

/// Build the divided-difference coefficients for the points `(x[i], y[i])`.
///
/// Fills the triangular table
///
/// ```text
/// f[i][0] = y[i]
/// f[i][j] = (f[i+1][j-1] - f[i][j-1]) / (x[i+j] - x[i])
/// ```
///
/// and returns its first row, so that the interpolating polynomial is
/// `c[0] + c[1](x - x[0]) + c[2](x - x[0])(x - x[1]) + ...`.
///
/// Duplicate abscissas divide by zero and propagate NaN/Inf through the
/// affected coefficients rather than failing.
pub fn divided_differences<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let n = x.len();
    debug_assert_eq!(n, y.len(), "divided_differences: x/y length mismatch");

    if n == 0 {
        return Vec::new();
    }

    let mut table: Vec<Vec<T>> = Vec::with_capacity(n);
    for (i, &yi) in y.iter().enumerate() {
        let mut row = vec![T::zero(); n - i];
        row[0] = yi;
        table.push(row);
    }

    for j in 1..n {
        for i in 0..n - j {
            let d = (table[i + 1][j - 1] - table[i][j - 1]) / (x[i + j] - x[i]);
            table[i][j] = d;
        }
    }

    table.swap_remove(0)
}

#[cfg(test)]
mod tests {
    use super::divided_differences;

    #[test]
    fn first_coefficient_is_leading_ordinate() {
        let c: Vec<f64> = divided_differences(&[1.0, 2.0, 4.0], &[3.0, 5.0, 13.0]);
        assert_eq!(c[0], 3.0);
        // f[x0, x1] = (5 - 3) / (2 - 1)
        assert_eq!(c[1], 2.0);
        // f[x0, x1, x2] = ((13-5)/(4-2) - 2) / (4 - 1)
        assert!((c[2] - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn collinear_data_has_zero_higher_coefficients() {
        let c = divided_differences(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(c, vec![0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn construction_is_bit_reproducible() {
        let x: [f64; 7] = [0.4, 0.8, 1.3, 1.8, 2.0, 2.2, 2.6];
        let y: [f64; 7] = [1.452360, 1.995632, 2.719678, 3.273019, 3.359425, 3.316678, 2.669452];

        let a = divided_differences(&x, &y);
        let b = divided_differences(&x, &y);

        assert_eq!(a.len(), b.len());
        for (ai, bi) in a.iter().zip(&b) {
            assert_eq!(ai.to_bits(), bi.to_bits());
        }
    }

    #[test]
    fn duplicate_abscissas_degrade_to_non_finite() {
        let c = divided_differences(&[1.0, 1.0, 2.0], &[0.0, 1.0, 2.0]);
        assert!(c.iter().any(|v: &f64| !v.is_finite()));
    }
}

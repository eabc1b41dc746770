//! Least-squares fitting over sampled data.
//!
//! ## Purpose
//!
//! This module provides the four classic fits built on top of the core's
//! numeric kernels: a simple linear fit, power and exponential fits that
//! linearize through logarithms, and a quadratic fit whose normal equations
//! go through the shared Gaussian solver.
//!
//! ## Design notes
//!
//! * Each fit returns a result struct carrying the model coefficients and
//!   the usual quality summary (`st`, `sr`, standard deviation, standard
//!   error of the estimate, coefficient of determination).
//! * Non-positive data under a logarithm degrades to NaN in the transformed
//!   fit rather than failing; only structurally malformed input is an
//!   error.
//! * The `Display` implementations render the fitted equation with
//!   sign-aware spacing and a verdict on whether the standard error beats
//!   the standard deviation.

use core::fmt::{self, Display, Formatter};

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::math::gauss;
use crate::primitives::errors::Result;

/// Simple least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Constant term of the fitted line.
    pub intercept: T,

    /// Coefficient of x.
    pub slope: T,

    /// Total sum of squares around the mean of y.
    pub st: T,

    /// Residual sum of squares around the fitted line.
    pub sr: T,

    /// Standard deviation of y.
    pub std_dev: T,

    /// Standard error of the estimate, NaN when fewer than three points.
    pub std_err: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Number of points fitted.
    pub n: usize,
}

/// Power-law fit `y = coefficient * x^exponent`, obtained by a linear fit
/// in log10/log10 space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerFit<T> {
    /// Multiplier of the power law.
    pub coefficient: T,

    /// Exponent of the power law.
    pub exponent: T,

    /// The underlying fit of the transformed data.
    pub linear: LinearFit<T>,
}

/// Exponential fit `y = coefficient * e^(rate * x)`, obtained by a linear
/// fit of `ln(y)` against x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFit<T> {
    /// Multiplier of the exponential.
    pub coefficient: T,

    /// Growth rate in the exponent.
    pub rate: T,

    /// The underlying fit of the transformed data.
    pub linear: LinearFit<T>,
}

/// Quadratic fit `y = a2 * x^2 + a1 * x + a0` from the normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit<T> {
    /// Constant term.
    pub a0: T,

    /// Coefficient of x.
    pub a1: T,

    /// Coefficient of x squared.
    pub a2: T,

    /// Total sum of squares around the mean of y.
    pub st: T,

    /// Residual sum of squares around the fitted parabola.
    pub sr: T,

    /// Standard deviation of y.
    pub std_dev: T,

    /// Standard error of the estimate.
    pub std_err: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Number of points fitted.
    pub n: usize,
}

/// Fit a least-squares line through the points.
///
/// Requires at least two points; the standard error of the estimate needs
/// three and is NaN below that.
pub fn linear<T: Float>(x: &[T], y: &[T]) -> Result<LinearFit<T>> {
    Validator::validate_samples(x, y, 2)?;

    let n = x.len();
    let nf = T::from(n).unwrap();

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_x2 = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_x = sum_x + xi;
        sum_y = sum_y + yi;
        sum_xy = sum_xy + xi * yi;
        sum_x2 = sum_x2 + xi * xi;
    }

    let x_mean = sum_x / nf;
    let y_mean = sum_y / nf;

    let slope = (sum_xy - y_mean * sum_x) / (sum_x2 - x_mean * sum_x);
    let intercept = y_mean - slope * x_mean;

    let mut st = T::zero();
    let mut sr = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        st = st + (yi - y_mean).powi(2);
        sr = sr + (yi - (slope * xi + intercept)).powi(2);
    }

    let std_dev = (st / T::from(n - 1).unwrap()).sqrt();
    let std_err = if n > 2 {
        (sr / T::from(n - 2).unwrap()).sqrt()
    } else {
        T::nan()
    };

    Ok(LinearFit {
        intercept,
        slope,
        st,
        sr,
        std_dev,
        std_err,
        r_squared: (st - sr) / st,
        n,
    })
}

/// Fit a power law by linearizing both axes with log10.
///
/// Non-positive values produce NaN coefficients through the logarithm.
pub fn power<T: Float>(x: &[T], y: &[T]) -> Result<PowerFit<T>> {
    let ten = T::from(10.0).unwrap();

    let lx: Vec<T> = x.iter().map(|v| v.log10()).collect();
    let ly: Vec<T> = y.iter().map(|v| v.log10()).collect();
    let fit = linear(&lx, &ly)?;

    Ok(PowerFit {
        coefficient: ten.powf(fit.intercept),
        exponent: fit.slope,
        linear: fit,
    })
}

/// Fit an exponential by linearizing the ordinates with the natural log.
///
/// Non-positive ordinates produce NaN coefficients through the logarithm.
pub fn exponential<T: Float>(x: &[T], y: &[T]) -> Result<ExponentialFit<T>> {
    let ly: Vec<T> = y.iter().map(|v| v.ln()).collect();
    let fit = linear(x, &ly)?;

    Ok(ExponentialFit {
        coefficient: fit.intercept.exp(),
        rate: fit.slope,
        linear: fit,
    })
}

/// Fit a quadratic by solving the 3x3 normal equations with the shared
/// Gaussian solver.
///
/// Requires at least four points.
pub fn quadratic<T: Float>(x: &[T], y: &[T]) -> Result<QuadraticFit<T>> {
    Validator::validate_samples(x, y, 4)?;

    let n = x.len();
    let nf = T::from(n).unwrap();

    let mut sum_x = T::zero();
    let mut sum_x2 = T::zero();
    let mut sum_x3 = T::zero();
    let mut sum_x4 = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_x2y = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let x2 = xi * xi;
        sum_x = sum_x + xi;
        sum_x2 = sum_x2 + x2;
        sum_x3 = sum_x3 + x2 * xi;
        sum_x4 = sum_x4 + x2 * x2;
        sum_y = sum_y + yi;
        sum_xy = sum_xy + xi * yi;
        sum_x2y = sum_x2y + x2 * yi;
    }

    let system = vec![
        vec![nf, sum_x, sum_x2, sum_y],
        vec![sum_x, sum_x2, sum_x3, sum_xy],
        vec![sum_x2, sum_x3, sum_x4, sum_x2y],
    ];
    let coef = gauss::solve(system);
    let (a0, a1, a2) = (coef[0], coef[1], coef[2]);

    let y_mean = sum_y / nf;
    let mut st = T::zero();
    let mut sr = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        st = st + (yi - y_mean).powi(2);
        sr = sr + (yi - a0 - a1 * xi - a2 * xi * xi).powi(2);
    }

    Ok(QuadraticFit {
        a0,
        a1,
        a2,
        st,
        sr,
        std_dev: (st / T::from(n - 1).unwrap()).sqrt(),
        std_err: (sr / T::from(n - 3).unwrap()).sqrt(),
        r_squared: (st - sr) / st,
        n,
    })
}

fn verdict<T: Float>(std_err: T, std_dev: T) -> &'static str {
    if std_err < std_dev {
        "the approximation is considered acceptable"
    } else {
        "the approximation is NOT considered acceptable"
    }
}

fn signed<T: Float>(value: T) -> (char, T) {
    if value < T::zero() {
        ('-', value.abs())
    } else {
        ('+', value)
    }
}

impl<T: Float + Display> Display for LinearFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (sign, magnitude) = signed(self.intercept);
        writeln!(f, "regression line: y = {} * x {} {}", self.slope, sign, magnitude)?;
        writeln!(f, "standard deviation: {}", self.std_dev)?;
        writeln!(f, "standard error of the estimate: {}", self.std_err)?;
        writeln!(f, "{}", verdict(self.std_err, self.std_dev))?;
        write!(f, "coefficient of determination: {}", self.r_squared)
    }
}

impl<T: Float + Display> Display for PowerFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "regression curve: y = {} * x^{}", self.coefficient, self.exponent)?;
        writeln!(f, "standard deviation: {}", self.linear.std_dev)?;
        writeln!(f, "standard error of the estimate: {}", self.linear.std_err)?;
        writeln!(f, "{}", verdict(self.linear.std_err, self.linear.std_dev))?;
        write!(f, "coefficient of determination: {}", self.linear.r_squared)
    }
}

impl<T: Float + Display> Display for ExponentialFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "regression curve: y = {} * e^({} * x)", self.coefficient, self.rate)?;
        writeln!(f, "standard deviation: {}", self.linear.std_dev)?;
        writeln!(f, "standard error of the estimate: {}", self.linear.std_err)?;
        writeln!(f, "{}", verdict(self.linear.std_err, self.linear.std_dev))?;
        write!(f, "coefficient of determination: {}", self.linear.r_squared)
    }
}

impl<T: Float + Display> Display for QuadraticFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (s1, m1) = signed(self.a1);
        let (s0, m0) = signed(self.a0);
        writeln!(
            f,
            "regression polynomial: y = {} * x^2 {} {} * x {} {}",
            self.a2, s1, m1, s0, m0
        )?;
        writeln!(f, "standard deviation: {}", self.std_dev)?;
        writeln!(f, "standard error of the estimate: {}", self.std_err)?;
        writeln!(f, "{}", verdict(self.std_err, self.std_dev))?;
        write!(f, "coefficient of determination: {}", self.r_squared)
    }
}

#[cfg(test)]
mod tests {
    use super::{exponential, linear, power, quadratic};

    #[test]
    fn exact_line_is_recovered() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|xi| 2.5 * xi - 1.0).collect();

        let fit = linear(&x, &y).unwrap();
        assert!((fit.slope - 2.5).abs() < 1e-12);
        assert!((fit.intercept + 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!(fit.std_err < 1e-9);
    }

    #[test]
    fn two_point_fit_has_nan_standard_error() {
        let fit = linear(&[0.0f64, 1.0], &[1.0, 3.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!(fit.std_err.is_nan());
    }

    #[test]
    fn exact_parabola_is_recovered_through_the_solver() {
        let x = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|xi| 1.5 * xi * xi - 2.0 * xi + 0.5).collect();

        let fit = quadratic(&x, &y).unwrap();
        assert!((fit.a2 - 1.5).abs() < 1e-9);
        assert!((fit.a1 + 2.0).abs() < 1e-9);
        assert!((fit.a0 - 0.5).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn power_law_is_recovered_on_linearized_axes() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|xi: &f64| 3.0 * xi.powf(1.7)).collect();

        let fit = power(&x, &y).unwrap();
        assert!((fit.coefficient - 3.0).abs() < 1e-9);
        assert!((fit.exponent - 1.7).abs() < 1e-9);
    }

    #[test]
    fn exponential_growth_is_recovered() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|xi: &f64| 0.5 * (0.8 * xi).exp()).collect();

        let fit = exponential(&x, &y).unwrap();
        assert!((fit.coefficient - 0.5).abs() < 1e-9);
        assert!((fit.rate - 0.8).abs() < 1e-9);
    }

    #[test]
    fn negative_data_under_a_log_degrades_to_nan() {
        let fit = power(&[1.0f64, 2.0, 3.0], &[1.0, -4.0, 9.0]).unwrap();
        assert!(fit.coefficient.is_nan() || fit.exponent.is_nan());
    }

    #[test]
    fn quadratic_requires_four_points() {
        assert!(quadratic(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).is_err());
    }

    #[test]
    fn display_renders_signed_terms() {
        let fit = linear(&[1.0, 2.0, 3.0, 4.0], &[1.0, 0.0, -1.0, -2.0]).unwrap();
        let text = fit.to_string();
        assert!(text.contains("y = -1 * x + 2"));
        assert!(text.contains("coefficient of determination"));
    }
}

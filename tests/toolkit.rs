//! Cross-component behavior of the interpolation toolkit.

use polyspline::prelude::*;

const X: [f64; 7] = [0.4, 0.8, 1.3, 1.8, 2.0, 2.2, 2.6];
const Y: [f64; 7] = [
    1.452360, 1.995632, 2.719678, 3.273019, 3.359425, 3.316678, 2.669452,
];

#[test]
fn newton_and_lagrange_agree_at_every_sample() {
    let newton = NewtonPolynomial::new(&X, &Y).unwrap();
    let lagrange = LagrangePolynomial::new(&X, &Y).unwrap();

    for (&xi, &yi) in X.iter().zip(Y.iter()) {
        let n = newton.interpolate(xi);
        let l = lagrange.interpolate(xi);
        assert!((n - yi).abs() < 1e-9, "newton at {xi}: {n} vs {yi}");
        assert!((l - yi).abs() < 1e-9, "lagrange at {xi}: {l} vs {yi}");
        assert!((n - l).abs() < 1e-9, "forms disagree at {xi}: {n} vs {l}");
    }
}

#[test]
fn newton_and_lagrange_agree_between_samples() {
    let newton = NewtonPolynomial::new(&X, &Y).unwrap();
    let lagrange = LagrangePolynomial::new(&X, &Y).unwrap();

    // Both full-window forms evaluate the same unique degree-6 polynomial.
    for q in [0.5, 1.0, 1.55, 2.1, 2.55] {
        let n = newton.interpolate(q);
        let l = lagrange.interpolate(q);
        assert!((n - l).abs() < 1e-9, "forms disagree at {q}: {n} vs {l}");
    }
}

#[test]
fn collinear_data_yields_the_line_for_every_method() {
    let x: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
    let y: [f64; 4] = [0.0, 1.0, 2.0, 3.0];

    let newton = NewtonPolynomial::new(&x, &y).unwrap();
    let lagrange = LagrangePolynomial::new(&x, &y).unwrap();

    assert!((newton.interpolate(1.5) - 1.5).abs() < 1e-12);
    assert!((lagrange.interpolate(1.5) - 1.5).abs() < 1e-12);

    for window in [Window::new(0, 3), Window::new(0, 2), Window::new(1, 3)] {
        assert!((newton.interpolate_within(1.5, window) - 1.5).abs() < 1e-12);
        assert!((lagrange.interpolate_within(1.5, window) - 1.5).abs() < 1e-12);
    }

    for degree in 1..4 {
        assert!((newton.interpolate_degree(1.5, degree).unwrap() - 1.5).abs() < 1e-12);
        assert!((lagrange.interpolate_degree(1.5, degree).unwrap() - 1.5).abs() < 1e-12);
    }
}

#[test]
fn solver_handles_the_reference_system() {
    // 2a + b = 5, a + 3b = 10
    let solution: Vec<f64> = gauss::solve(vec![vec![2.0, 1.0, 5.0], vec![1.0, 3.0, 10.0]]);
    assert!((solution[0] - 1.0).abs() < 1e-12);
    assert!((solution[1] - 3.0).abs() < 1e-12);
}

#[test]
fn spline_keeps_natural_boundaries_and_passes_through_the_knots() {
    let x: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
    let y: [f64; 4] = [0.0, 1.0, 0.0, 1.0];
    let spline = CubicSpline::new(&x, &y).unwrap();

    let f2 = spline.second_derivatives();
    assert_eq!(f2[0], 0.0);
    assert_eq!(f2[3], 0.0);

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        assert!((spline.interpolate(xi) - yi).abs() < 1e-9);
    }
}

#[test]
fn degree_based_paths_reject_the_upper_endpoint() {
    let newton = NewtonPolynomial::new(&X, &Y).unwrap();
    let lagrange = LagrangePolynomial::new(&X, &Y).unwrap();

    // The variable-degree range check is right-open; the plain full-window
    // evaluation still accepts the endpoint.
    assert!(newton.interpolate_degree(2.6, 2).unwrap().is_nan());
    assert!(lagrange.interpolate_degree(2.6, 2).unwrap().is_nan());
    assert!(newton.interpolate(2.6).is_finite());
}

#[test]
fn invalid_degrees_fail_instead_of_clamping() {
    let newton = NewtonPolynomial::new(&X, &Y).unwrap();
    assert_eq!(
        newton.interpolate_degree(1.5, X.len()),
        Err(InterpolateError::InvalidDegree { got: 7, n: 7 })
    );
}

#[test]
fn divided_difference_construction_is_pure() {
    let a = divided_differences(&X, &Y);
    let b = divided_differences(&X, &Y);
    assert!(a
        .iter()
        .zip(b.iter())
        .all(|(u, v)| u.to_bits() == v.to_bits()));
}

#[test]
fn rendered_polynomial_lists_every_expansion_point() {
    let newton = NewtonPolynomial::new(&X, &Y).unwrap();
    let rendered = newton.polynomial();

    // One factor chain per coefficient past the constant term.
    assert_eq!(rendered.matches("(x - 0.4)").count(), X.len() - 1);
    assert!(rendered.contains("(x - 2.2)"));
    assert!(!rendered.contains("(x - 2.6)"));
}

#[test]
fn quadratic_regression_reuses_the_solver_consistently() {
    // A parabola sampled exactly: the fit must reproduce it and the spline
    // must pass through the same points.
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|xi| 2.0 * xi * xi - 3.0 * xi + 1.0).collect();

    let fit = regression::quadratic(&x, &y).unwrap();
    assert!((fit.a2 - 2.0).abs() < 1e-9);
    assert!((fit.a1 + 3.0).abs() < 1e-9);
    assert!((fit.a0 - 1.0).abs() < 1e-9);

    let spline = CubicSpline::new(&x, &y).unwrap();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        assert!((spline.interpolate(xi) - yi).abs() < 1e-9);
    }
}

#[test]
fn error_estimates_match_between_forms_on_a_sample() {
    let newton = NewtonPolynomial::new(&X, &Y).unwrap();
    let lagrange = LagrangePolynomial::new(&X, &Y).unwrap();

    // On a sample both full-window interpolations reproduce the ordinate,
    // so both estimated errors vanish.
    assert!(newton.error_estimate(1.8).abs() < 1e-9);
    assert!(lagrange.error_estimate(1.8).abs() < 1e-9);
}

#[test]
fn sample_table_renders_both_columns() {
    let table = sample_table(&X, &Y, "Temperature(K)", "B (cm3/mol)");
    assert!(table.contains("Temperature(K)"));
    assert!(table.contains("B (cm3/mol)"));
    assert!(table.contains("0.4"));
    assert!(table.contains("2.669452"));
}

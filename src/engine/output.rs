//! Human-readable renderings of polynomials and sample tables.
//!
//! Stateless string builders consumed by callers that present results; the
//! library itself never prints. Both functions are pure: same input, same
//! string.

use core::fmt::Display;

use num_traits::Float;

/// Render Newton-form coefficients as `b0 + |b1| (x - x0) + ...` with
/// sign-aware separators.
///
/// `x` supplies the expansion points; only the first `coefficients.len() - 1`
/// abscissas are referenced. An empty coefficient slice renders as an empty
/// string.
pub fn newton_form<T: Float + Display>(coefficients: &[T], x: &[T]) -> String {
    let Some(&first) = coefficients.first() else {
        return String::new();
    };

    let mut out = format!("{first}");
    for (i, &c) in coefficients.iter().enumerate().skip(1) {
        out.push_str(if c < T::zero() { " - " } else { " + " });
        out.push_str(&format!("{}", c.abs()));
        for &xj in &x[..i] {
            out.push_str(&format!(" (x - {xj})"));
        }
    }
    out
}

/// Render a two-column sample table with ruled borders.
///
/// Empty labels fall back to `X` and `Y`. Column widths follow the label
/// lengths; values are right-aligned.
pub fn sample_table<T: Float + Display>(x: &[T], y: &[T], x_label: &str, y_label: &str) -> String {
    let x_label = if x_label.is_empty() { "X" } else { x_label };
    let y_label = if y_label.is_empty() { "Y" } else { y_label };

    let x_width = x_label.len() + 4;
    let y_width = y_label.len() + 4;
    let rule = "=".repeat(x_width + y_width + 2);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    let y_head = y_width / 4;
    out.push_str(&format!("  {x_label:<x_width$}{y_label:>y_head$}\n"));
    out.push_str(&rule);
    out.push('\n');
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        out.push_str(&format!("{xi:>x_width$}{yi:>y_width$}\n"));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

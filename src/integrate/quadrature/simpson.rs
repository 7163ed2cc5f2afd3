//! Simpson's rule for numerical integration.
//!
//! Simpson's rule uses parabolic approximation over pairs of subintervals,
//! achieving O(h⁴) accuracy for smooth functions and exact results for
//! polynomials up to degree 3.

use super::partition::validate_partition;
use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Options for Simpson's rule.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpsonOptions {
    /// Relative tolerance on each subinterval width against the mean
    /// width `(x_n - x_0) / n` (default: 1e-9)
    pub spacing_rtol: f64,
}

impl Default for SimpsonOptions {
    fn default() -> Self {
        Self { spacing_rtol: 1e-9 }
    }
}

/// Integrate `f` over `x_vals` using the composite Simpson's 1/3 rule.
///
/// Equivalent to [`simpson_rule_with_options`] with [`SimpsonOptions::default`].
///
/// # Example
///
/// ```
/// use baryquad::integrate::simpson_rule;
///
/// // Integrate y = x^2 from 0 to 1 (exact for cubics)
/// let n = 11;
/// let x: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
///
/// let result = simpson_rule(&x, |x| x * x).unwrap();
/// assert!((result - 1.0/3.0).abs() < 1e-12);
/// ```
pub fn simpson_rule<F>(x_vals: &[f64], f: F) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    simpson_rule_with_options(x_vals, f, &SimpsonOptions::default())
}

/// Integrate `f` over `x_vals` using the composite Simpson's 1/3 rule.
///
/// The samples must be uniformly spaced with an even number of subintervals
/// (an odd number of points). With `n` intervals and `dx = (x_n - x_0) / n`:
///
/// ```text
/// (dx/3) * [f(x_0) + 4*Σ_odd f(x_i) + 2*Σ_even f(x_i) + f(x_n)]
/// ```
///
/// There is no fallback for an odd interval count; dropping or re-weighting
/// the last interval would integrate over a different domain than requested.
///
/// # Errors
///
/// Checked in this order:
/// - [`IntegrateError::InvalidParameter`] if `spacing_rtol` is negative or not finite
/// - [`IntegrateError::InvalidPartition`] if `x_vals` has fewer than 2 points,
///   a non-finite value, is not strictly increasing, or has an interval wider
///   than `f64::MAX`
/// - [`IntegrateError::OddIntervalCount`] if `x_vals.len() - 1` is odd
/// - [`IntegrateError::NonUniformSpacing`] if any subinterval width differs
///   from `dx` by more than `spacing_rtol * dx`
pub fn simpson_rule_with_options<F>(
    x_vals: &[f64],
    f: F,
    options: &SimpsonOptions,
) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    let rtol = options.spacing_rtol;
    if !rtol.is_finite() || rtol < 0.0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "spacing_rtol".to_string(),
            message: format!("must be finite and non-negative (got {})", rtol),
        });
    }

    validate_partition(x_vals, "simpson_rule")?;

    let n = x_vals.len();
    let intervals = n - 1;
    if !intervals.is_multiple_of(2) {
        tracing::debug!(intervals, "simpson_rule: odd interval count");
        return Err(IntegrateError::OddIntervalCount { intervals });
    }

    let m = intervals as f64;
    let span = x_vals[n - 1] - x_vals[0];
    let dx = if span.is_finite() {
        span / m
    } else {
        x_vals[n - 1] / m - x_vals[0] / m
    };
    for (i, w) in x_vals.windows(2).enumerate() {
        let width = w[1] - w[0];
        if (width - dx).abs() > rtol * dx {
            tracing::debug!(index = i, width, dx, "simpson_rule: non-uniform spacing");
            return Err(IntegrateError::NonUniformSpacing {
                index: i,
                expected: dx,
                actual: width,
            });
        }
    }

    // (dx/3) * (y0 + 4*y1 + 2*y2 + 4*y3 + ... + yn)
    let mut sum = f(x_vals[0]) + f(x_vals[n - 1]);
    for (i, &xi) in x_vals.iter().enumerate().take(n - 1).skip(1) {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(xi);
    }

    let integral = dx * sum / 3.0;
    tracing::trace!(points = n, integral, "simpson_rule");
    Ok(integral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn grid(a: f64, b: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| a + (b - a) * i as f64 / (n - 1) as f64)
            .collect()
    }

    #[test]
    fn test_simpson_constant() {
        // Integral of constant = constant * width
        let x = grid(0.0, 4.0, 5);

        let result = simpson_rule(&x, |_| 3.0).unwrap();
        assert_relative_eq!(result, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_three_points() {
        let x = [0.0, 1.0, 2.0];
        assert_relative_eq!(simpson_rule(&x, |x| x).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            simpson_rule(&x, |x| x * x).unwrap(),
            8.0 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_simpson_cubic() {
        // Integral of y = x^3 from 0 to 1 = 1/4 (exact for polynomials up to degree 3)
        let x = grid(0.0, 1.0, 5);

        let result = simpson_rule(&x, |x| x * x * x).unwrap();
        assert_relative_eq!(result, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_sin() {
        // Integral of sin(x) from 0 to pi = 2
        // Use 101 points = 100 intervals (even)
        let x = grid(0.0, PI, 101);

        let result = simpson_rule(&x, f64::sin).unwrap();
        assert!(
            (result - 2.0).abs() < 1e-7,
            "result = {}, expected 2.0",
            result
        );
    }

    #[test]
    fn test_simpson_half_steps() {
        // Two intervals of width 0.5 is an even count
        let result = simpson_rule(&[0.0, 0.5, 1.0], |x| x * x).unwrap();
        assert_relative_eq!(result, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_odd_intervals() {
        // 4 points = 3 intervals
        let err = simpson_rule(&[0.0, 1.0, 2.0, 3.0], |x| x * x).unwrap_err();
        assert_eq!(err, IntegrateError::OddIntervalCount { intervals: 3 });

        // 2 points = 1 interval
        let err = simpson_rule(&[0.0, 1.0], |x| x).unwrap_err();
        assert_eq!(err, IntegrateError::OddIntervalCount { intervals: 1 });
    }

    #[test]
    fn test_simpson_non_uniform() {
        // gap of 1, then gap of 2
        let err = simpson_rule(&[0.0, 1.0, 3.0], |x| x).unwrap_err();
        assert!(matches!(
            err,
            IntegrateError::NonUniformSpacing { index: 0, .. }
        ));

        let x = [0.0, 1.0, 2.0, 3.5, 4.0];
        let err = simpson_rule(&x, |x| x).unwrap_err();
        assert!(matches!(
            err,
            IntegrateError::NonUniformSpacing { index: 2, .. }
        ));
    }

    #[test]
    fn test_simpson_span_overflow() {
        // x_n - x_0 exceeds f64::MAX; spacing is still compared against a finite dx
        let x = [-1e308, 0.0, 1.7e308];
        for c in [0.0, 1.0] {
            assert!(matches!(
                simpson_rule(&x, |_| c),
                Err(IntegrateError::NonUniformSpacing { index: 0, .. })
            ));
        }

        let x = [-1e308, 0.0, 1e308];
        let result = simpson_rule(&x, |x| x).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_simpson_spacing_tolerance() {
        let x = [0.0, 1.0 + 1e-6, 2.0];
        assert!(simpson_rule(&x, |x| x).is_err());

        let loose = SimpsonOptions { spacing_rtol: 1e-3 };
        let result = simpson_rule_with_options(&x, |x| x, &loose).unwrap();
        assert_relative_eq!(result, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_simpson_invalid_options() {
        let x = [0.0, 1.0, 2.0];
        for rtol in [-1e-9, f64::NAN, f64::INFINITY] {
            let opts = SimpsonOptions { spacing_rtol: rtol };
            assert!(matches!(
                simpson_rule_with_options(&x, |x| x, &opts),
                Err(IntegrateError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_simpson_partition_checked_first() {
        // Decreasing with an odd interval count reports the partition problem
        assert!(matches!(
            simpson_rule(&[3.0, 2.0, 1.0, 0.0], |x| x),
            Err(IntegrateError::InvalidPartition { .. })
        ));
        assert!(matches!(
            simpson_rule(&[1.0], |x| x),
            Err(IntegrateError::InvalidPartition { .. })
        ));
    }
}

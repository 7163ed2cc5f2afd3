//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas.
//! It has O(h²) accuracy for smooth functions and is exact for linear ones.

use super::partition::validate_partition;
use crate::integrate::error::IntegrateResult;

/// Integrate `f` over the partition `x_vals` using the composite trapezoidal rule.
///
/// Computes `Σ (f(x_i) + f(x_{i+1})) * (x_{i+1} - x_i) / 2`. Spacing may be
/// non-uniform. Each sample is evaluated once.
///
/// # Errors
///
/// Returns [`IntegrateError::InvalidPartition`](crate::integrate::IntegrateError::InvalidPartition)
/// if `x_vals` has fewer than 2 points, contains a non-finite value, is not
/// strictly increasing, or has an interval wider than `f64::MAX`.
///
/// # Example
///
/// ```
/// use baryquad::integrate::trapezoid_rule;
///
/// // Integrate y = x^2 from 0 to 1 using 101 points
/// let n = 101;
/// let x: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
///
/// let result = trapezoid_rule(&x, |x| x * x).unwrap();
/// // Exact value is 1/3 ≈ 0.333...
/// assert!((result - 1.0/3.0).abs() < 0.001);
/// ```
pub fn trapezoid_rule<F>(x_vals: &[f64], f: F) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    validate_partition(x_vals, "trapezoid_rule")?;

    let mut integral = 0.0;
    let mut y_prev = f(x_vals[0]);
    for w in x_vals.windows(2) {
        let y_next = f(w[1]);
        integral += 0.5 * (w[1] - w[0]) * (y_prev + y_next);
        y_prev = y_next;
    }

    tracing::trace!(points = x_vals.len(), integral, "trapezoid_rule");
    Ok(integral)
}

/// Compute the cumulative integral using the trapezoidal rule.
///
/// Returns the running integral at each sample, starting from 0.
///
/// # Returns
///
/// A vector where element `i` is the integral from `x_vals[0]` to `x_vals[i]`.
/// The last element equals [`trapezoid_rule`] over the same partition.
///
/// # Errors
///
/// Same partition requirements as [`trapezoid_rule`].
///
/// # Example
///
/// ```
/// use baryquad::integrate::cumulative_trapezoid;
///
/// // Cumulative integral of y = 2x (antiderivative is x^2)
/// let x = vec![0.0, 1.0, 2.0, 3.0];
///
/// let result = cumulative_trapezoid(&x, |x| 2.0 * x).unwrap();
/// assert_eq!(result, vec![0.0, 1.0, 4.0, 9.0]);
/// ```
pub fn cumulative_trapezoid<F>(x_vals: &[f64], f: F) -> IntegrateResult<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    validate_partition(x_vals, "cumulative_trapezoid")?;

    let mut result = Vec::with_capacity(x_vals.len());
    result.push(0.0);

    let mut cumsum = 0.0;
    let mut y_prev = f(x_vals[0]);
    for w in x_vals.windows(2) {
        let y_next = f(w[1]);
        cumsum += 0.5 * (w[1] - w[0]) * (y_prev + y_next);
        result.push(cumsum);
        y_prev = y_next;
    }

    tracing::trace!(points = x_vals.len(), integral = cumsum, "cumulative_trapezoid");
    Ok(result)
}

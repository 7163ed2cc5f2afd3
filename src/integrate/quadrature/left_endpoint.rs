//! Left-endpoint (rectangle) rule for numerical integration.
//!
//! Each subinterval contributes `f(x_i) * (x_{i+1} - x_i)`. The rule is exact
//! only for constants and has O(h) accuracy for smooth functions.

use super::partition::validate_partition;
use crate::integrate::error::IntegrateResult;

/// Integrate `f` over the partition `x_vals` using left endpoints.
///
/// The partition may be non-uniform. `f` is called exactly once per
/// subinterval, at its left endpoint; the final sample is never evaluated.
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
/// use baryquad::integrate::left_endpoint_rule;
///
/// // f(x) = x on [0, 2] sampled at 0, 1, 2: 0*1 + 1*1
/// let result = left_endpoint_rule(&[0.0, 1.0, 2.0], |x| x).unwrap();
/// assert_eq!(result, 1.0);
/// ```
pub fn left_endpoint_rule<F>(x_vals: &[f64], f: F) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    validate_partition(x_vals, "left_endpoint_rule")?;

    let integral: f64 = x_vals.windows(2).map(|w| f(w[0]) * (w[1] - w[0])).sum();

    tracing::trace!(points = x_vals.len(), integral, "left_endpoint_rule");
    Ok(integral)
}

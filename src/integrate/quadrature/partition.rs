//! Sample partitions of the integration domain.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Check that `x` is a usable partition: at least two finite samples in
/// strictly increasing order, with every subinterval width finite.
///
/// `routine` prefixes the error context so callers can tell which rule
/// rejected the input.
pub(super) fn validate_partition(x: &[f64], routine: &str) -> IntegrateResult<()> {
    if x.len() < 2 {
        return Err(reject(format!(
            "{}: need at least 2 points (got {})",
            routine,
            x.len()
        )));
    }

    if let Some(i) = x.iter().position(|xi| !xi.is_finite()) {
        return Err(reject(format!(
            "{}: sample {} is not finite ({})",
            routine, i, x[i]
        )));
    }

    if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(reject(format!(
            "{}: samples must be strictly increasing (x[{}] = {} then x[{}] = {})",
            routine,
            i,
            x[i],
            i + 1,
            x[i + 1]
        )));
    }

    if let Some(i) = x.windows(2).position(|w| !(w[1] - w[0]).is_finite()) {
        return Err(reject(format!(
            "{}: width of interval {} overflows ({} to {})",
            routine,
            i,
            x[i],
            x[i + 1]
        )));
    }

    Ok(())
}

fn reject(context: String) -> IntegrateError {
    tracing::debug!(%context, "rejecting partition");
    IntegrateError::InvalidPartition { context }
}

/// Generate `intervals + 1` equally spaced samples covering `[a, b]`.
///
/// Both endpoints are reproduced exactly, and bounds whose difference
/// exceeds `f64::MAX` are still split without overflow. Unless the bounds are
/// huge relative to the spacing, the result passes the spacing check of
/// [`simpson_rule`](super::simpson_rule) when `intervals` is even.
///
/// # Errors
///
/// Returns [`IntegrateError::InvalidParameter`] if `intervals` is zero, either
/// bound is not finite, `a >= b`, or the samples would not form a valid
/// partition (spacing below the resolution of `f64` near the bounds, or a
/// single interval wider than `f64::MAX`).
///
/// # Example
///
/// ```
/// use baryquad::integrate::uniform_partition;
///
/// let x = uniform_partition(0.0, 2.0, 4).unwrap();
/// assert_eq!(x, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
pub fn uniform_partition(a: f64, b: f64, intervals: usize) -> IntegrateResult<Vec<f64>> {
    if intervals == 0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "intervals".to_string(),
            message: "need at least 1 interval".to_string(),
        });
    }

    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(IntegrateError::InvalidParameter {
            parameter: "a, b".to_string(),
            message: format!("bounds [{}, {}] must be finite with a < b", a, b),
        });
    }

    let span = b - a;
    let n = intervals as f64;
    let mut x: Vec<f64> = (0..intervals)
        .map(|i| {
            let t = i as f64 / n;
            if span.is_finite() {
                a + span * t
            } else {
                a - a * t + b * t
            }
        })
        .collect();
    x.push(b);

    validate_partition(&x, "uniform_partition").map_err(|err| {
        IntegrateError::InvalidParameter {
            parameter: "intervals".to_string(),
            message: format!("{} intervals over [{}, {}]: {}", intervals, a, b, err),
        }
    })?;

    Ok(x)
}

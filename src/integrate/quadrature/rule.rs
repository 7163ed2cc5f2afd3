//! Runtime selection of a quadrature rule.

use std::fmt;
use std::str::FromStr;

use super::{left_endpoint_rule, simpson_rule, trapezoid_rule};
use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Quadrature rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadratureRule {
    /// Rectangle rule using left endpoints.
    LeftEndpoint,
    /// Composite trapezoidal rule.
    Trapezoid,
    /// Composite Simpson's 1/3 rule (uniform spacing, even interval count).
    Simpson,
}

impl QuadratureRule {
    /// All rules, in increasing order of accuracy.
    pub const ALL: [QuadratureRule; 3] = [Self::LeftEndpoint, Self::Trapezoid, Self::Simpson];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftEndpoint => "left_endpoint",
            Self::Trapezoid => "trapezoid",
            Self::Simpson => "simpson",
        }
    }

    /// Integrate `f` over `x_vals` with this rule.
    ///
    /// Errors are those of the underlying rule function.
    pub fn integrate<F>(self, x_vals: &[f64], f: F) -> IntegrateResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::LeftEndpoint => left_endpoint_rule(x_vals, f),
            Self::Trapezoid => trapezoid_rule(x_vals, f),
            Self::Simpson => simpson_rule(x_vals, f),
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuadratureRule {
    type Err = IntegrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left_endpoint" | "left" => Ok(Self::LeftEndpoint),
            "trapezoid" | "trapezoidal" => Ok(Self::Trapezoid),
            "simpson" => Ok(Self::Simpson),
            other => Err(IntegrateError::InvalidParameter {
                parameter: "rule".to_string(),
                message: format!("unknown quadrature rule '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rule_dispatch() {
        let x = [0.0, 1.0, 2.0];
        let expected = [1.0, 3.0, 8.0 / 3.0];
        for (rule, want) in QuadratureRule::ALL.into_iter().zip(expected) {
            let got = rule.integrate(&x, |x| x * x).unwrap();
            assert_relative_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rule_errors_pass_through() {
        let x = [0.0, 1.0, 2.0, 3.0];
        assert!(QuadratureRule::Trapezoid.integrate(&x, |x| x).is_ok());
        assert!(matches!(
            QuadratureRule::Simpson.integrate(&x, |x| x),
            Err(IntegrateError::OddIntervalCount { intervals: 3 })
        ));
    }

    #[test]
    fn test_rule_names() {
        for rule in QuadratureRule::ALL {
            assert_eq!(rule.to_string().parse::<QuadratureRule>().unwrap(), rule);
        }
        assert_eq!(
            "Trapezoidal".parse::<QuadratureRule>().unwrap(),
            QuadratureRule::Trapezoid
        );
        assert_eq!(
            " LEFT ".parse::<QuadratureRule>().unwrap(),
            QuadratureRule::LeftEndpoint
        );
        assert!("midpoint".parse::<QuadratureRule>().is_err());
    }
}

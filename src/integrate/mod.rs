//! Numerical integration of sampled functions.
//!
//! The rules here approximate `∫ f(x) dx` over `[x_vals[0], x_vals[n-1]]`
//! from evaluations of a caller-supplied `f` at the given samples.
//!
//! # Quadrature Methods
//!
//! - [`left_endpoint_rule`] - Rectangle rule using left endpoints, any increasing partition
//! - [`trapezoid_rule`] - Trapezoidal rule, any increasing partition
//! - [`cumulative_trapezoid`] - Running trapezoidal integral
//! - [`simpson_rule`] - Composite Simpson's 1/3 rule, uniform partition with even interval count
//!
//! [`QuadratureRule`] selects one of the rules at runtime, and
//! [`uniform_partition`] builds sample points every rule accepts.
//!
//! # Example
//!
//! ```
//! use baryquad::integrate::{QuadratureRule, uniform_partition};
//!
//! let x = uniform_partition(0.0, 1.0, 10).unwrap();
//! for rule in QuadratureRule::ALL {
//!     let area = rule.integrate(&x, |_| 3.0).unwrap();
//!     assert!((area - 3.0).abs() < 1e-12);
//! }
//! ```

pub mod error;
pub mod quadrature;

pub use error::{IntegrateError, IntegrateResult};
pub use quadrature::{
    QuadratureRule, SimpsonOptions, cumulative_trapezoid, left_endpoint_rule, simpson_rule,
    simpson_rule_with_options, trapezoid_rule, uniform_partition,
};

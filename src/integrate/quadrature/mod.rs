//! Numerical quadrature (integration) methods.
//!
//! # Available Methods
//!
//! | Method | Partition | Accuracy |
//! |--------|-----------|----------|
//! | [`left_endpoint_rule`] | Strictly increasing | O(h) |
//! | [`trapezoid_rule`] | Strictly increasing | O(h²) |
//! | [`simpson_rule`] | Uniform, even interval count | O(h⁴), exact for cubics |
//!
//! Non-uniform Simpson weighting is not provided; [`simpson_rule`] rejects
//! unevenly spaced samples instead.

mod left_endpoint;
mod partition;
mod rule;
mod simpson;
mod trapezoid;

// Re-export all public items
pub use left_endpoint::left_endpoint_rule;
pub use partition::uniform_partition;
pub use rule::QuadratureRule;
pub use simpson::{SimpsonOptions, simpson_rule, simpson_rule_with_options};
pub use trapezoid::{cumulative_trapezoid, trapezoid_rule};

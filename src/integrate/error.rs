//! Error types for numerical integration operations.

use thiserror::Error;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
///
/// Every variant is a violation of a caller contract. No rule approximates
/// around a bad partition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    /// Fewer than two samples, or samples that are not strictly increasing.
    #[error("Invalid partition: {context}")]
    InvalidPartition { context: String },

    /// Simpson's rule needs an even number of subintervals.
    #[error("Simpson's rule requires an even number of intervals (got {intervals})")]
    OddIntervalCount { intervals: usize },

    /// Simpson's rule needs equally spaced samples.
    #[error(
        "Non-uniform spacing at interval {index}: width {actual:e} differs from {expected:e}"
    )]
    NonUniformSpacing {
        index: usize,
        expected: f64,
        actual: f64,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
}

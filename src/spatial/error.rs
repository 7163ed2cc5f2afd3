//! Error types for planar geometry operations.

use thiserror::Error;

/// Result type for spatial operations.
pub type SpatialResult<T> = Result<T, SpatialError>;

/// Errors that can occur in planar geometry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    /// The triangle's vertices are collinear, so barycentric weights are undefined.
    #[error("degenerate triangle: vertices are collinear (denominator = {denominator:e})")]
    DegenerateTriangle { denominator: f64 },

    /// The point is so far from the triangle, relative to its size, that a
    /// weight overflows `f64`.
    #[error("barycentric weights are not finite: {weights:?}")]
    NonFiniteWeights { weights: [f64; 3] },
}

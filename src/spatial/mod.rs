//! Planar triangle geometry.
//!
//! Vertices are stored in a fixed order; vertex `i` always pairs with
//! barycentric weight `i`, so the same [`Triangle`] must be used for both
//! directions of a conversion.
//!
//! | Function | Output | Failure |
//! |----------|--------|---------|
//! | [`barycentric_coordinates`] | `[b1, b2, b3]` | [`SpatialError::DegenerateTriangle`], [`SpatialError::NonFiniteWeights`] |
//! | [`cartesian_coordinates`] | `[x, y]` | none |
//! | [`point_in_triangle`] | `bool` | [`SpatialError::DegenerateTriangle`], [`SpatialError::NonFiniteWeights`] |
//! | [`signed_area`] | `f64` | none |

mod barycentric;
pub mod error;

pub use barycentric::{
    Barycentric, Point, Triangle, barycentric_coordinates, cartesian_coordinates,
    point_in_triangle, signed_area,
};
pub use error::{SpatialError, SpatialResult};

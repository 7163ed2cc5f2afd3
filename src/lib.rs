//! # baryquad
//!
//! Small numerical routines for two independent tasks:
//!
//! - [`spatial`]: conversion between Cartesian and barycentric coordinates for a
//!   2D triangle, and a boundary-inclusive point-in-triangle test.
//! - [`integrate`]: left-endpoint, trapezoid, and composite Simpson quadrature
//!   over a caller-supplied partition of the x-axis.
//!
//! Every routine is a pure function over borrowed inputs. Invalid inputs are
//! reported through the per-module error types rather than producing NaN or
//! silently approximating a different problem.
//!
//! ```
//! use baryquad::integrate::simpson_rule;
//! use baryquad::spatial::point_in_triangle;
//!
//! let tri = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
//! assert!(point_in_triangle(&tri, [0.25, 0.25]).unwrap());
//!
//! let area = simpson_rule(&[0.0, 1.0, 2.0], |x| x * x).unwrap();
//! assert!((area - 8.0 / 3.0).abs() < 1e-12);
//! ```

pub mod integrate;
pub mod spatial;

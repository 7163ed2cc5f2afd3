//! Barycentric coordinates for planar triangles.
//!
//! A point `p` inside the plane of a non-degenerate triangle `(v1, v2, v3)`
//! has a unique affine decomposition `p = b1*v1 + b2*v2 + b3*v3` with
//! `b1 + b2 + b3 = 1`. The point lies inside the closed triangle exactly when
//! all three weights are in `[0, 1]`.

use crate::spatial::error::{SpatialError, SpatialResult};

/// A 2D point `[x, y]`.
pub type Point = [f64; 2];

/// Three ordered vertices. Vertex `i` corresponds to barycentric weight `i`.
pub type Triangle = [Point; 3];

/// Barycentric weights `[b1, b2, b3]`.
pub type Barycentric = [f64; 3];

/// Power of two close to the largest vertex coordinate magnitude.
///
/// Dividing by it is exact and brings every vertex into `[-2, 2]`, so the
/// denominator can neither overflow nor lose a well-shaped triangle to
/// underflow.
fn frame_scale(triangle: &Triangle) -> f64 {
    let max = triangle
        .iter()
        .flatten()
        .fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if max == 0.0 || !max.is_finite() {
        return 1.0;
    }
    max.log2().floor().exp2()
}

fn scaled(p: Point, s: f64) -> Point {
    [p[0] / s, p[1] / s]
}

/// Shared denominator of the barycentric formula.
///
/// Equals twice the signed area of the triangle.
fn denominator(triangle: &Triangle) -> f64 {
    let [[x1, y1], [x2, y2], [x3, y3]] = *triangle;
    (y2 - y3) * (x1 - x3) + (x3 - x2) * (y1 - y3)
}

/// Signed area of a triangle.
///
/// Positive when the vertices are ordered counter-clockwise, negative for
/// clockwise order, and zero when they are collinear.
///
/// # Example
///
/// ```
/// use baryquad::spatial::signed_area;
///
/// let tri = [[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]];
/// assert_eq!(signed_area(&tri), 2.0);
/// ```
pub fn signed_area(triangle: &Triangle) -> f64 {
    let s = frame_scale(triangle);
    let unit = (*triangle).map(|v| scaled(v, s));
    0.5 * denominator(&unit) * s * s
}

/// Compute the barycentric coordinates of `point` with respect to `triangle`.
///
/// The third weight is derived as `1 - b1 - b2`, so the weights always sum
/// to one up to rounding.
///
/// # Errors
///
/// Returns [`SpatialError::DegenerateTriangle`] when the vertices are
/// collinear (the denominator is exactly zero), and
/// [`SpatialError::NonFiniteWeights`] when a weight does not fit in an `f64`,
/// as happens for a point astronomically far from a tiny triangle.
///
/// Coordinates are rescaled by a power of two before the formula is applied,
/// so triangles of any finite size are handled without overflow.
///
/// # Example
///
/// ```
/// use baryquad::spatial::barycentric_coordinates;
///
/// let tri = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
/// let [b1, b2, b3] = barycentric_coordinates(&tri, [0.25, 0.5]).unwrap();
/// assert!((b1 - 0.25).abs() < 1e-12);
/// assert!((b2 - 0.25).abs() < 1e-12);
/// assert!((b3 - 0.5).abs() < 1e-12);
/// ```
pub fn barycentric_coordinates(triangle: &Triangle, point: Point) -> SpatialResult<Barycentric> {
    let s = frame_scale(triangle);
    let unit = (*triangle).map(|v| scaled(v, s));

    let d = denominator(&unit);
    if d == 0.0 {
        tracing::debug!(?triangle, denominator = d, "rejecting degenerate triangle");
        return Err(SpatialError::DegenerateTriangle { denominator: d });
    }

    let [[x1, y1], [x2, y2], [x3, y3]] = unit;
    let [x, y] = scaled(point, s);

    let b1 = ((y2 - y3) * (x - x3) + (x3 - x2) * (y - y3)) / d;
    let b2 = ((y3 - y1) * (x - x3) + (x1 - x3) * (y - y3)) / d;
    let b3 = 1.0 - b1 - b2;

    let weights = [b1, b2, b3];
    if !weights.iter().all(|w| w.is_finite()) {
        tracing::debug!(?triangle, ?point, denominator = d, "barycentric weights overflow");
        return Err(SpatialError::NonFiniteWeights { weights });
    }

    tracing::trace!(b1, b2, b3, "barycentric coordinates");
    Ok(weights)
}

/// Map barycentric weights back to a Cartesian point.
///
/// This is the plain affine combination of the vertices. The weights are not
/// checked to sum to one; passing weights that do not is a caller error and
/// yields a point outside the triangle's affine frame.
pub fn cartesian_coordinates(triangle: &Triangle, bary: Barycentric) -> Point {
    let [[x1, y1], [x2, y2], [x3, y3]] = *triangle;
    let [b1, b2, b3] = bary;
    [b1 * x1 + b2 * x2 + b3 * x3, b1 * y1 + b2 * y2 + b3 * y3]
}

/// Test whether `point` lies inside or on the boundary of `triangle`.
///
/// All three weights are checked against `[0, 1]`. Two would suffice in exact
/// arithmetic, but the derived third weight can drift outside the range by
/// rounding on its own.
///
/// # Errors
///
/// Propagates [`SpatialError::DegenerateTriangle`] and
/// [`SpatialError::NonFiniteWeights`] from [`barycentric_coordinates`].
///
/// # Example
///
/// ```
/// use baryquad::spatial::point_in_triangle;
///
/// let tri = [[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]];
/// assert!(point_in_triangle(&tri, [1.0, 1.0]).unwrap());
/// assert!(point_in_triangle(&tri, [2.0, 2.0]).unwrap()); // on the hypotenuse
/// assert!(!point_in_triangle(&tri, [3.0, 3.0]).unwrap());
/// ```
pub fn point_in_triangle(triangle: &Triangle, point: Point) -> SpatialResult<bool> {
    let weights = barycentric_coordinates(triangle, point)?;
    Ok(weights.iter().all(|w| (0.0..=1.0).contains(w)))
}

pub mod intersect_2d;
pub mod triangle_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance used when comparing computed coordinates in tests and callers.
///
/// The predicates themselves are exact sign tests and never consult it.
pub const TOLERANCE: f64 = 1e-10;

/// Scalar 2D cross product: the z-component of `v1 × v2`.
///
/// Positive when `v2` turns left of `v1`, negative when it turns right,
/// zero when the vectors are collinear.
#[must_use]
pub fn cross_2d(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Arithmetic mean of two points.
#[must_use]
pub fn midpoint(first: &Point2, second: &Point2) -> Point2 {
    Point2::new((first.x + second.x) / 2.0, (first.y + second.y) / 2.0)
}

use super::{cross_2d, Point2};
use crate::error::{GeometryError, Result};

/// Tests whether `point` lies inside, or on the boundary of, a triangle.
///
/// The triangle's edges are walked in order `0→1`, `1→2`, `2→0`. For each
/// edge the cross product of the edge vector with the vector from the edge
/// start to `point` is taken; the point is inside when no two nonzero values
/// disagree in sign. Zero values (point on an edge's supporting line) never
/// count as a disagreement.
///
/// # Errors
///
/// Returns `GeometryError::InvalidVertexCount` if `triangle` does not hold
/// exactly three points.
pub fn point_in_triangle(point: &Point2, triangle: &[Point2]) -> Result<bool> {
    let [a, b, c] = triangle else {
        return Err(GeometryError::InvalidVertexCount {
            shape: "triangle",
            expected: 3,
            actual: triangle.len(),
        }
        .into());
    };
    Ok(contains_point(&[*a, *b, *c], point))
}

/// Same-side walk over a fixed triangle; see [`point_in_triangle`].
#[must_use]
pub(crate) fn contains_point(triangle: &[Point2; 3], point: &Point2) -> bool {
    let mut last_sign = 0.0;
    for i in 0..3 {
        let start = triangle[i];
        let end = triangle[(i + 1) % 3];
        let value = cross_2d(&(end - start), &(point - start));

        if last_sign * value < 0.0 {
            return false;
        }
        if value != 0.0 {
            last_sign = value;
        }
    }
    true
}

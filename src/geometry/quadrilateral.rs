use crate::error::{GeometryError, Result};
use crate::math::triangle_2d::contains_point;
use crate::math::Point2;

/// Four points in input order.
///
/// The vertex order is kept exactly as given; it is not assumed to describe a
/// simple (non-self-intersecting) polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral {
    vertices: [Point2; 4],
}

impl Quadrilateral {
    /// Creates a quadrilateral from four vertices.
    #[must_use]
    pub fn new(vertices: [Point2; 4]) -> Self {
        Self { vertices }
    }

    /// Creates a quadrilateral from a slice of points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidVertexCount` if `points` does not hold
    /// exactly four points.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let vertices: [Point2; 4] =
            points
                .try_into()
                .map_err(|_| GeometryError::InvalidVertexCount {
                    shape: "quadrilateral",
                    expected: 4,
                    actual: points.len(),
                })?;
        Ok(Self { vertices })
    }

    /// Returns the vertices in input order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 4] {
        &self.vertices
    }

    /// Returns vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Point2 {
        self.vertices[index]
    }

    /// Returns the triangle formed by the three vertices other than `index`,
    /// keeping their relative order.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`.
    #[must_use]
    pub fn without(&self, index: usize) -> Triangle {
        assert!(index < 4, "quadrilateral vertex index {index} out of range");
        let mut rest = [Point2::origin(); 3];
        for (slot, vertex) in rest.iter_mut().zip(
            self.vertices
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, v)| v),
        ) {
            *slot = *vertex;
        }
        Triangle::new(rest)
    }
}

/// Three points in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub fn new(vertices: [Point2; 3]) -> Self {
        Self { vertices }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Returns `true` if `point` lies inside the triangle or on its boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        contains_point(&self.vertices, point)
    }
}

impl TryFrom<&[Point2]> for Triangle {
    type Error = GeometryError;

    fn try_from(points: &[Point2]) -> std::result::Result<Self, Self::Error> {
        let vertices: [Point2; 3] =
            points
                .try_into()
                .map_err(|_| GeometryError::InvalidVertexCount {
                    shape: "triangle",
                    expected: 3,
                    actual: points.len(),
                })?;
        Ok(Self { vertices })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Quadrilateral {
        Quadrilateral::new([
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn without_keeps_relative_order() {
        let tri = square().without(1);
        assert_eq!(
            tri.vertices(),
            &[
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn without_last_vertex() {
        let tri = square().without(3);
        assert_eq!(tri.vertices()[2], Point2::new(10.0, 10.0));
    }

    #[test]
    fn from_points_wrong_count() {
        let pts = [Point2::new(0.0, 0.0); 3];
        let err = Quadrilateral::from_points(&pts).unwrap_err();
        assert_eq!(err.to_string(), "quadrilateral needs exactly 4 points, got 3");
        assert!(Quadrilateral::from_points(&[Point2::new(0.0, 0.0); 5]).is_err());
    }

    #[test]
    fn from_points_ok() {
        let quad = Quadrilateral::from_points(square().vertices()).unwrap();
        assert_eq!(quad, square());
    }

    #[test]
    fn triangle_try_from_slice() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
        ];
        let tri = Triangle::try_from(pts.as_slice()).unwrap();
        assert!(tri.contains(&Point2::new(1.0, 1.0)));
        assert!(Triangle::try_from(&pts[..2]).is_err());
    }
}

use crate::math::intersect_2d::segments_straddle;
use crate::math::{midpoint, Point2, Vector2};

/// An ordered pair of points.
///
/// The order only matters for direction-sensitive computations such as
/// [`Segment::vector`] and [`Segment::is_straddled_by`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub first: Point2,
    pub second: Point2,
}

impl Segment {
    /// Creates a segment from `first` to `second`.
    #[must_use]
    pub fn new(first: Point2, second: Point2) -> Self {
        Self { first, second }
    }

    /// Returns the vector `second - first`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.second - self.first
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        midpoint(&self.first, &self.second)
    }

    /// Returns `true` if `other`'s endpoints lie strictly on opposite sides
    /// of the infinite line through this segment.
    ///
    /// This is the one-sided test of [`segments_straddle`]; it is not
    /// symmetric in `self` and `other`.
    #[must_use]
    pub fn is_straddled_by(&self, other: &Segment) -> bool {
        segments_straddle(&self.first, &self.second, &other.first, &other.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn midpoint_and_vector() {
        let seg = Segment::new(Point2::new(1.0, 2.0), Point2::new(5.0, 10.0));
        let m = seg.midpoint();
        assert_relative_eq!(m.x, 3.0);
        assert_relative_eq!(m.y, 6.0);
        let v = seg.vector();
        assert_relative_eq!(v.x, 4.0);
        assert_relative_eq!(v.y, 8.0);
    }

    #[test]
    fn straddle_delegates_one_sided() {
        let axis = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let far = Segment::new(Point2::new(20.0, -5.0), Point2::new(20.0, 5.0));
        assert!(axis.is_straddled_by(&far));
        assert!(!far.is_straddled_by(&axis));
    }
}

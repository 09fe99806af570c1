use crate::geometry::Segment;
use crate::math::Point2;

/// Pushes both endpoints of a segment away from each other.
///
/// Each endpoint moves outward by `factor` times the segment vector, so the
/// result spans `(2 * factor + 1)` times the original length.
pub struct ExtendSegment {
    segment: Segment,
    factor: f64,
}

impl ExtendSegment {
    /// Creates a new `ExtendSegment` operation.
    #[must_use]
    pub fn new(segment: Segment, factor: f64) -> Self {
        Self { segment, factor }
    }

    /// Executes the extension.
    #[must_use]
    pub fn execute(&self) -> Segment {
        let Segment { first: start, second: end } = self.segment;
        let f = self.factor;

        let start_extended = Point2::new(
            (start.x - end.x) * f + start.x,
            (start.y - end.y) * f + start.y,
        );
        let end_extended = Point2::new(
            (end.x - start.x) * f + end.x,
            (end.y - start.y) * f + end.y,
        );
        Segment::new(start_extended, end_extended)
    }
}

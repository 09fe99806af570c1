use tracing::debug;

use super::{Classification, ClassifyQuadrilateral, ExtendSegment};
use crate::error::Result;
use crate::geometry::{Quadrilateral, Segment};
use crate::math::{midpoint, Point2};

/// Center lines of a quadrilateral, before and after extension.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterLineSet {
    /// Shape class that selected the construction.
    pub classification: Classification,
    /// Center lines between the constructed midpoints, in emission order.
    pub raw: Vec<Segment>,
    /// `raw` with each line extended for rendering.
    pub extended: Vec<Segment>,
}

/// Constructs the center lines that bisect a quadrilateral.
///
/// A concave quadrilateral yields the two lines joining the midpoint of
/// the first reflex edge to the midpoints of the other two reflex edges,
/// where a reflex edge runs from the reflex vertex to one of the remaining
/// vertices. Otherwise the vertices are paired into two segments that do
/// not cross, and the lines join the midpoints of those pairs and of the
/// cross-pairing of their endpoints.
pub struct CenterLines {
    quad: Quadrilateral,
    extension_factor: f64,
}

impl CenterLines {
    /// Creates a new `CenterLines` operation.
    #[must_use]
    pub fn new(quad: Quadrilateral, extension_factor: f64) -> Self {
        Self {
            quad,
            extension_factor,
        }
    }

    /// Executes the construction.
    #[must_use]
    pub fn execute(&self) -> CenterLineSet {
        let classification = ClassifyQuadrilateral::new(&self.quad).execute();
        let raw = match classification {
            Classification::Concave { reflex } => self.concave_lines(reflex),
            Classification::Convex => self.convex_lines(),
        };
        let extended = raw
            .iter()
            .map(|line| ExtendSegment::new(*line, self.extension_factor).execute())
            .collect();

        CenterLineSet {
            classification,
            raw,
            extended,
        }
    }

    fn concave_lines(&self, reflex: usize) -> Vec<Segment> {
        debug!(reflex, "concave quadrilateral");
        let r = self.quad.vertex(reflex);
        let [t0, t1, t2] = *self.quad.without(reflex).vertices();

        let m1 = midpoint(&r, &t0);
        let m2 = midpoint(&r, &t1);
        let m3 = midpoint(&r, &t2);
        vec![Segment::new(m1, m2), Segment::new(m1, m3)]
    }

    fn convex_lines(&self) -> Vec<Segment> {
        let [p0, p1, p2, p3] = *self.quad.vertices();

        let (line1, line2) = uncrossed_pair(
            (Segment::new(p0, p1), Segment::new(p2, p3)),
            (Segment::new(p0, p2), Segment::new(p1, p3)),
        );
        let first = midline(&line1, &line2);

        let (new_line1, new_line2) = uncrossed_pair(
            (
                Segment::new(line1.first, line2.first),
                Segment::new(line1.second, line2.second),
            ),
            (
                Segment::new(line1.first, line2.second),
                Segment::new(line1.second, line2.first),
            ),
        );
        let second = midline(&new_line1, &new_line2);

        vec![first, second]
    }
}

/// Returns `preferred` unless its second segment straddles the first,
/// in which case `fallback` is returned.
fn uncrossed_pair(
    preferred: (Segment, Segment),
    fallback: (Segment, Segment),
) -> (Segment, Segment) {
    if preferred.0.is_straddled_by(&preferred.1) {
        debug!(
            first = ?preferred.0,
            second = ?preferred.1,
            "pairing crosses, re-pairing endpoints"
        );
        fallback
    } else {
        preferred
    }
}

fn midline(a: &Segment, b: &Segment) -> Segment {
    Segment::new(a.midpoint(), b.midpoint())
}

/// Computes the extended center lines of the quadrilateral `points`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidVertexCount` if `points` does not hold
/// exactly four points.
pub fn compute_center_lines(points: &[Point2], extension_factor: f64) -> Result<Vec<Segment>> {
    let quad = Quadrilateral::from_points(points)?;
    Ok(CenterLines::new(quad, extension_factor).execute().extended)
}

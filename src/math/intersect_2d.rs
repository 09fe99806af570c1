use super::{cross_2d, Point2};

/// One-sided segment crossing test.
///
/// Returns `true` when `c` and `d` lie strictly on opposite sides of the
/// infinite line through `a` and `b`. An endpoint lying exactly on that line
/// (including the fully collinear case) counts as not crossing.
///
/// Only the endpoints of the second segment are checked against the first,
/// so the result can change when the two segments swap roles: a segment
/// `c-d` that straddles the line through `a-b` far beyond `b` still reports a
/// crossing. The center-line construction relies on exactly this behaviour;
/// callers that need a true segment-segment test must check both directions.
#[must_use]
pub fn segments_straddle(a: &Point2, b: &Point2, c: &Point2, d: &Point2) -> bool {
    let mid = b - a;
    let left = c - a;
    let right = d - a;

    let value1 = cross_2d(&mid, &left);
    let value2 = cross_2d(&mid, &right);
    value1 * value2 < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn perpendicular_crossing() {
        assert!(segments_straddle(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, -5.0),
            &p(5.0, 5.0)
        ));
    }

    #[test]
    fn perpendicular_crossing_roles_swapped() {
        assert!(segments_straddle(
            &p(5.0, -5.0),
            &p(5.0, 5.0),
            &p(0.0, 0.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn straddle_beyond_segment_end_is_one_sided() {
        // The vertical segment at x=20 straddles the x-axis but never meets
        // the horizontal segment, which only reaches x=10.
        assert!(segments_straddle(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(20.0, -5.0),
            &p(20.0, 5.0)
        ));
        assert!(!segments_straddle(
            &p(20.0, -5.0),
            &p(20.0, 5.0),
            &p(0.0, 0.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn same_side_does_not_cross() {
        assert!(!segments_straddle(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(10.0, 10.0),
            &p(0.0, 10.0)
        ));
    }

    #[test]
    fn endpoint_on_line_does_not_cross() {
        assert!(!segments_straddle(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(5.0, 0.0),
            &p(5.0, 5.0)
        ));
    }

    #[test]
    fn collinear_does_not_cross() {
        assert!(!segments_straddle(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(2.0, 0.0),
            &p(8.0, 0.0)
        ));
    }
}

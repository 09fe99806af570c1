use tracing::debug;

use super::{Canvas, CenterLineStyle, Paint, PointSource};
use crate::geometry::{Quadrilateral, Segment};
use crate::math::Point2;
use crate::operations::{CenterLineSet, CenterLines};

/// Draws one quadrilateral and its center lines per frame.
///
/// Every frame pulls fresh points from the source; nothing carries over
/// between frames.
pub struct QuadView<S> {
    source: S,
    style: CenterLineStyle,
}

impl<S: PointSource> QuadView<S> {
    /// Creates a view with the default style.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_style(source, CenterLineStyle::default())
    }

    #[must_use]
    pub fn with_style(source: S, style: CenterLineStyle) -> Self {
        Self { source, style }
    }

    #[must_use]
    pub fn style(&self) -> &CenterLineStyle {
        &self.style
    }

    /// Draws a frame and returns the center lines it drew.
    ///
    /// Vertices come first, each with its index label below it. Each center
    /// line is then drawn as its two raw endpoints followed by the extended
    /// segment.
    pub fn draw_frame<C: Canvas>(&mut self, canvas: &mut C) -> CenterLineSet {
        let quad = Quadrilateral::new(self.source.next_points());

        for (i, vertex) in quad.vertices().iter().enumerate() {
            canvas.draw_point(*vertex, self.style.vertex_radius(), Paint::Vertex);
            let label_at = Point2::new(vertex.x, vertex.y + self.style.label_offset());
            canvas.draw_label(&i.to_string(), label_at, Paint::Label);
        }

        let set = CenterLines::new(quad, self.style.extension_factor()).execute();
        for (raw, extended) in set.raw.iter().zip(&set.extended) {
            self.draw_center_line(canvas, raw, extended);
        }

        debug!(
            classification = ?set.classification,
            lines = set.raw.len(),
            "drew center-line frame"
        );
        set
    }

    fn draw_center_line<C: Canvas>(&self, canvas: &mut C, raw: &Segment, extended: &Segment) {
        let radius = self.style.endpoint_radius();
        canvas.draw_point(raw.first, radius, Paint::CenterLine);
        canvas.draw_point(raw.second, radius, Paint::CenterLine);
        canvas.draw_segment(*extended, Paint::CenterLine);
    }
}

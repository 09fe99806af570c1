mod source;
mod style;
mod view;

pub use source::{FixedPointSource, PointSource, RandomPointSource};
pub use style::CenterLineStyle;
pub use view::QuadView;

use crate::geometry::Segment;
use crate::math::Point2;

/// Role of a drawn primitive; a canvas maps each role to its own brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// A vertex of the input quadrilateral.
    Vertex,
    /// A center line or one of its endpoints.
    CenterLine,
    /// A vertex index label.
    Label,
}

/// Drawing surface the frame driver renders onto.
pub trait Canvas {
    /// Draws a filled point of the given radius.
    fn draw_point(&mut self, center: Point2, radius: f64, paint: Paint);

    /// Draws a straight line.
    fn draw_segment(&mut self, segment: Segment, paint: Paint);

    /// Draws a text label. Surfaces without text support may ignore it.
    fn draw_label(&mut self, _text: &str, _at: Point2, _paint: Paint) {}
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point {
        center: Point2,
        radius: f64,
        paint: Paint,
    },
    Segment {
        segment: Segment,
        paint: Paint,
    },
    Label {
        text: String,
        at: Point2,
        paint: Paint,
    },
}

/// A canvas that keeps every draw call as a display list.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded segments in draw order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Segment { segment, .. } => Some(segment),
            _ => None,
        })
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_point(&mut self, center: Point2, radius: f64, paint: Paint) {
        self.commands.push(DrawCommand::Point {
            center,
            radius,
            paint,
        });
    }

    fn draw_segment(&mut self, segment: Segment, paint: Paint) {
        self.commands.push(DrawCommand::Segment { segment, paint });
    }

    fn draw_label(&mut self, text: &str, at: Point2, paint: Paint) {
        self.commands.push(DrawCommand::Label {
            text: text.to_owned(),
            at,
            paint,
        });
    }
}

use crate::geometry::Quadrilateral;

/// Shape class of a quadrilateral, as seen by the reflex-vertex scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Vertex `reflex` lies inside (or on) the triangle of the other three.
    Concave { reflex: usize },
    /// No scanned vertex lies inside the triangle of the others.
    Convex,
}

impl Classification {
    /// Returns `true` for [`Classification::Concave`].
    #[must_use]
    pub fn is_concave(&self) -> bool {
        matches!(self, Self::Concave { .. })
    }

    /// Returns the reflex vertex index, if any.
    #[must_use]
    pub fn reflex_index(&self) -> Option<usize> {
        match self {
            Self::Concave { reflex } => Some(*reflex),
            Self::Convex => None,
        }
    }
}

/// Finds the reflex vertex of a quadrilateral, if it has one.
///
/// Vertices 0, 1 and 2 are tested in order against the triangle of the
/// remaining three; the first hit wins. Vertex 3 is never tested, so a
/// quadrilateral whose only reflex vertex is the last one classifies as
/// [`Classification::Convex`].
pub struct ClassifyQuadrilateral<'a> {
    quad: &'a Quadrilateral,
}

impl<'a> ClassifyQuadrilateral<'a> {
    /// Number of leading vertices the scan tests as reflex candidates.
    pub const SCANNED_VERTICES: usize = 3;

    /// Creates a new `ClassifyQuadrilateral` query.
    #[must_use]
    pub fn new(quad: &'a Quadrilateral) -> Self {
        Self { quad }
    }

    /// Executes the scan.
    #[must_use]
    pub fn execute(&self) -> Classification {
        (0..Self::SCANNED_VERTICES)
            .find(|&i| self.quad.without(i).contains(&self.quad.vertex(i)))
            .map_or(Classification::Convex, |reflex| Classification::Concave {
                reflex,
            })
    }
}

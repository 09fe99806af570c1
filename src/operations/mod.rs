mod center_lines;
mod classify;
mod extend;

pub use center_lines::{compute_center_lines, CenterLineSet, CenterLines};
pub use classify::{Classification, ClassifyQuadrilateral};
pub use extend::ExtendSegment;

/// Extension factor applied to center lines when none is configured.
pub const DEFAULT_EXTENSION_FACTOR: f64 = 100.0;

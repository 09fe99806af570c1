pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;

pub use error::{QuadlineError, Result};
pub use operations::compute_center_lines;

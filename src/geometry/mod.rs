pub mod quadrilateral;
pub mod segment;

pub use quadrilateral::{Quadrilateral, Triangle};
pub use segment::Segment;

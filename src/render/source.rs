use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::error::{RenderError, Result};
use crate::math::Point2;

/// Supplies the four points of the next frame.
pub trait PointSource {
    /// Returns four points.
    fn next_points(&mut self) -> [Point2; 4];
}

/// Uniformly random points in `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
pub struct RandomPointSource {
    width: f64,
    height: f64,
    rng: StdRng,
}

impl RandomPointSource {
    /// Creates a source seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Creates a reproducible source from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not positive.
    pub fn seeded(width: f64, height: f64, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f64, height: f64, rng: StdRng) -> Result<Self> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(RenderError::InvalidParameters(format!(
                "view size must be positive, got {width}x{height}"
            ))
            .into());
        }
        Ok(Self { width, height, rng })
    }
}

impl PointSource for RandomPointSource {
    fn next_points(&mut self) -> [Point2; 4] {
        let points = std::array::from_fn(|_| {
            Point2::new(
                self.width * self.rng.gen::<f64>(),
                self.height * self.rng.gen::<f64>(),
            )
        });
        trace!(?points, "generated frame points");
        points
    }
}

/// Returns the same four points every frame.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointSource {
    points: [Point2; 4],
}

impl FixedPointSource {
    #[must_use]
    pub fn new(points: [Point2; 4]) -> Self {
        Self { points }
    }
}

impl PointSource for FixedPointSource {
    fn next_points(&mut self) -> [Point2; 4] {
        self.points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn random_points_stay_in_view() {
        let mut source = RandomPointSource::seeded(320.0, 240.0, 7).unwrap();
        for _ in 0..100 {
            for p in source.next_points() {
                assert!((0.0..320.0).contains(&p.x), "x={}", p.x);
                assert!((0.0..240.0).contains(&p.y), "y={}", p.y);
            }
        }
    }

    #[test]
    fn same_seed_same_points() {
        let mut a = RandomPointSource::seeded(100.0, 100.0, 42).unwrap();
        let mut b = RandomPointSource::seeded(100.0, 100.0, 42).unwrap();
        assert_eq!(a.next_points(), b.next_points());
        assert_eq!(a.next_points(), b.next_points());
    }

    #[test]
    fn invalid_view_size_fails() {
        assert!(RandomPointSource::seeded(0.0, 100.0, 1).is_err());
        assert!(RandomPointSource::seeded(100.0, -1.0, 1).is_err());
        assert!(RandomPointSource::seeded(f64::NAN, 100.0, 1).is_err());
    }

    #[test]
    fn fixed_source_repeats() {
        let pts = [Point2::new(1.0, 2.0); 4];
        let mut source = FixedPointSource::new(pts);
        assert_eq!(source.next_points(), pts);
        assert_eq!(source.next_points(), pts);
    }
}

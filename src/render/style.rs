use crate::error::{RenderError, Result};
use crate::operations::DEFAULT_EXTENSION_FACTOR;

/// Drawing parameters for a center-line frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterLineStyle {
    extension_factor: f64,
    vertex_radius: f64,
    endpoint_radius: f64,
    label_offset: f64,
}

impl Default for CenterLineStyle {
    fn default() -> Self {
        Self {
            extension_factor: DEFAULT_EXTENSION_FACTOR,
            vertex_radius: 4.0,
            endpoint_radius: 4.0,
            label_offset: 25.0,
        }
    }
}

impl CenterLineStyle {
    /// Creates a style with the given extension factor and default radii.
    ///
    /// # Errors
    ///
    /// Returns an error if `extension_factor` is not finite.
    pub fn new(extension_factor: f64) -> Result<Self> {
        if !extension_factor.is_finite() {
            return Err(RenderError::InvalidParameters(format!(
                "extension factor must be finite, got {extension_factor}"
            ))
            .into());
        }
        Ok(Self {
            extension_factor,
            ..Self::default()
        })
    }

    /// Replaces the radius used for the quadrilateral's vertices and for the
    /// raw center-line endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not positive.
    pub fn with_radius(self, radius: f64) -> Result<Self> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(RenderError::InvalidParameters(
                "point radius must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self {
            vertex_radius: radius,
            endpoint_radius: radius,
            ..self
        })
    }

    /// Replaces the vertical distance between a vertex and its index label.
    #[must_use]
    pub fn with_label_offset(self, label_offset: f64) -> Self {
        Self {
            label_offset,
            ..self
        }
    }

    /// Returns the center-line extension factor.
    #[must_use]
    pub fn extension_factor(&self) -> f64 {
        self.extension_factor
    }

    /// Returns the radius of a drawn vertex.
    #[must_use]
    pub fn vertex_radius(&self) -> f64 {
        self.vertex_radius
    }

    /// Returns the radius of a drawn center-line endpoint.
    #[must_use]
    pub fn endpoint_radius(&self) -> f64 {
        self.endpoint_radius
    }

    /// Returns the label offset below each vertex.
    #[must_use]
    pub fn label_offset(&self) -> f64 {
        self.label_offset
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_drawing_surface() {
        let style = CenterLineStyle::default();
        assert!((style.extension_factor() - 100.0).abs() < f64::EPSILON);
        assert!((style.vertex_radius() - 4.0).abs() < f64::EPSILON);
        assert!((style.endpoint_radius() - 4.0).abs() < f64::EPSILON);
        assert!((style.label_offset() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_finite_factor() {
        let style = CenterLineStyle::new(2.5).unwrap();
        assert!((style.extension_factor() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_nan_factor_fails() {
        assert!(CenterLineStyle::new(f64::NAN).is_err());
        assert!(CenterLineStyle::new(f64::INFINITY).is_err());
    }

    #[test]
    fn with_radius_validates() {
        let style = CenterLineStyle::default().with_radius(6.0).unwrap();
        assert!((style.vertex_radius() - 6.0).abs() < f64::EPSILON);
        assert!(CenterLineStyle::default().with_radius(0.0).is_err());
        assert!(CenterLineStyle::default().with_radius(-1.0).is_err());
    }
}

use thiserror::Error;

/// Top-level error type for the quadline crate.
#[derive(Debug, Error)]
pub enum QuadlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{shape} needs exactly {expected} points, got {actual}")]
    InvalidVertexCount {
        shape: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Errors related to rendering configuration.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`QuadlineError`].
pub type Result<T> = std::result::Result<T, QuadlineError>;

use thiserror::Error;

/// Top-level error type for polysnap.
#[derive(Debug, Error)]
pub enum PolysnapError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric input.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid polygon: a perimeter needs at least one vertex")]
    InvalidPolygon,

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Errors related to snapping configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`PolysnapError`].
pub type Result<T> = std::result::Result<T, PolysnapError>;

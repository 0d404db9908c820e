use thiserror::Error;

/// Top-level error type for the Cephalon landmark geometry library.
#[derive(Debug, Error)]
pub enum CephalonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("degenerate normal ({x}, {y}, {z}): largest component is not unique")]
    DegenerateNormal { x: f64, y: f64, z: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to operation inputs.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`CephalonError`].
pub type Result<T> = std::result::Result<T, CephalonError>;

use thiserror::Error;

/// Top-level error type for the Lithic boundary-evaluation kernel.
#[derive(Debug, Error)]
pub enum LithicError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to scene construction and lookup.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("convex shape has only {planes} non-parallel planes; at least 4 are required to bound a finite solid")]
    UnderConstrained { planes: usize },

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`LithicError`].
pub type Result<T> = std::result::Result<T, LithicError>;

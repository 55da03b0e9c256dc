use thiserror::Error;

/// Top-level error type for the Joinery assembly builder.
#[derive(Debug, Error)]
pub enum JoineryError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length curve")]
    ZeroLength,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("coordinate is not finite")]
    NotFinite,
}

/// Errors raised when building catalog value objects.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{dimension} = {value} must be positive")]
    NonPositiveDimension { dimension: &'static str, value: f64 },

    #[error("material property {property} = {value} must be positive")]
    NonPositiveProperty { property: &'static str, value: f64 },
}

/// Errors related to assembly queries and configuration.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("element not found in store")]
    ElementNotFound,

    #[error("tolerance {0} must be positive and finite")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`JoineryError`].
pub type Result<T> = std::result::Result<T, JoineryError>;

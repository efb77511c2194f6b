//! Error types for the anofox-decompose library.

use thiserror::Error;

/// Result type alias for decomposition operations.
pub type Result<T> = std::result::Result<T, DecomposeError>;

/// Errors that can occur during seasonal decomposition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecomposeError {
    /// Input contains NaN or infinite values. The decomposition never
    /// imputes; callers must clean their data first.
    #[error("missing values are not supported")]
    MissingData,

    /// Multiplicative model requested with zero or negative observations.
    #[error("multiplicative seasonality is not appropriate for zero and negative values")]
    Domain,

    /// No period given and none inferable from the series.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Fewer than two complete seasonal cycles supplied.
    #[error("{needed} observations required, {got} given")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },
}

use thiserror::Error;

/// Top-level error type for the arcseg geometry kernel.
#[derive(Debug, Error)]
pub enum ArcsegError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Errors raised while constructing geometric primitives.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("circle radius must not be negative, got {radius}")]
    NegativeRadius { radius: f64 },
}

/// Errors raised while parsing a textual mode token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("unknown rounding mode: {0:?}")]
    RoundingMode(String),

    #[error("unknown comparison operator: {0:?}")]
    Operator(String),

    #[error("unknown precision: {0:?}")]
    Precision(String),
}

/// Convenience type alias for results using [`ArcsegError`].
pub type Result<T> = std::result::Result<T, ArcsegError>;

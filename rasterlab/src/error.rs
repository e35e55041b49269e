//! Error types shared by the rasterization and filtering engines.

use thiserror::Error;

/// Errors reported synchronously by every engine entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Negative radius or a primitive whose extent leaves the coordinate range.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Zero-sized buffer or byte length not matching the dimensions.
    #[error("Invalid buffer: {0}")]
    InvalidBuffer(String),

    /// Filter parameter outside its accepted range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

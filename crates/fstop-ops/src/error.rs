//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Operation needs at least one pixel.
    #[error("image has zero area")]
    EmptyImage,
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

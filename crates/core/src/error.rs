//! Error types for palletizer.

use thiserror::Error;

/// Result type alias for palletizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building pallet configurations.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-positive dimension, weight, or quantity in the input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An item cannot fit any pallet under the configured envelope, even alone.
    #[error("Insufficient capacity: {0}")]
    InsufficientCapacity(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

//! Error Types

use thiserror::Error;

/// Result type alias for beacon operations
pub type Result<T> = std::result::Result<T, BeaconError>;

/// Beacon error types
///
/// Sub-causes exist for logging only. The dispatcher collapses every one of
/// them into the single fixed user-facing failure message.
#[derive(Error, Debug)]
pub enum BeaconError {
    /// Service credential missing or rejected
    #[error("Credential error: {0}")]
    Credential(String),

    /// Transport-level failure reaching the service
    #[error("Transport error: {0}")]
    Transport(String),

    /// Service returned a non-success status or an error payload
    #[error("Service error: {0}")]
    Service(String),

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

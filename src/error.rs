//! Error types for the plugin SDK.

use thiserror::Error;

/// Errors that can occur when registering with the coordinator.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The router was built without an API URL.
    #[error("no coordinator API URL configured")]
    MissingApiUrl,

    /// Transport-level failure reaching the coordinator.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

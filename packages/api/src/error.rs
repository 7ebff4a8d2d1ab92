//! Error taxonomy at the service boundary.

use store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything a remote operation can fail with. None of these are fatal to
/// the process; each is scoped to the component that triggered it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network failure or an error response from the service.
    #[error("service error: {0}")]
    Service(String),
    /// A required input was missing or malformed before any request was made.
    #[error("{0}")]
    Validation(String),
    /// Exactly one row was expected and none came back.
    #[error("not found: {0}")]
    NotFound(String),
    /// Startup configuration is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Service(message) => ApiError::Service(message),
            StoreError::NotFound(table) => ApiError::NotFound(table),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Service(error.to_string())
    }
}

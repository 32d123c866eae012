use thiserror::Error;

use crate::error::{ApiError, FleetwireError};

/// Normalized authentication errors.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Invalid authorization URL: {0}")]
    InvalidAuthorizeUrl(String),
    #[error("Authorization flow failed: {0}")]
    Flow(String),
    #[error("Token endpoint rejected the request (status {status}): {error}")]
    TokenEndpoint { status: u16, error: ApiError },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<std::io::Error> for AuthError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<AuthError> for FleetwireError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::NotLoggedIn => FleetwireError::NotConnected,
            AuthError::TokenEndpoint { status, error } => FleetwireError::Api { status, error },
            other => FleetwireError::Authentication(other.to_string()),
        }
    }
}

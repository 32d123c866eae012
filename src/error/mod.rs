//! Error types for Fleetwire.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `error` code the API uses for an expired access token.
pub const ERROR_TOKEN_EXPIRED: &str = "token_expired";

/// `error_description` the API uses for an expired access token.
pub const ERROR_DESCRIPTION_TOKEN_EXPIRED: &str = "Token has expired";

/// Synthetic `error` code wrapped around bodies that are not the expected
/// error shape.
pub const ERROR_UNEXPECTED: &str = "unexpected_error";

/// Primary error type for all Fleetwire operations.
#[derive(Error, Debug)]
pub enum FleetwireError {
    /// No user session: connect the user before calling domain endpoints.
    /// Produced locally, never reaches the network.
    #[error("Not connected: you must connect the user before anything")]
    NotConnected,

    #[error("API error (status {status}): {error}")]
    Api { status: u16, error: ApiError },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl FleetwireError {
    /// Build the structured API failure for a non-2xx response body.
    pub fn api(status: u16, body: &str) -> Self {
        let mut error = parse_error_body(body);
        error.code = Some(status);
        Self::Api { status, error }
    }
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    pub error: Option<String>,
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Vec<ErrorDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            error_description: Some(description.into()),
            error_details: None,
            code: None,
        }
    }

    /// Whether this payload is the API's expired-access-token condition.
    pub fn is_token_expired(&self) -> bool {
        self.error.as_deref() == Some(ERROR_TOKEN_EXPIRED)
            || self.error_description.as_deref() == Some(ERROR_DESCRIPTION_TOKEN_EXPIRED)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => write!(f, "{error}: {description}"),
            (Some(error), None) => write!(f, "{error}"),
            (None, Some(description)) => write!(f, "{description}"),
            (None, None) => write!(f, "unknown error"),
        }
    }
}

/// Field-level detail carried by validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: Option<String>,
    pub constraint: Option<String>,
    pub description: Option<String>,
}

/// Parse a non-2xx response body into an [`ApiError`].
///
/// The API answers with either a single error object or an array of them;
/// anything else is wrapped into a synthetic payload carrying the raw text
/// as its description.
pub fn parse_error_body(body: &str) -> ApiError {
    if body.starts_with('{') {
        serde_json::from_str(body).unwrap_or_else(|_| ApiError::new(ERROR_UNEXPECTED, body))
    } else if body.starts_with('[') {
        serde_json::from_str::<Vec<ApiError>>(body)
            .ok()
            .and_then(|mut errors| {
                if errors.is_empty() {
                    None
                } else {
                    Some(errors.remove(0))
                }
            })
            .unwrap_or_else(|| ApiError::new(ERROR_UNEXPECTED, body))
    } else {
        ApiError::new(ERROR_UNEXPECTED, body)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FleetwireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_body_parses_as_single_error() {
        let error = parse_error_body(r#"{"error":"invalid_request","error_description":"bad"}"#);
        assert_eq!(error.error.as_deref(), Some("invalid_request"));
        assert_eq!(error.error_description.as_deref(), Some("bad"));
    }

    #[test]
    fn array_body_takes_first_element() {
        let error =
            parse_error_body(r#"[{"error":"first","code":400},{"error":"second","code":500}]"#);
        assert_eq!(error.error.as_deref(), Some("first"));
        assert_eq!(error.code, Some(400));
    }

    #[test]
    fn plain_text_body_wraps_into_synthetic_error() {
        let error = parse_error_body("Bad Gateway");
        assert_eq!(error.error.as_deref(), Some(ERROR_UNEXPECTED));
        assert_eq!(error.error_description.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn malformed_json_object_wraps_into_synthetic_error() {
        let error = parse_error_body("{not json");
        assert_eq!(error.error.as_deref(), Some(ERROR_UNEXPECTED));
    }

    #[test]
    fn empty_array_wraps_into_synthetic_error() {
        let error = parse_error_body("[]");
        assert_eq!(error.error.as_deref(), Some(ERROR_UNEXPECTED));
    }

    #[test]
    fn expired_token_matches_on_code_or_description() {
        let by_code = ApiError::new(ERROR_TOKEN_EXPIRED, "whatever");
        assert!(by_code.is_token_expired());

        let by_description = ApiError::new("invalid_token", ERROR_DESCRIPTION_TOKEN_EXPIRED);
        assert!(by_description.is_token_expired());

        let other = ApiError::new("invalid_token", "Token was revoked");
        assert!(!other.is_token_expired());
    }

    #[test]
    fn error_details_round_trip() {
        let body = r#"{"error":"validation_failed","error_description":"invalid fields","error_details":[{"field":"email","constraint":"format","description":"not an email"}],"code":400}"#;
        let error = parse_error_body(body);
        let details = error.error_details.expect("details");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field.as_deref(), Some("email"));
    }
}

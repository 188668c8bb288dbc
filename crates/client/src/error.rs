//! Error types for the Splunk client.
//!
//! Responsibilities:
//! - Normalize non-2xx responses into [`ClientError::ApiError`] carrying the
//!   status code, status text and response body.
//! - Classify errors for callers (`is_not_found`, `is_auth_error`).
//!
//! Does NOT handle:
//! - Retrying failed requests; every operation is a single request.

use thiserror::Error;

use crate::values::ValuesError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from Splunk.
    #[error("API error ({status} {status_text}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        status_text: String,
        url: String,
        message: String,
        body: String,
        request_id: Option<String>,
    },

    /// Invalid response format from Splunk.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request body could not be encoded.
    #[error("Failed to encode request values: {0}")]
    Values(#[from] ValuesError),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is an HTTP 404 from Splunk.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, request_id: Option<&str>) -> ClientError {
        ClientError::ApiError {
            status,
            status_text: "Not Found".to_string(),
            url: "https://localhost:8089/services/data/indexes/missing".to_string(),
            message: "ERROR: Could not find object id=missing".to_string(),
            body: "{}".to_string(),
            request_id: request_id.map(str::to_string),
        }
    }

    #[test]
    fn test_is_not_found() {
        assert!(api_error(404, None).is_not_found());
        assert!(!api_error(400, None).is_not_found());
        assert!(!ClientError::InvalidResponse("x".to_string()).is_not_found());
    }

    #[test]
    fn test_is_auth_error() {
        assert!(ClientError::AuthFailed("test".to_string()).is_auth_error());
        assert!(api_error(401, None).is_auth_error());
        assert!(api_error(403, None).is_auth_error());
        assert!(!api_error(500, None).is_auth_error());
    }

    #[test]
    fn test_api_error_display_includes_status_text_and_request_id() {
        let rendered = api_error(404, Some("abc-123")).to_string();
        assert!(rendered.contains("404 Not Found"));
        assert!(rendered.contains("Could not find object"));
        assert!(rendered.ends_with("[Request ID: abc-123]"));
    }

    #[test]
    fn test_api_error_display_without_request_id() {
        let rendered = api_error(404, None).to_string();
        assert!(!rendered.contains("Request ID"));
    }
}

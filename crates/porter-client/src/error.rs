//! Error types for the Porter API client
//!
//! Every operation fails with an [`ApiError`]. The variants keep transport
//! failures apart from rejections by the backend, so callers can tell
//! "server unreachable" from "wrong password".

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, TLS, timeout)
    #[error("Network request failed: {0}. Check that the Porter server is running and the server URL is correct.")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Server rejected the request ({status}): {message}")]
    Status { status: u16, message: String },

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body did not match the expected shape
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A `{name}` placeholder had no value
    #[error("Missing path parameter '{param}' for '{template}'")]
    MissingPathParam {
        param: String,
        template: &'static str,
    },

    #[error("Malformed path template '{0}'")]
    InvalidPathTemplate(&'static str),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check PORTER_SERVER_URL and related settings.")]
    Config(String),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// True when no response was received at all
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status of a rejected request, if there was one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend refused the session or credentials.
    ///
    /// The auth middleware answers 403 for a missing session, so both 401
    /// and 403 count.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_helpers() {
        let err = ApiError::status(StatusCode::FORBIDDEN, "Forbidden");
        assert_eq!(err.status_code(), Some(403));
        assert!(err.is_unauthorized());
        assert!(!err.is_network());
        assert_eq!(err.to_string(), "Server rejected the request (403): Forbidden");
    }

    #[test]
    fn test_non_auth_status_is_not_unauthorized() {
        let err = ApiError::status(StatusCode::UNPROCESSABLE_ENTITY, "email already taken");
        assert_eq!(err.status_code(), Some(422));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_missing_param_message() {
        let err = ApiError::MissingPathParam {
            param: "id".to_string(),
            template: "/api/users/{id}",
        };
        assert_eq!(
            err.to_string(),
            "Missing path parameter 'id' for '/api/users/{id}'"
        );
        assert_eq!(err.status_code(), None);
    }
}

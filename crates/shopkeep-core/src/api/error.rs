use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("{0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Fallback when a 401 carries no usable body
const UNAUTHORIZED_FALLBACK: &str = "Unauthorized - session is no longer valid";

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    /// Pull the human-readable message out of an error payload.
    /// Backends answer with `{"message": "..."}` or `{"error": "..."}`;
    /// anything else falls back to the (truncated) raw body.
    fn extract_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return Some(msg.to_string());
                }
            }
        }
        None
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::extract_message(body);
        let fallback = || {
            if body.is_empty() {
                format!("Status {}", status)
            } else {
                Self::truncate_body(body)
            }
        };

        match status.as_u16() {
            401 => ApiError::Unauthorized(
                message.unwrap_or_else(|| UNAUTHORIZED_FALLBACK.to_string()),
            ),
            403 => ApiError::AccessDenied(message.unwrap_or_else(fallback)),
            404 => ApiError::NotFound(message.unwrap_or_else(fallback)),
            500..=599 => ApiError::Server(message.unwrap_or_else(fallback)),
            _ => ApiError::Api(message.unwrap_or_else(fallback)),
        }
    }

    /// Classify a transport-level failure, keeping timeouts distinct.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(error)
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

//! Error types for the species API client

use std::fmt;

/// Errors that can occur when talking to the species API
#[derive(Debug)]
pub enum ApiError {
    /// HTTP transport failed
    Http(reqwest::Error),
    /// The server answered with a non-success status; carries the body text
    /// or a generic fallback when the body was empty
    Api(String),
    /// Failed to parse a success response body
    Json(serde_json::Error),
}

impl ApiError {
    /// The human-readable message to surface to the user
    pub fn message(&self) -> String {
        match self {
            Self::Http(e) => e.to_string(),
            Self::Api(msg) => msg.clone(),
            Self::Json(e) => e.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "species API HTTP error: {}", e),
            Self::Api(msg) => write!(f, "species API error: {}", msg),
            Self::Json(e) => write!(f, "species API JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for species API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_server_text() {
        let err = ApiError::Api("Invalid sort field".to_string());
        assert_eq!(err.message(), "Invalid sort field");
        assert_eq!(err.to_string(), "species API error: Invalid sort field");
    }
}

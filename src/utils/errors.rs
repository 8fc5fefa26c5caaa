//! Error handling for QuoteFlow
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the QuoteFlow application
#[derive(Error, Debug)]
pub enum QuoteFlowError {
    #[error("Quote API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing profile field: {field}")]
    MissingField { field: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Quote backend API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API request timed out")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Quote service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for QuoteFlow operations
pub type Result<T> = std::result::Result<T, QuoteFlowError>;

/// Result type alias for quote backend operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl QuoteFlowError {
    /// Check if the error is recoverable (a retry could succeed)
    pub fn is_recoverable(&self) -> bool {
        match self {
            QuoteFlowError::Api(api) => match api {
                ApiError::RequestFailed(_) => true,
                ApiError::Timeout => true,
                ApiError::InvalidResponse(_) => false,
                ApiError::ServiceUnavailable => true,
            },
            QuoteFlowError::Config(_) => false,
            QuoteFlowError::MissingField { .. } => false,
            QuoteFlowError::Http(_) => true,
            QuoteFlowError::Serialization(_) => false,
            QuoteFlowError::Io(_) => true,
            QuoteFlowError::UrlParse(_) => false,
            QuoteFlowError::InvalidInput(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_are_recoverable() {
        assert!(QuoteFlowError::Api(ApiError::Timeout).is_recoverable());
        assert!(QuoteFlowError::Api(ApiError::ServiceUnavailable).is_recoverable());
        assert!(!QuoteFlowError::Api(ApiError::InvalidResponse("bad json".to_string())).is_recoverable());
    }

    #[test]
    fn test_input_errors_are_not_recoverable() {
        assert!(!QuoteFlowError::InvalidInput("not a number".to_string()).is_recoverable());
        assert!(!QuoteFlowError::MissingField { field: "email".to_string() }.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = QuoteFlowError::MissingField { field: "full_name".to_string() };
        assert_eq!(err.to_string(), "Missing profile field: full_name");

        let err = QuoteFlowError::Api(ApiError::Timeout);
        assert_eq!(err.to_string(), "Quote API error: API request timed out");
    }
}

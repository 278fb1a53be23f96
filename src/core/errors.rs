//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Endpoint answered with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Endpoint answered, but with nothing to show
    #[error("No translation found")]
    EmptyResponse,

    /// A response field had an unexpected shape
    #[error("Malformed response field `{field}`: {message}")]
    MalformedResponse {
        field: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    pub(crate) fn malformed(field: &str, message: impl Into<String>) -> Self {
        TranslationError::MalformedResponse {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Short classifier shown next to the error in the result list
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationError::ApiError { .. } => "ApiError",
            TranslationError::NetworkError { .. } | TranslationError::HttpError(_) => "NetworkError",
            TranslationError::EmptyResponse => "EmptyResponse",
            TranslationError::MalformedResponse { .. } | TranslationError::JsonError(_) => "FormatError",
            TranslationError::ConfigError { .. } => "ConfigError",
            TranslationError::IoError(_) => "IoError",
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

//! Centralized error handling.
//!
//! Provides a unified error type for the entire application and the
//! transient/permanent classification used by the HTTP retry layer.

use thiserror::Error;

use crate::config::RETRYABLE_STATUS_CODES;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // Transport errors from reqwest (timeouts, connect failures, decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Non-success status from a remote service
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    // Unexpected payload shape from the source API
    #[error("Unexpected API response: {0}")]
    Api(String),

    // Destination store failures
    #[error("Store error: {0}")]
    Store(String),

    // Background job / scheduler failures
    #[error("Job error: {0}")]
    Job(String),
}

impl AppError {
    /// Whether a retry is worthwhile for this error.
    ///
    /// Timeouts, connection failures, and throttling/server statuses are
    /// transient; everything else fails the request immediately.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Http(e) => e.is_timeout() || e.is_connect(),
            AppError::HttpStatus { status, .. } => RETRYABLE_STATUS_CODES.contains(status),
            _ => false,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        AppError::Api(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        AppError::Store(msg.into())
    }

    pub fn job(msg: impl Into<String>) -> Self {
        AppError::Job(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_and_throttle_statuses_are_transient() {
        for status in [408, 429, 500, 502, 503, 504] {
            let err = AppError::HttpStatus {
                status,
                url: "https://example.test/corretores".to_string(),
            };
            assert!(err.is_transient(), "status {status} should be transient");
        }
    }

    #[test]
    fn client_errors_are_permanent() {
        for status in [400, 401, 403, 404, 422] {
            let err = AppError::HttpStatus {
                status,
                url: "https://example.test/corretores".to_string(),
            };
            assert!(!err.is_transient(), "status {status} should be permanent");
        }
    }

    #[test]
    fn config_and_store_errors_are_permanent() {
        assert!(!AppError::config("missing API_TOKEN").is_transient());
        assert!(!AppError::store("batch rejected").is_transient());
    }
}

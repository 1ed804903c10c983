//! Core error types for Holdfolio.
//!
//! Aggregation and formatting are total and never fail; errors only come
//! from loading holdings and from reading configuration values.

use holdfolio_holdings_api::{ApiError, ErrorCategory};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch holdings: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Failure category when the error came from the holdings endpoint.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Api(e) => Some(e.category()),
            _ => None,
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_converts() {
        let err: Error = ApiError::Server {
            status: 500,
            body: None,
        }
        .into();
        assert_eq!(err.category(), Some(ErrorCategory::ServerStatus));
        assert_eq!(
            err.to_string(),
            "Failed to fetch holdings: Server returned HTTP 500"
        );
    }

    #[test]
    fn test_config_error_has_no_category() {
        let err = Error::InvalidConfigValue("HF_DIGIT_GROUPING=weird".to_string());
        assert_eq!(err.category(), None);
        assert_eq!(
            err.user_message(),
            "Invalid configuration value: HF_DIGIT_GROUPING=weird"
        );
    }
}

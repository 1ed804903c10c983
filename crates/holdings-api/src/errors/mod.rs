//! Error types and failure classification for the holdings API crate.
//!
//! This module provides:
//! - [`ApiError`]: The error enum for every fetch failure
//! - [`ErrorCategory`]: Coarse classification used when reporting to the user

mod category;

pub use category::ErrorCategory;

use thiserror::Error;

/// Generic notice shown to the user for any failed fetch.
pub const GENERIC_FAILURE_NOTICE: &str = "Something went wrong";

/// Errors that can occur while fetching holdings.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The endpoint's base URL and path do not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The host could not be reached (DNS failure, refused connection, no route).
    #[error("Network unreachable: {0}")]
    Unreachable(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a status outside 200..=299.
    #[error("Server returned HTTP {status}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Raw response body, if it could be read
        body: Option<String>,
    },

    /// The response body was not a valid holdings payload.
    #[error("Failed to decode response: {0}")]
    Decoding(String),

    /// Any other failure in the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Returns the category of this failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdfolio_holdings_api::errors::{ApiError, ErrorCategory};
    ///
    /// let error = ApiError::Server { status: 503, body: None };
    /// assert_eq!(error.category(), ErrorCategory::ServerStatus);
    ///
    /// let error = ApiError::Timeout;
    /// assert_eq!(error.category(), ErrorCategory::Connectivity);
    /// ```
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUrl(_) | Self::Unreachable(_) | Self::Timeout | Self::Transport(_) => {
                ErrorCategory::Connectivity
            }
            Self::Server { .. } => ErrorCategory::ServerStatus,
            Self::Decoding(_) => ErrorCategory::PayloadDecoding,
        }
    }

    /// HTTP status code, for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for display: the generic notice plus a short hint.
    pub fn user_message(&self) -> String {
        format!("{}. {}", GENERIC_FAILURE_NOTICE, self.category().hint())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unreachable(err.to_string())
        } else if err.is_decode() {
            ApiError::Decoding(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decoding(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

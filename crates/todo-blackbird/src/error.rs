//! Error types for the ToDo API client
//!
//! Every failure the client can observe is one variant of [`Error`]: statuses
//! returned by the server, contract mismatches found by
//! [`Expectation::verify`](crate::contract::Expectation::verify), and
//! transport or configuration problems on the client side.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ToDo API client.
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected the request as invalid (400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message extracted from the response body
        message: String,
    },

    /// The requested item does not exist (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflict error (409).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The server failed while handling the request (500+).
    #[error("Internal server error (status {status}): {message}")]
    InternalServerError {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Any other non-success status.
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// The response carried a status other than the expected one.
    #[error("expected status {expected}, got {actual}: {reason}")]
    UnexpectedStatus {
        /// Expected status code
        expected: u16,
        /// Status code actually returned
        actual: u16,
        /// Why the expected status was expected
        reason: String,
        /// Response body, for diagnosis
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("expected {expected} body, got {actual_len} bytes: {reason}")]
    UnexpectedBody {
        /// Description of the expected body
        expected: &'static str,
        /// Length of the body actually returned
        actual_len: usize,
        /// Why the body was expected to look that way
        reason: String,
    },

    /// Failed to decode an API response.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Request rejected locally before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an error from a non-success HTTP status and its body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body);

        match status {
            400 => Error::BadRequest { message },
            404 => Error::NotFound(message),
            409 => Error::Conflict(message),
            s if s >= 500 => Error::InternalServerError { status, message },
            _ => Error::ApiError { status, message },
        }
    }

    /// HTTP status code carried by this error, if it came from the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest { .. } => Some(400),
            Error::NotFound(_) => Some(404),
            Error::Conflict(_) => Some(409),
            Error::InternalServerError { status, .. } | Error::ApiError { status, .. } => {
                Some(*status)
            }
            Error::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }

    /// Whether this error is a contract mismatch rather than a transport failure.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedStatus { .. } | Error::UnexpectedBody { .. }
        )
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::HttpClient(err.to_string())
        } else {
            Error::Connection(err.to_string())
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// The server does not document its error shape, so common JSON keys are
/// tried in turn before falling back to the raw text.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error", "title"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(String::from))
        })
        .unwrap_or_else(|| body.to_string())
}

//! Structured logging for requests, responses and contract cases
//!
//! Every HTTP exchange is logged through this module so that the field names
//! stay consistent across the client and the suite runner.

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Full request URL
    pub url: String,
    /// Request body size in bytes (optional)
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body_size: None,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            url = %self.url,
            body_size = self.body_size,
            "Sending HTTP request"
        );
    }

    /// Log a request that never produced a response
    pub fn log_transport_error(&self, elapsed: Duration, error: &str) {
        warn!(
            method = %self.method,
            url = %self.url,
            elapsed_ms = elapsed.as_millis(),
            error = %error,
            "HTTP request failed before a response arrived"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, body_size: usize, elapsed: Duration) -> Self {
        Self {
            status,
            body_size,
            elapsed,
        }
    }

    /// Log the response, at `info` for 2xx and `warn` otherwise.
    ///
    /// Non-2xx is not necessarily a failure here: negative contract cases
    /// expect it.
    pub fn log(&self, request: &RequestMetadata) {
        if (200..300).contains(&self.status) {
            info!(
                method = %request.method,
                url = %request.url,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "HTTP request succeeded"
            );
        } else {
            warn!(
                method = %request.method,
                url = %request.url,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "HTTP request returned non-success status"
            );
        }
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Log the outcome of one contract case
pub fn log_case_outcome(name: &str, status: Option<u16>, elapsed: Duration, failure: Option<&str>) {
    match failure {
        None => info!(
            case = %name,
            status = status,
            elapsed_ms = elapsed.as_millis(),
            "Contract case passed"
        ),
        Some(reason) => warn!(
            case = %name,
            status = status,
            elapsed_ms = elapsed.as_millis(),
            reason = %reason,
            "Contract case failed"
        ),
    }
}

/// Log the summary of a suite run
pub fn log_suite_summary(passed: usize, failed: usize, elapsed: Duration) {
    info!(
        passed,
        failed,
        elapsed_ms = elapsed.as_millis(),
        "Contract suite finished"
    );
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "trace")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .is_ok()
}

//! HTTP layer: one request in, one response out
//!
//! There is no retry or rate limiting here. Every call is a single exchange
//! and the response is handed back whatever its status.

pub use request::RequestBuilder;
pub use response::Response;

mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

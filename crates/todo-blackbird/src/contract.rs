//! Assertions on API responses
//!
//! An [`Expectation`] is the "check" half of a contract case: the status the
//! server must return, what the body must look like, and a sentence saying
//! why. [`Expectation::verify`] turns a mismatch into an [`Error`] whose
//! message is fit to print as a test failure.
//!
//! # Example
//!
//! ```rust
//! use todo_blackbird::contract::{BodyExpectation, Expectation};
//! use todo_blackbird::http::StatusCode;
//!
//! let expectation = Expectation::status(StatusCode::NOT_FOUND)
//!     .because("the API should return 404 when the item does not exist");
//!
//! assert_eq!(expectation.body(), BodyExpectation::Any);
//! ```

use crate::error::{Error, Result};
use crate::http::{Response, StatusCode};
use std::fmt;

/// What the response body must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyExpectation {
    /// No constraint.
    Any,
    /// At least one byte.
    NonEmpty,
    /// Zero bytes.
    Empty,
}

impl BodyExpectation {
    fn holds_for(self, body: &[u8]) -> bool {
        match self {
            BodyExpectation::Any => true,
            BodyExpectation::NonEmpty => !body.is_empty(),
            BodyExpectation::Empty => body.is_empty(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            BodyExpectation::Any => "any",
            BodyExpectation::NonEmpty => "a non-empty",
            BodyExpectation::Empty => "an empty",
        }
    }
}

/// Expected status and body for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    status: StatusCode,
    body: BodyExpectation,
    reason: String,
}

impl Expectation {
    /// Expect `status`, with no constraint on the body.
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: BodyExpectation::Any,
            reason: format!("the API should return {}", status),
        }
    }

    /// 200 with a non-empty body.
    pub fn ok_with_body() -> Self {
        Self::status(StatusCode::OK).non_empty_body()
    }

    /// 201 with a non-empty body.
    pub fn created_with_body() -> Self {
        Self::status(StatusCode::CREATED).non_empty_body()
    }

    /// 204 with an empty body.
    pub fn no_content() -> Self {
        Self::status(StatusCode::NO_CONTENT).empty_body()
    }

    /// Require at least one body byte.
    pub fn non_empty_body(mut self) -> Self {
        self.body = BodyExpectation::NonEmpty;
        self
    }

    /// Require an empty body.
    pub fn empty_body(mut self) -> Self {
        self.body = BodyExpectation::Empty;
        self
    }

    /// Replace the sentence reported on failure.
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Expected status code.
    pub fn expected_status(&self) -> StatusCode {
        self.status
    }

    /// Expected body shape.
    pub fn body(&self) -> BodyExpectation {
        self.body
    }

    /// Sentence reported on failure.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Check `response` against this expectation.
    ///
    /// The status is checked first; the body only once the status matches.
    ///
    /// # Errors
    ///
    /// [`Error::UnexpectedStatus`] or [`Error::UnexpectedBody`].
    pub fn verify(&self, response: &Response) -> Result<()> {
        if response.status() != self.status {
            return Err(Error::UnexpectedStatus {
                expected: self.status.as_u16(),
                actual: response.status().as_u16(),
                reason: self.reason.clone(),
                body: response.text_lossy(),
            });
        }

        if !self.body.holds_for(response.body()) {
            return Err(Error::UnexpectedBody {
                expected: self.body.describe(),
                actual_len: response.body().len(),
                reason: self.reason.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body {
            BodyExpectation::Any => write!(f, "{}", self.status),
            body => write!(f, "{} with {} body", self.status, body.describe()),
        }
    }
}

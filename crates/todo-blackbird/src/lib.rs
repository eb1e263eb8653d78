//! # todo-blackbird
//!
//! Black-box contract client for the Blackbird ToDo HTTP API:
//! - Typed access to every endpoint (`ToDo`, `ToDoCreate`, `ToDoUpdate`)
//! - Raw responses for asserting on status codes and bodies
//! - A catalogue of the API's positive and negative contract cases
//! - A sequential runner that reports each case's outcome
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use todo_blackbird::{Client, ToDoItem};
//! use todo_blackbird::contract::Expectation;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(todo_blackbird::DEFAULT_BASE_URL)?;
//!
//!     let response = client.todos()
//!         .with_raw_response()
//!         .create(&ToDoItem::new("Test Task", "Test Description"))
//!         .await?;
//!
//!     Expectation::created_with_body().verify(&response)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use crate::client::{Client, ClientBuilder};
pub use crate::config::{ClientConfig, Fixtures};
pub use crate::contract::{BodyExpectation, Expectation};
pub use crate::error::{Error, Result};
pub use crate::http::Response;
pub use crate::types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod suite;
pub mod types;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use todo_blackbird::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Error, Fixtures, Result,
        contract::{BodyExpectation, Expectation},
        http::{Response, StatusCode},
        suite::{Polarity, Suite},
        types::{StatusUpdate, ToDoItem},
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL of the deployed ToDo API
pub const DEFAULT_BASE_URL: &str = "https://todo-blackbird-3.onrender.com/api/";

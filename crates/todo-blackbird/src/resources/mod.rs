//! API resource endpoints
//!
//! The server splits its routes across three controllers (`ToDo`,
//! `ToDoCreate`, `ToDoUpdate`); the client presents them as one resource.

pub mod todos;

pub use todos::{ToDos, ToDosRaw};

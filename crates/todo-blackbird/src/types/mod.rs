//! Wire types for the ToDo API
//!
//! Field names on the wire follow the server exactly: `id` is lowercase while
//! every other field is capitalised. The Rust fields are snake_case and carry
//! explicit `serde` renames.

pub use todo::*;

pub mod todo;

//! Core data structures for Quill queries.
//!
//! Two pieces:
//! - **Value** (`value`): the JSON tagged union filters consume and produce
//! - **Scope** (`scope`): variable bindings with an explicit parent chain
//!
//! Engine logic (filters, builtins, the regex engine) lives in `quill-vm`.

pub mod scope;
pub mod value;

#[cfg(test)]
mod value_tests;

pub use scope::Scope;
pub use value::{Kind, Value};

//! Builtin operations and their dispatch table.
//!
//! Builtins are looked up by exact (name, arity) key in a table populated
//! at startup. Each builtin receives its arguments as unevaluated filters
//! and is responsible for evaluating them against the shared input.

use std::collections::HashMap;

use quill_core::{Kind, Scope, Value};

use super::error::EvalError;
use super::filter::Filter;
use super::match_impl::MatchImpl;

/// A named builtin operation.
pub trait Builtin {
    /// Apply the builtin to `input` with unevaluated argument filters.
    ///
    /// Returns the concatenated output stream, or fails the whole call.
    fn apply(
        &self,
        scope: &Scope,
        args: &[&dyn Filter],
        input: &Value,
    ) -> Result<Vec<Value>, EvalError>;
}

/// Dispatch table mapping (name, arity) to a builtin implementation.
pub struct BuiltinRegistry {
    entries: HashMap<(String, usize), Box<dyn Builtin>>,
}

impl BuiltinRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry with the standard builtins installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("_match_impl", 3, Box::new(MatchImpl::new()));
        registry
    }

    /// Register a builtin under an exact (name, arity) key.
    pub fn register(&mut self, name: impl Into<String>, arity: usize, builtin: Box<dyn Builtin>) {
        self.entries.insert((name.into(), arity), builtin);
    }

    /// Look up a builtin by name and arity.
    pub fn get(&self, name: &str, arity: usize) -> Option<&dyn Builtin> {
        self.entries
            .get(&(name.to_owned(), arity))
            .map(|b| b.as_ref())
    }

    /// Apply the builtin registered under `(name, args.len())`.
    pub fn apply(
        &self,
        name: &str,
        scope: &Scope,
        args: &[&dyn Filter],
        input: &Value,
    ) -> Result<Vec<Value>, EvalError> {
        let builtin = self
            .get(name, args.len())
            .ok_or_else(|| EvalError::Undefined {
                name: name.to_owned(),
                arity: args.len(),
            })?;
        builtin.apply(scope, args, input)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Check the input value's kind before doing any other work.
pub fn check_input(
    function: &'static str,
    input: &Value,
    accepted: &[Kind],
) -> Result<(), EvalError> {
    if accepted.contains(&input.kind()) {
        return Ok(());
    }
    Err(EvalError::InputType {
        function,
        expected: kind_list(accepted),
        actual: input.kind(),
    })
}

/// Check an argument value's kind at its point of use. `position` is 1-based.
pub fn check_argument(
    function: &'static str,
    position: usize,
    value: &Value,
    accepted: &[Kind],
) -> Result<(), EvalError> {
    if accepted.contains(&value.kind()) {
        return Ok(());
    }
    Err(EvalError::ArgumentType {
        function,
        position,
        expected: kind_list(accepted),
        actual: value.kind(),
    })
}

fn kind_list(kinds: &[Kind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
    names.join(" or ")
}

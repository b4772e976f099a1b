//! Variable bindings for query evaluation.
//!
//! Scopes form a chain through explicit parent references. A lookup walks
//! the chain innermost-first, so child bindings shadow parent bindings.
//! The evaluation core only ever reads scopes; bindings are installed by
//! the caller before evaluation begins.

use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// An environment of named value bindings with an optional parent.
#[derive(Debug, Default)]
pub struct Scope {
    parent: Option<Rc<Scope>>,
    vars: HashMap<String, Value>,
}

impl Scope {
    /// Create an empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty child scope whose lookups fall back to `self`.
    pub fn child(self: &Rc<Self>) -> Self {
        Scope {
            parent: Some(Rc::clone(self)),
            vars: HashMap::new(),
        }
    }

    /// Bind a variable in this scope, shadowing any parent binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Look up a variable, walking the parent chain innermost-first.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.vars.get(name) {
                return Some(value);
            }
            scope = scope.parent.as_deref()?;
        }
    }
}

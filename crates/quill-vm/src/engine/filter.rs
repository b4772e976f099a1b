//! The filter contract: one input value in, a stream of values out.

use quill_core::{Scope, Value};

use super::error::EvalError;

/// A callable unit of the query language.
///
/// Applying a filter to an input yields an ordered, finite sequence of
/// output values. Filters are immutable once constructed; composing them
/// (feeding one filter's outputs to another) is the caller's concern.
pub trait Filter {
    fn apply(&self, scope: &Scope, input: &Value) -> Result<Vec<Value>, EvalError>;
}

/// Yields the input unchanged.
pub struct Identity;

impl Filter for Identity {
    fn apply(&self, _scope: &Scope, input: &Value) -> Result<Vec<Value>, EvalError> {
        Ok(vec![input.clone()])
    }
}

/// Yields a fixed constant, ignoring the input.
pub struct Literal(pub Value);

impl Filter for Literal {
    fn apply(&self, _scope: &Scope, _input: &Value) -> Result<Vec<Value>, EvalError> {
        Ok(vec![self.0.clone()])
    }
}

/// Yields each element of a fixed sequence in order.
///
/// An empty sequence yields nothing, which propagates emptiness through
/// any builtin that receives this filter as an argument.
pub struct Values(pub Vec<Value>);

impl Filter for Values {
    fn apply(&self, _scope: &Scope, _input: &Value) -> Result<Vec<Value>, EvalError> {
        Ok(self.0.clone())
    }
}

//! Evaluation core for Quill queries.
//!
//! This crate provides the machinery that applies named builtin operations
//! to a JSON input value. Every operation may yield zero, one, or many
//! output values; multi-argument builtins combine their argument streams
//! by nested cartesian iteration.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    Builtin, BuiltinRegistry, Capture, CharIndex, CompiledPattern, EvalError, Filter, Identity,
    Literal, MatchImpl, MatchResult, PatternCache, Values, find_matches, test_matches,
};

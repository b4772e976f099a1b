//! Builtin application protocol and the regex match/test engine.
//!
//! Builtins receive their arguments as unevaluated filters, evaluate each
//! one against the shared input, and iterate the cartesian product of the
//! resulting streams. The regex builtin bridges byte-oriented searching to
//! the codepoint offsets the query language exposes.

mod args;
mod builtin;
mod charindex;
mod error;
mod filter;
mod match_impl;
mod matcher;
mod pattern;

#[cfg(test)]
mod builtin_tests;
#[cfg(test)]
mod charindex_tests;

pub use args::{evaluate_args, for_each_combination};
pub use builtin::{Builtin, BuiltinRegistry, check_argument, check_input};
pub use charindex::CharIndex;
pub use error::EvalError;
pub use filter::{Filter, Identity, Literal, Values};
pub use match_impl::MatchImpl;
pub use matcher::{Capture, MatchResult, find_matches, test_matches};
pub use pattern::{CompiledPattern, PatternCache};

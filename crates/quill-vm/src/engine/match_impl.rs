//! The regex match/test builtin (`_match_impl/3`).
//!
//! Arguments are (regex, modifiers, test-flag). The modifiers argument may
//! be null for no modifiers. With the test flag set, each combination
//! yields a plain boolean; otherwise it yields the array of match objects.

use std::sync::Arc;

use quill_core::{Kind, Scope, Value};

use super::args::{evaluate_args, for_each_combination};
use super::builtin::{Builtin, check_argument, check_input};
use super::charindex::CharIndex;
use super::error::EvalError;
use super::filter::Filter;
use super::matcher::{find_matches, test_matches};
use super::pattern::PatternCache;

const NAME: &str = "_match_impl/3";

/// Builtin implementing regex match and test over a string input.
pub struct MatchImpl {
    cache: Arc<PatternCache>,
}

impl MatchImpl {
    /// Create the builtin with its own pattern cache.
    pub fn new() -> Self {
        Self {
            cache: Arc::new(PatternCache::new()),
        }
    }

    /// Create the builtin sharing an externally owned pattern cache.
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self { cache }
    }
}

impl Default for MatchImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtin for MatchImpl {
    fn apply(
        &self,
        scope: &Scope,
        args: &[&dyn Filter],
        input: &Value,
    ) -> Result<Vec<Value>, EvalError> {
        check_input(NAME, input, &[Kind::String])?;
        let text = input.as_str().unwrap_or_default();
        let bytes = text.as_bytes();
        let index = CharIndex::build(bytes)?;

        let streams = evaluate_args(scope, args, input)?;

        let mut out = Vec::new();
        for_each_combination(&streams, |combination| {
            let (regex, modifiers, test) = (combination[0], combination[1], combination[2]);
            check_argument(NAME, 1, regex, &[Kind::String])?;
            check_argument(NAME, 2, modifiers, &[Kind::String, Kind::Null])?;
            check_argument(NAME, 3, test, &[Kind::Bool])?;

            let pattern = self
                .cache
                .get_or_compile(regex.as_str().unwrap_or_default(), modifiers.as_str())?;

            if test.as_bool().unwrap_or_default() {
                out.push(Value::Bool(test_matches(&pattern, bytes)));
            } else {
                let results = find_matches(&pattern, bytes, &index);
                out.push(Value::Array(
                    results.iter().map(|m| m.to_value()).collect(),
                ));
            }
            Ok(())
        })?;

        Ok(out)
    }
}

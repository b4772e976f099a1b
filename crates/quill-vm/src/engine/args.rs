//! Multi-valued argument application.
//!
//! Every builtin evaluates its argument filters independently against the
//! same input, then invokes its body once per element of the cartesian
//! product of the resulting streams. The first argument is the outermost
//! loop, the last the innermost, so outputs concatenate in left-to-right
//! discovery order.

use quill_core::{Scope, Value};

use super::error::EvalError;
use super::filter::Filter;

/// Evaluate each argument filter against the original, unmodified input.
///
/// Returns one ordered (possibly empty) stream per argument. A failing
/// argument fails the whole call.
pub fn evaluate_args(
    scope: &Scope,
    args: &[&dyn Filter],
    input: &Value,
) -> Result<Vec<Vec<Value>>, EvalError> {
    args.iter().map(|arg| arg.apply(scope, input)).collect()
}

/// Invoke `body` once per combination of the argument streams.
///
/// Iteration order is nested with the first stream outermost. If any
/// stream is empty the product is empty and `body` is never invoked;
/// with zero streams `body` runs exactly once with an empty combination.
pub fn for_each_combination<F>(streams: &[Vec<Value>], mut body: F) -> Result<(), EvalError>
where
    F: FnMut(&[&Value]) -> Result<(), EvalError>,
{
    if streams.iter().any(|s| s.is_empty()) {
        return Ok(());
    }

    // Odometer over the stream indices; the last position ticks fastest.
    let mut indices = vec![0usize; streams.len()];
    loop {
        let combination: Vec<&Value> = indices
            .iter()
            .zip(streams)
            .map(|(&i, stream)| &stream[i])
            .collect();
        body(&combination)?;

        let mut position = streams.len();
        loop {
            if position == 0 {
                return Ok(());
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < streams[position].len() {
                break;
            }
            indices[position] = 0;
        }
    }
}

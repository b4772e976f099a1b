//! Errors that can occur during builtin evaluation.

use quill_core::Kind;

/// Terminal failure of a builtin call. No partial output is produced;
/// the calling driver decides whether to surface or intercept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Input value has the wrong JSON kind for the builtin.
    #[error("{function} input must be {expected}, but got {actual}")]
    InputType {
        function: &'static str,
        expected: String,
        actual: Kind,
    },

    /// Argument value has the wrong JSON kind. `position` is 1-based.
    #[error("{function} argument {position} must be {expected}, but got {actual}")]
    ArgumentType {
        function: &'static str,
        position: usize,
        expected: String,
        actual: Kind,
    },

    /// Regex source failed to compile.
    #[error("invalid regex {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    /// Modifier string contained a letter the engine does not define.
    #[error("{0:?} is not a valid modifier letter")]
    Modifier(char),

    /// Byte sequence is not valid UTF-8.
    #[error("invalid utf-8 byte 0x{byte:02x} at offset {offset}")]
    Encoding { byte: u8, offset: usize },

    /// No builtin registered under this name and arity.
    #[error("{name}/{arity} is not defined")]
    Undefined { name: String, arity: usize },
}

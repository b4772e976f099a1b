//! Regex pattern compilation and caching.
//!
//! A pattern compiles once per distinct (source, modifiers) pair into an
//! immutable `CompiledPattern` that is safe to share across threads. The
//! cache is insert-only: entries are never mutated after creation, so
//! concurrent readers need no coordination beyond the lock.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use regex::bytes::{Regex, RegexBuilder};

use super::error::EvalError;

/// A compiled regex with its modifier flags and capture-group name table.
#[derive(Debug)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    global: bool,
    /// Declared group names by group number; entry 0 is the whole match.
    names: Vec<Option<String>>,
}

impl CompiledPattern {
    /// Compile a regex source with an optional modifier string.
    ///
    /// Recognized letters, in any order: `g` (global search), `i`
    /// (case-insensitive), `x` (extended/free-spacing), `s` (dot matches
    /// newline), `m` (multiline anchors), `p` (both `s` and `m`). Any
    /// other letter fails with a modifier error naming it.
    pub fn compile(source: &str, modifiers: Option<&str>) -> Result<Self, EvalError> {
        let mut builder = RegexBuilder::new(source);
        let mut global = false;
        if let Some(modifiers) = modifiers {
            for letter in modifiers.chars() {
                match letter {
                    'g' => global = true,
                    'i' => {
                        builder.case_insensitive(true);
                    }
                    'x' => {
                        builder.ignore_whitespace(true);
                    }
                    's' => {
                        builder.dot_matches_new_line(true);
                    }
                    'm' => {
                        builder.multi_line(true);
                    }
                    'p' => {
                        builder.dot_matches_new_line(true);
                        builder.multi_line(true);
                    }
                    other => return Err(EvalError::Modifier(other)),
                }
            }
        }

        let regex = builder.build().map_err(|e| EvalError::Pattern {
            pattern: source.to_owned(),
            message: e.to_string(),
        })?;
        let names = regex
            .capture_names()
            .map(|name| name.map(str::to_owned))
            .collect();

        Ok(Self {
            source: source.to_owned(),
            regex,
            global,
            names,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether search repeats to find all non-overlapping matches.
    pub fn global(&self) -> bool {
        self.global
    }

    /// Number of capture groups, including the implicit whole-match group 0.
    pub fn group_count(&self) -> usize {
        self.names.len()
    }

    /// Declared name of capture group `index`, if any.
    pub fn group_name(&self, index: usize) -> Option<&str> {
        self.names.get(index)?.as_deref()
    }
}

/// Insert-only cache of compiled patterns keyed by (source, modifiers).
///
/// Compilation is deterministic, so a lost insertion race just recompiles
/// an identical pattern; whichever entry lands first is kept.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: RwLock<HashMap<(String, Option<String>), Arc<CompiledPattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the compiled pattern for (source, modifiers), compiling and
    /// inserting on first use.
    pub fn get_or_compile(
        &self,
        source: &str,
        modifiers: Option<&str>,
    ) -> Result<Arc<CompiledPattern>, EvalError> {
        let key = (source.to_owned(), modifiers.map(str::to_owned));

        if let Ok(entries) = self.entries.read()
            && let Some(pattern) = entries.get(&key)
        {
            return Ok(Arc::clone(pattern));
        }

        let pattern = Arc::new(CompiledPattern::compile(source, modifiers)?);
        if let Ok(mut entries) = self.entries.write() {
            return Ok(Arc::clone(
                entries.entry(key).or_insert_with(|| Arc::clone(&pattern)),
            ));
        }
        Ok(pattern)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

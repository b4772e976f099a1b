//! Single and global search over a compiled pattern.
//!
//! Searching operates on the input's raw byte encoding; all offsets and
//! lengths in the results are codepoint-based, converted through the
//! `CharIndex` built for the input.

use indexmap::IndexMap;

use quill_core::Value;

use super::charindex::CharIndex;
use super::pattern::CompiledPattern;

/// One match of a pattern, with codepoint offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Codepoint offset of the match start.
    pub offset: usize,
    /// Match length in codepoints.
    pub length: usize,
    /// The matched substring.
    pub string: String,
    /// Capture groups 1.., excluding the implicit whole-match group.
    pub captures: Vec<Capture>,
}

/// One capture group within a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    /// Codepoint offset, or -1 if the group did not participate.
    pub offset: i64,
    /// Length in codepoints (0 if the group did not participate).
    pub length: i64,
    /// Captured substring, absent if the group did not participate.
    pub string: Option<String>,
    /// Declared group name, absent for unnamed groups.
    pub name: Option<String>,
}

impl MatchResult {
    /// Build the structured output object field-by-field.
    pub fn to_value(&self) -> Value {
        let mut fields = IndexMap::new();
        fields.insert("offset".to_owned(), Value::Number(self.offset as f64));
        fields.insert("length".to_owned(), Value::Number(self.length as f64));
        fields.insert("string".to_owned(), Value::String(self.string.clone()));
        fields.insert(
            "captures".to_owned(),
            Value::Array(self.captures.iter().map(Capture::to_value).collect()),
        );
        Value::Object(fields)
    }
}

impl Capture {
    /// Build the capture object. Absent string/name fields are omitted.
    pub fn to_value(&self) -> Value {
        let mut fields = IndexMap::new();
        fields.insert("offset".to_owned(), Value::Number(self.offset as f64));
        fields.insert("length".to_owned(), Value::Number(self.length as f64));
        if let Some(string) = &self.string {
            fields.insert("string".to_owned(), Value::String(string.clone()));
        }
        if let Some(name) = &self.name {
            fields.insert("name".to_owned(), Value::String(name.clone()));
        }
        Value::Object(fields)
    }
}

/// One search over the full byte range: true iff any match exists.
///
/// No captures are extracted and no codepoint conversion happens; this is
/// the cheap path for test mode.
pub fn test_matches(pattern: &CompiledPattern, bytes: &[u8]) -> bool {
    pattern.regex().is_match(bytes)
}

/// Collect matches in discovery order, honoring the pattern's global flag.
///
/// The cursor starts at byte 0 and moves to each match's byte end. A
/// non-global pattern stops after the first match; a global pattern stops
/// when no match is found or the cursor reaches the byte length. A
/// zero-length match still advances the cursor one full character so the
/// search always makes progress. The search body runs unconditionally at
/// least once, so a zero-length input gets exactly one attempt.
pub fn find_matches(
    pattern: &CompiledPattern,
    bytes: &[u8],
    index: &CharIndex,
) -> Vec<MatchResult> {
    let byte_len = bytes.len();
    let mut matches = Vec::new();
    let mut cursor = 0usize;

    loop {
        let Some(caps) = pattern.regex().captures_at(bytes, cursor) else {
            break;
        };
        let whole = caps
            .get(0)
            .expect("group 0 is the whole match and always participates");

        matches.push(assemble(pattern, bytes, index, &caps, whole));

        if !pattern.global() {
            break;
        }
        let mut end = whole.end();
        if end == whole.start() {
            // Zero-length match: step over the character at the cursor,
            // otherwise the next search would find the same match forever.
            if end == byte_len {
                break;
            }
            end = index.next_boundary(end);
        }
        cursor = end;
        if cursor == byte_len {
            break;
        }
    }

    matches
}

fn assemble(
    pattern: &CompiledPattern,
    bytes: &[u8],
    index: &CharIndex,
    caps: &regex::bytes::Captures<'_>,
    whole: regex::bytes::Match<'_>,
) -> MatchResult {
    let begin = index.codepoint(whole.start());
    let end = index.codepoint(whole.end());

    let mut captures = Vec::with_capacity(pattern.group_count().saturating_sub(1));
    for group in 1..pattern.group_count() {
        let name = pattern.group_name(group).map(str::to_owned);
        match caps.get(group) {
            Some(m) => {
                let group_begin = index.codepoint(m.start());
                let group_end = index.codepoint(m.end());
                captures.push(Capture {
                    offset: group_begin as i64,
                    length: (group_end - group_begin) as i64,
                    string: Some(slice_text(bytes, m.start(), m.end())),
                    name,
                });
            }
            None => captures.push(Capture {
                offset: -1,
                length: 0,
                string: None,
                name,
            }),
        }
    }

    MatchResult {
        offset: begin,
        length: end - begin,
        string: slice_text(bytes, whole.start(), whole.end()),
        captures,
    }
}

/// Substring extraction uses byte offsets, not codepoint offsets. Match
/// boundaries from the engine fall on character boundaries of valid UTF-8.
fn slice_text(bytes: &[u8], start: usize, end: usize) -> String {
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

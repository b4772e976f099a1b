//! Byte-offset to codepoint-offset conversion.
//!
//! The regex engine reports byte offsets into the input's UTF-8 encoding,
//! but the query language indexes strings by Unicode codepoint. A
//! `CharIndex` maps every byte position of an input to the codepoint it
//! belongs to, in one linear pass.

use super::error::EvalError;

/// Codepoint offset for every byte position of an input.
///
/// `index[i]` is the codepoint offset of the character containing byte `i`;
/// one trailing entry at `index[byte_len]` holds the total codepoint count
/// so an end-of-match offset equal to the byte length maps correctly.
/// Entries are non-decreasing and start at zero.
#[derive(Debug)]
pub struct CharIndex(Vec<usize>);

impl CharIndex {
    /// Build the index by classifying each byte by its lead value.
    ///
    /// Continuation bytes (0x80..=0xBF) share the codepoint of the byte
    /// before them; 0xFE and 0xFF never occur in UTF-8 and fail with an
    /// encoding error.
    pub fn build(bytes: &[u8]) -> Result<Self, EvalError> {
        let mut index = Vec::with_capacity(bytes.len() + 1);
        let mut count = 0usize;
        for (offset, &byte) in bytes.iter().enumerate() {
            match byte {
                // ASCII or a multi-byte lead: starts a new codepoint.
                0x00..=0x7f | 0xc0..=0xfd => {
                    index.push(count);
                    count += 1;
                }
                // Continuation: same codepoint as the preceding byte.
                0x80..=0xbf => {
                    let previous = index.last().copied().unwrap_or(0);
                    index.push(previous);
                }
                0xfe | 0xff => return Err(EvalError::Encoding { byte, offset }),
            }
        }
        index.push(count);
        Ok(Self(index))
    }

    /// Codepoint offset of the character containing `byte_offset`.
    ///
    /// `byte_offset` may equal the byte length, mapping to the total count.
    pub fn codepoint(&self, byte_offset: usize) -> usize {
        self.0[byte_offset]
    }

    /// Total number of codepoints in the input.
    pub fn char_count(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Number of entries (`byte length + 1`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the indexed input had zero bytes.
    pub fn is_empty(&self) -> bool {
        self.0.len() == 1
    }

    /// Byte offset of the next codepoint boundary strictly after
    /// `byte_offset`. Used to advance past zero-length matches without
    /// splitting a multi-byte character.
    pub fn next_boundary(&self, byte_offset: usize) -> usize {
        let here = self.0[byte_offset];
        let byte_len = self.0.len() - 1;
        let mut next = byte_offset + 1;
        while next < byte_len && self.0[next] == here {
            next += 1;
        }
        next
    }
}

//! # Text Editing Engine
//!
//! [`TextBuffer`] is the bounded content of one note. Every write checks the
//! remaining capacity first and either applies completely or not at all, so a
//! multi-byte character is never split. Edits report whether they were applied;
//! a refused edit leaves the buffer byte-for-byte unchanged.

use crate::utf8;

/// Default content capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 32 * 1024;

/// What a tab key inserts. Tabs are never stored as a literal tab byte.
pub const TAB_SPACES: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    capacity: usize,
    revision: u64,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl TextBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
            revision: 0,
        }
    }

    /// Build a buffer from existing text, truncating at the last char boundary
    /// that keeps the content below `capacity`.
    pub fn with_text(text: &str, capacity: usize) -> Self {
        let mut end = text.len().min(capacity.saturating_sub(1));
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            text: text[..end].to_string(),
            capacity,
            revision: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes that can still be written. Content is kept strictly below `capacity`.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.text.len()).saturating_sub(1)
    }

    /// Bumped by every applied edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append one codepoint. Refused at capacity or when the value is not a
    /// Unicode scalar value.
    pub fn insert_codepoint(&mut self, codepoint: u32) -> bool {
        let encoded = utf8::encode(codepoint);
        if encoded.is_empty() {
            return false;
        }
        self.append(encoded.as_str())
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        self.insert_codepoint(c as u32)
    }

    pub fn insert_newline(&mut self) -> bool {
        self.append("\n")
    }

    pub fn insert_tab(&mut self) -> bool {
        self.append(TAB_SPACES)
    }

    /// Remove the final character, whatever its encoded width.
    pub fn delete_last_char(&mut self) -> bool {
        let width = utf8::last_char_len(self.text.as_bytes());
        if width == 0 {
            return false;
        }
        self.text.truncate(self.text.len() - width);
        self.revision += 1;
        true
    }

    fn append(&mut self, s: &str) -> bool {
        if self.text.len() + s.len() >= self.capacity {
            return false;
        }
        self.text.push_str(s);
        self.revision += 1;
        true
    }
}

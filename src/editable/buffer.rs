//! Text buffer traits and implementations for the editable text layer.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits
//! that abstract over different buffer backends (String for single-line
//! inputs, Rope for multi-line documents). All offsets and ranges are in
//! characters, not bytes.

use ropey::Rope;
use std::ops::Range;

/// Read-only view into a text buffer for cursor navigation.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Length of a specific line in characters (excluding newline)
    fn line_length(&self, line: usize) -> usize;

    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Character at position. Returns `None` at or past the end of the line,
    /// which is how callers probe for "no character follows here" — the
    /// trailing newline is never reported.
    fn char_at(&self, line: usize, column: usize) -> Option<char>;

    /// Convert (line, column) to character offset, clamping the column to the
    /// line length and the line to the buffer end
    fn position_to_offset(&self, line: usize, column: usize) -> usize;

    /// Convert character offset to (line, column), clamping to buffer bounds
    fn offset_to_position(&self, offset: usize) -> (usize, usize);

    /// Text in the character range, clamped to buffer bounds
    fn slice(&self, range: Range<usize>) -> String;

    /// Full content as String
    fn content(&self) -> String;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset (clamped)
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range (clamped)
    fn remove(&mut self, range: Range<usize>);
}

// =============================================================================
// StringBuffer - for single-line input surfaces
// =============================================================================

/// TextBuffer backed by a String. Holds a single line.
#[derive(Debug, Clone, Default)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn line_count(&self) -> usize {
        1
    }

    fn line_length(&self, line: usize) -> usize {
        if line == 0 {
            self.text.chars().count()
        } else {
            0
        }
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        if line != 0 {
            return None;
        }
        self.text.chars().nth(column)
    }

    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line != 0 {
            return self.len_chars();
        }
        column.min(self.len_chars())
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        (0, offset.min(self.len_chars()))
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset.min(self.len_chars()));
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = self.char_to_byte(range.start.min(self.len_chars()));
        let end = self.char_to_byte(range.end.min(self.len_chars()));
        if start < end {
            self.text.replace_range(start..end, "");
        }
    }
}

// =============================================================================
// RopeBuffer - for multi-line documents
// =============================================================================

/// TextBuffer backed by `ropey::Rope`, for multi-line documents of any size.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        if line >= self.rope.len_lines() || column >= self.line_length(line) {
            return None;
        }
        Some(self.rope.char(self.rope.line_to_char(line) + column))
    }

    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line) + column.min(self.line_length(line))
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        (line, clamped - self.rope.line_to_char(line))
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // StringBuffer tests

    #[test]
    fn test_string_buffer_basic() {
        let buf = StringBuffer::from_text("hello");
        assert_eq!(buf.len_chars(), 5);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_length(0), 5);
    }

    #[test]
    fn test_string_buffer_char_at() {
        let buf = StringBuffer::from_text("héllo");
        assert_eq!(buf.char_at(0, 1), Some('é'));
        assert_eq!(buf.char_at(0, 5), None);
        assert_eq!(buf.char_at(1, 0), None);
    }

    #[test]
    fn test_string_buffer_insert_utf8() {
        let mut buf = StringBuffer::from_text("héllo");
        buf.insert(2, "X");
        assert_eq!(buf.content(), "héXllo");
    }

    #[test]
    fn test_string_buffer_remove() {
        let mut buf = StringBuffer::from_text("hello world");
        buf.remove(5..11);
        assert_eq!(buf.content(), "hello");
    }

    #[test]
    fn test_string_buffer_slice_clamps() {
        let buf = StringBuffer::from_text("hello");
        assert_eq!(buf.slice(2..99), "llo");
        assert_eq!(buf.slice(4..2), "");
    }

    // RopeBuffer tests

    #[test]
    fn test_rope_buffer_line_length_excludes_newline() {
        let buf = RopeBuffer::from_text("hello\nworld\n");
        assert_eq!(buf.line_length(0), 5);
        assert_eq!(buf.line_length(1), 5);
    }

    #[test]
    fn test_rope_buffer_char_at_end_of_line_is_none() {
        let buf = RopeBuffer::from_text("ab\ncd");
        assert_eq!(buf.char_at(0, 1), Some('b'));
        // The newline is not addressable: past-the-line means "no character"
        assert_eq!(buf.char_at(0, 2), None);
        assert_eq!(buf.char_at(1, 0), Some('c'));
    }

    #[test]
    fn test_rope_buffer_position_conversion() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.position_to_offset(0, 0), 0);
        assert_eq!(buf.position_to_offset(1, 0), 6);
        assert_eq!(buf.position_to_offset(1, 5), 11);

        assert_eq!(buf.offset_to_position(6), (1, 0));
        assert_eq!(buf.offset_to_position(11), (1, 5));
    }

    #[test]
    fn test_rope_buffer_position_conversion_clamps() {
        let buf = RopeBuffer::from_text("hi");
        assert_eq!(buf.position_to_offset(0, 99), 2);
        assert_eq!(buf.position_to_offset(9, 0), 2);
        assert_eq!(buf.offset_to_position(99), (0, 2));
    }

    #[test]
    fn test_rope_buffer_insert_and_remove() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.insert(6, "big ");
        assert_eq!(buf.content(), "hello\nbig world");

        buf.remove(6..10);
        assert_eq!(buf.content(), "hello\nworld");
    }

    #[test]
    fn test_empty_rope_has_one_line() {
        let buf = RopeBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_length(0), 0);
    }
}

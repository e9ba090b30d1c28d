//! EditableState - editable text with a cursor, a selection, and the raw
//! mutation primitives a host surface exposes to interception hooks.

use super::buffer::{TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::cursor::{Cursor, Position, TextRange};
use super::selection::Selection;

/// Editable text state: a buffer, one cursor, and one selection.
///
/// Generic over the buffer type B (StringBuffer for single-line surfaces,
/// RopeBuffer for multi-line documents).
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    /// The text buffer
    pub buffer: B,
    /// The caret
    pub cursor: Cursor,
    /// The selection; collapsed onto the caret when nothing is selected
    pub selection: Selection,
    /// Constraints for this editing context
    pub constraints: EditConstraints,
}

impl<B: TextBuffer> EditableState<B> {
    /// Create a new EditableState with the given buffer and constraints
    pub fn new(buffer: B, constraints: EditConstraints) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(0, 0),
            selection: Selection::collapsed(Position::zero()),
            constraints,
        }
    }

    /// The caret position
    pub fn cursor_position(&self) -> Position {
        self.cursor.to_position()
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn is_read_only(&self) -> bool {
        self.constraints.read_only
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Text covered by a position range
    pub fn text_in_range(&self, range: &TextRange) -> String {
        let start = self.offset_of(range.start);
        let end = self.offset_of(range.end);
        self.buffer.slice(start..end)
    }

    /// Place the caret at `pos` and collapse the selection onto it
    pub fn move_cursor_to(&mut self, pos: Position) {
        self.cursor = Cursor::at_position(pos);
        self.selection = Selection::collapsed(pos);
    }

    /// Collapse selection to the caret
    pub fn collapse_selection(&mut self) {
        self.selection = Selection::collapsed(self.cursor.to_position());
    }

    fn offset_of(&self, pos: Position) -> usize {
        self.buffer.position_to_offset(pos.line, pos.column)
    }

    fn position_at(&self, offset: usize) -> Position {
        let (line, column) = self.buffer.offset_to_position(offset);
        Position::new(line, column)
    }

    /// Sync selection head with cursor position
    fn sync_selection_head(&mut self) {
        self.selection.head = self.cursor.to_position();
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl<B: TextBuffer> EditableState<B> {
    /// Move cursor left by one character
    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            self.move_cursor_to(start);
            return;
        }

        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 && self.constraints.allow_multiline {
            self.cursor.line -= 1;
            self.cursor.column = self.buffer.line_length(self.cursor.line);
        }
        self.cursor.clear_desired_column();

        if extend_selection {
            self.sync_selection_head();
        } else {
            self.collapse_selection();
        }
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            self.move_cursor_to(end);
            return;
        }

        if self.cursor.column < self.buffer.line_length(self.cursor.line) {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.buffer.line_count() && self.constraints.allow_multiline
        {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
        self.cursor.clear_desired_column();

        if extend_selection {
            self.sync_selection_head();
        } else {
            self.collapse_selection();
        }
    }

    /// Move cursor up one line, keeping the desired column
    pub fn move_up(&mut self, extend_selection: bool) {
        if !self.constraints.allow_multiline || self.cursor.line == 0 {
            return;
        }
        self.cursor.set_desired_column();
        self.cursor.line -= 1;
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.column = self.cursor.effective_column().min(line_len);

        if extend_selection {
            self.sync_selection_head();
        } else {
            self.collapse_selection();
        }
    }

    /// Move cursor down one line, keeping the desired column
    pub fn move_down(&mut self, extend_selection: bool) {
        if !self.constraints.allow_multiline || self.cursor.line + 1 >= self.buffer.line_count() {
            return;
        }
        self.cursor.set_desired_column();
        self.cursor.line += 1;
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.column = self.cursor.effective_column().min(line_len);

        if extend_selection {
            self.sync_selection_head();
        } else {
            self.collapse_selection();
        }
    }

    /// Extend the selection one character to the left of the caret.
    /// The anchor stays at the caret's previous position, so the resulting
    /// range ends where the caret used to be.
    pub fn select_left(&mut self) {
        self.move_left(true);
    }
}

// =============================================================================
// Editing Primitives (require TextBufferMut)
// =============================================================================

impl<B: TextBuffer + TextBufferMut> EditableState<B> {
    /// Insert `text` at `position` and return the end position of the
    /// inserted text.
    ///
    /// The caret and selection are remapped the way a live editor surface
    /// remaps them: a caret sitting at the insertion point follows the
    /// inserted text (an interactive keystroke), and anything after the
    /// insertion point shifts by the inserted length. Rejected (returning the
    /// clamped insertion position unchanged) on read-only states and for
    /// newlines in single-line states.
    pub fn insert_at(&mut self, position: Position, text: &str) -> Position {
        let at = self.offset_of(position);
        if text.is_empty()
            || self.constraints.read_only
            || (text.contains('\n') && !self.constraints.allow_multiline)
        {
            return self.position_at(at);
        }

        let caret = self.offset_of(self.cursor.to_position());
        let anchor = self.offset_of(self.selection.anchor);
        let head = self.offset_of(self.selection.head);

        self.buffer.insert(at, text);
        let added = text.chars().count();

        let shift = |offset: usize| if offset >= at { offset + added } else { offset };
        let caret_pos = self.position_at(shift(caret));
        self.cursor = Cursor::at_position(caret_pos);
        self.selection.anchor = self.position_at(shift(anchor));
        self.selection.head = self.position_at(shift(head));

        self.position_at(at + added)
    }

    /// Remove the text covered by `range`.
    ///
    /// The caret and selection collapse into the removed span's start when
    /// they were inside it, and shift left when they were after it. No-op on
    /// read-only states and empty ranges.
    pub fn remove_range(&mut self, range: &TextRange) {
        if self.constraints.read_only {
            return;
        }
        let start = self.offset_of(range.start);
        let end = self.offset_of(range.end);
        if start >= end {
            return;
        }

        let caret = self.offset_of(self.cursor.to_position());
        let anchor = self.offset_of(self.selection.anchor);
        let head = self.offset_of(self.selection.head);

        self.buffer.remove(start..end);
        let removed = end - start;

        let shift = |offset: usize| {
            if offset <= start {
                offset
            } else if offset >= end {
                offset - removed
            } else {
                start
            }
        };
        let caret_pos = self.position_at(shift(caret));
        self.cursor = Cursor::at_position(caret_pos);
        self.selection.anchor = self.position_at(shift(anchor));
        self.selection.head = self.position_at(shift(head));
    }

    /// Delete one character to the left of the caret, or the current
    /// selection if there is one. This is the raw backward-delete a host
    /// surface performs with no pairing awareness. Returns true if anything
    /// was deleted.
    pub fn delete_backward(&mut self) -> bool {
        if self.constraints.read_only {
            return false;
        }

        if self.has_selection() {
            let range = self.selection.range();
            self.remove_range(&range);
            self.collapse_selection();
            return true;
        }

        let offset = self.offset_of(self.cursor.to_position());
        if offset == 0 {
            return false;
        }
        let range = TextRange::new(self.position_at(offset - 1), self.position_at(offset));
        self.remove_range(&range);
        self.collapse_selection();
        true
    }
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use autopair::editable::{
    EditConstraints, EditableState, Position, RopeBuffer, Selection,
};
use autopair::AutoPair;

/// Create a multi-line editable state with the caret at (line, column)
pub fn test_state(text: &str, line: usize, column: usize) -> EditableState<RopeBuffer> {
    let mut state = EditableState::new(RopeBuffer::from_text(text), EditConstraints::editor());
    state.move_cursor_to(Position::new(line, column));
    state
}

/// Create a state with a selection from anchor to head; the caret sits at the
/// head, as after a shift-extend
pub fn test_state_with_selection(
    text: &str,
    anchor_line: usize,
    anchor_col: usize,
    head_line: usize,
    head_col: usize,
) -> EditableState<RopeBuffer> {
    let mut state = test_state(text, head_line, head_col);
    state.selection = Selection::new(
        Position::new(anchor_line, anchor_col),
        Position::new(head_line, head_col),
    );
    state
}

/// Create a read-only state with the caret at (line, column)
pub fn read_only_state(text: &str, line: usize, column: usize) -> EditableState<RopeBuffer> {
    let mut state = EditableState::new(RopeBuffer::from_text(text), EditConstraints::read_only());
    state.move_cursor_to(Position::new(line, column));
    state
}

/// Helper to get buffer content as string
pub fn buffer_to_string(state: &EditableState<RopeBuffer>) -> String {
    state.text()
}

/// Drive one interactive keystroke through the insertion controller
pub fn type_char(pair: &AutoPair, state: &mut EditableState<RopeBuffer>, ch: char) -> Position {
    let at = state.cursor_position();
    type_text_at(pair, state, at, &ch.to_string())
}

/// Drive an insertion of arbitrary text at an arbitrary position (the
/// programmatic/bulk path when position differs from the caret)
pub fn type_text_at(
    pair: &AutoPair,
    state: &mut EditableState<RopeBuffer>,
    position: Position,
    text: &str,
) -> Position {
    pair.handle_insert(state, position, text, |s, p, t| s.insert_at(p, t))
}

/// Drive one backspace through the deletion controller
pub fn backspace(pair: &AutoPair, state: &mut EditableState<RopeBuffer>) {
    pair.handle_remove_left(state, |s| {
        s.delete_backward();
    });
}

//! Insertion-side control: skip-over and auto-close.

use crate::editable::{EditableState, Position, TextBuffer, TextBufferMut};

use super::{single_char, AutoPair};

impl AutoPair {
    /// Intercept a text insertion against `state`.
    ///
    /// `raw_insert` is the host's unconditional insert primitive (insert
    /// `text` at `position`, return the end position of the inserted text);
    /// the primary insertion always goes through it. Returns the end position
    /// of `text` — when a closer was auto-appended the caret is parked there,
    /// between the two delimiters, but the returned position is unaffected by
    /// the appended closer.
    pub fn handle_insert<B, F>(
        &self,
        state: &mut EditableState<B>,
        position: Position,
        text: &str,
        raw_insert: F,
    ) -> Position
    where
        B: TextBuffer + TextBufferMut,
        F: FnOnce(&mut EditableState<B>, Position, &str) -> Position,
    {
        if !self.enabled {
            return raw_insert(state, position, text);
        }

        // A single keystroke lands exactly at the caret with nothing
        // selected. Paste, completion, and replayed edits arrive elsewhere or
        // over a selection and must not pair-match.
        let typing = state.selection.is_empty() && state.cursor_position() == position;

        if typing {
            if let Some(ch) = single_char(text) {
                if self.delimiters.is_closer(ch)
                    && state.buffer.char_at(position.line, position.column) == Some(ch)
                {
                    // Typing "through" an existing closer: move, don't insert
                    let past = Position::new(position.line, position.column + 1);
                    tracing::debug!(
                        "skip-over {:?} at {}:{}",
                        ch,
                        position.line,
                        position.column
                    );
                    state.move_cursor_to(past);
                    return past;
                }
            }
        }

        let end = raw_insert(state, position, text);

        if typing {
            if let Some(closer) = single_char(text).and_then(|ch| self.delimiters.closing(ch)) {
                // Only close when nothing follows, or a stop character does;
                // an identifier right of the caret means the user is wrapping
                // into existing text and a closer would land mid-token.
                let next = state.buffer.char_at(end.line, end.column);
                if next.map_or(true, |ch| self.delimiters.is_stop(ch)) {
                    tracing::debug!("auto-closing {:?} at {}:{}", closer, end.line, end.column);
                    state.insert_at(end, &closer.to_string());
                    state.move_cursor_to(end);
                }
            }
        }

        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{EditConstraints, StringBuffer};

    // Single-line surfaces exercise the same controller as documents; these
    // cover the prompt-input case, the integration tests cover RopeBuffer.

    fn input_state(text: &str, column: usize) -> EditableState<StringBuffer> {
        let mut state =
            EditableState::new(StringBuffer::from_text(text), EditConstraints::single_line());
        state.move_cursor_to(Position::new(0, column));
        state
    }

    fn type_str(
        pair: &AutoPair,
        state: &mut EditableState<StringBuffer>,
        text: &str,
    ) -> Position {
        let at = state.cursor_position();
        pair.handle_insert(state, at, text, |s, p, t| s.insert_at(p, t))
    }

    #[test]
    fn test_auto_close_at_end_of_input() {
        let pair = AutoPair::new();
        let mut state = input_state("", 0);

        let end = type_str(&pair, &mut state, "(");
        assert_eq!(state.text(), "()");
        assert_eq!(end, Position::new(0, 1));
        assert_eq!(state.cursor_position(), Position::new(0, 1));
    }

    #[test]
    fn test_no_close_before_identifier() {
        let pair = AutoPair::new();
        let mut state = input_state("name", 0);

        type_str(&pair, &mut state, "(");
        assert_eq!(state.text(), "(name");
    }

    #[test]
    fn test_skip_over_existing_closer() {
        let pair = AutoPair::new();
        let mut state = input_state("f()", 2);

        let end = type_str(&pair, &mut state, ")");
        assert_eq!(state.text(), "f()");
        assert_eq!(end, Position::new(0, 3));
        assert_eq!(state.cursor_position(), Position::new(0, 3));
    }

    #[test]
    fn test_multi_char_text_is_raw() {
        let pair = AutoPair::new();
        let mut state = input_state("", 0);

        type_str(&pair, &mut state, "(x");
        assert_eq!(state.text(), "(x");
    }

    #[test]
    fn test_disabled_is_pass_through() {
        let pair = AutoPair::with_enabled(false);
        let mut state = input_state("", 0);

        type_str(&pair, &mut state, "(");
        assert_eq!(state.text(), "(");
    }
}

//! Deletion-side control: coordinated removal of empty pairs.

use crate::editable::{EditableState, TextBuffer, TextBufferMut, TextRange};

use super::{single_char, AutoPair};

impl AutoPair {
    /// Intercept a backward-delete-one against `state`.
    ///
    /// `raw_remove_left` is the host's plain backward delete (one character
    /// left of the caret, or the selection). It is invoked untouched when
    /// auto-pairing is disabled or the surface is read-only; otherwise the
    /// controller performs the deletion itself so it can take the closer of
    /// an empty pair along with the opener.
    pub fn handle_remove_left<B, F>(&self, state: &mut EditableState<B>, raw_remove_left: F)
    where
        B: TextBuffer + TextBufferMut,
        F: FnOnce(&mut EditableState<B>),
    {
        if !self.enabled || state.is_read_only() {
            raw_remove_left(state);
            return;
        }

        let mut secondary: Option<TextRange> = None;
        if state.selection.is_empty() {
            state.select_left();
            let range = state.selection.range();
            let selected = state.text_in_range(&range);
            if let Some(closer) = single_char(&selected).and_then(|ch| self.delimiters.closing(ch))
            {
                if state.buffer.char_at(range.end.line, range.end.column) == Some(closer) {
                    // Once the opener is gone the closer slides into this same
                    // range, so deleting it a second time removes the closer.
                    tracing::debug!(
                        "deleting empty pair at {}:{}",
                        range.start.line,
                        range.start.column
                    );
                    secondary = Some(range);
                }
            }
        }

        let primary = state.selection.range();
        state.remove_range(&primary);
        if let Some(range) = secondary {
            state.remove_range(&range);
        }
        state.collapse_selection();
    }
}

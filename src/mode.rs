//! Language mode descriptors and the paired-delimiter capability.
//!
//! A host surface asks its active mode for the capability instead of probing
//! for optionally-present hook methods: modes that support auto-pairing
//! return their [`AutoPair`] controller from [`LanguageMode::auto_pair`],
//! everything else inherits the `None` default and keeps the host's raw
//! editing behavior.

use crate::autopair::AutoPair;
use crate::editable::{EditableState, Position, TextBuffer, TextBufferMut};

/// Descriptor for a language/editing mode.
pub trait LanguageMode {
    /// Human-readable mode name
    fn name(&self) -> &str;

    /// Paired-delimiter support, when the mode opts in
    fn auto_pair(&self) -> Option<&AutoPair> {
        None
    }

    /// Mutable access to the controller, for runtime enable/disable
    fn auto_pair_mut(&mut self) -> Option<&mut AutoPair> {
        None
    }
}

/// Plain text: no delimiter management.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextMode;

impl LanguageMode for PlainTextMode {
    fn name(&self) -> &str {
        "text"
    }
}

/// A code-editing mode that manages paired delimiters.
#[derive(Debug, Clone)]
pub struct CodeMode {
    name: String,
    pair: AutoPair,
}

impl CodeMode {
    pub fn new(name: impl Into<String>, pair: AutoPair) -> Self {
        Self {
            name: name.into(),
            pair,
        }
    }
}

impl LanguageMode for CodeMode {
    fn name(&self) -> &str {
        &self.name
    }

    fn auto_pair(&self) -> Option<&AutoPair> {
        Some(&self.pair)
    }

    fn auto_pair_mut(&mut self) -> Option<&mut AutoPair> {
        Some(&mut self.pair)
    }
}

/// Route an insertion through the mode's controller when the capability is
/// present, falling back to the raw primitive otherwise.
pub fn insert_via_mode<M, B>(
    mode: &M,
    state: &mut EditableState<B>,
    position: Position,
    text: &str,
) -> Position
where
    M: LanguageMode + ?Sized,
    B: TextBuffer + TextBufferMut,
{
    match mode.auto_pair() {
        Some(pair) => pair.handle_insert(state, position, text, |s, p, t| s.insert_at(p, t)),
        None => state.insert_at(position, text),
    }
}

/// Route a backward-delete through the mode's controller when the capability
/// is present, falling back to the raw primitive otherwise.
pub fn remove_left_via_mode<M, B>(mode: &M, state: &mut EditableState<B>)
where
    M: LanguageMode + ?Sized,
    B: TextBuffer + TextBufferMut,
{
    match mode.auto_pair() {
        Some(pair) => pair.handle_remove_left(state, |s| {
            s.delete_backward();
        }),
        None => {
            state.delete_backward();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_no_capability() {
        assert!(PlainTextMode.auto_pair().is_none());
    }

    #[test]
    fn test_code_mode_exposes_controller() {
        let mode = CodeMode::new("r", AutoPair::new());
        assert_eq!(mode.name(), "r");
        assert!(mode.auto_pair().is_some());
    }

    #[test]
    fn test_runtime_toggle_through_mode() {
        let mut mode = CodeMode::new("r", AutoPair::new());
        mode.auto_pair_mut()
            .expect("code mode has a controller")
            .set_enabled(false);
        assert!(!mode.auto_pair().expect("still present").is_enabled());
    }
}

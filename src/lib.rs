//! Paired-delimiter auto-management for text editing surfaces.
//!
//! When the user types an opening delimiter (`(`, `[`, `"`, `'`), the
//! matching closer is inserted after the caret; typing a closer that already
//! sits right of the caret moves over it instead of duplicating it; and
//! backspacing inside an empty pair removes both delimiters in one action.
//!
//! The crate ships three layers:
//!
//! - [`autopair`]: the [`AutoPair`] controller intercepting insertions and
//!   backward deletes, plus the [`DelimiterTable`]
//! - [`editable`]: the document/cursor model the controller operates against
//!   (trait-based buffers, positions, selections)
//! - [`mode`]: language-mode descriptors carrying the paired-delimiter
//!   capability, and dispatch helpers wiring a mode into a surface
//!
//! # Example
//!
//! ```
//! use autopair::editable::{EditConstraints, EditableState, Position, RopeBuffer};
//! use autopair::AutoPair;
//!
//! let pair = AutoPair::new();
//! let mut state = EditableState::new(RopeBuffer::new(), EditConstraints::editor());
//!
//! // Typing "(" auto-closes; the caret lands between the delimiters.
//! let at = state.cursor_position();
//! pair.handle_insert(&mut state, at, "(", |s, p, t| s.insert_at(p, t));
//! assert_eq!(state.text(), "()");
//! assert_eq!(state.cursor_position(), Position::new(0, 1));
//!
//! // Backspace removes the whole empty pair.
//! pair.handle_remove_left(&mut state, |s| {
//!     s.delete_backward();
//! });
//! assert_eq!(state.text(), "");
//! ```

pub mod autopair;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod mode;
pub mod tracing;

// Re-export commonly used types
pub use autopair::{AutoPair, DelimiterTable};
pub use config::EditorConfig;
pub use editable::{EditableState, Position, TextRange};
pub use mode::LanguageMode;

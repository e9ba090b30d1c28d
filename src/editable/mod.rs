//! Editable text layer: buffers, cursors, selections, and the raw editing
//! primitives a host surface exposes.
//!
//! This is the document/cursor model the auto-pairing controllers operate
//! against. The core components are:
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: traits abstracting over buffer
//!   implementations
//! - [`StringBuffer`]: buffer for single-line inputs (backed by `String`)
//! - [`RopeBuffer`]: buffer for multi-line documents (backed by `ropey::Rope`)
//! - [`EditableState`]: buffer + cursor + selection container with movement
//!   and the raw insert/remove primitives
//! - [`EditConstraints`]: context-specific restrictions (single-line,
//!   read-only)
//!
//! # Example
//!
//! ```
//! use autopair::editable::{EditableState, EditConstraints, Position, StringBuffer};
//!
//! let mut state = EditableState::new(
//!     StringBuffer::from_text("hello"),
//!     EditConstraints::single_line(),
//! );
//!
//! let end = state.insert_at(Position::new(0, 5), "!");
//! assert_eq!(state.text(), "hello!");
//! assert_eq!(end, Position::new(0, 6));
//! ```

mod buffer;
mod constraints;
mod cursor;
mod selection;
mod state;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use constraints::EditConstraints;
pub use cursor::{Cursor, Position, TextRange};
pub use selection::Selection;
pub use state::EditableState;

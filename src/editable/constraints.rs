//! Edit constraints for the editable text layer.
//!
//! Constraints define what operations are allowed in different editing
//! contexts. Every mutation primitive on `EditableState` checks them, so a
//! read-only surface rejects writes at the lowest level.

/// Constraints that limit what operations are allowed in an editing context.
#[derive(Debug, Clone, Copy)]
pub struct EditConstraints {
    /// Allow multiple lines (newlines accepted, vertical movement enabled)
    pub allow_multiline: bool,

    /// Reject all mutations
    pub read_only: bool,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::editor()
    }
}

impl EditConstraints {
    /// Full document editor constraints
    pub fn editor() -> Self {
        Self {
            allow_multiline: true,
            read_only: false,
        }
    }

    /// Single-line input constraints (console prompts, search fields)
    pub fn single_line() -> Self {
        Self {
            allow_multiline: false,
            read_only: false,
        }
    }

    /// Viewer constraints: full navigation, no edits
    pub fn read_only() -> Self {
        Self {
            allow_multiline: true,
            read_only: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_constraints() {
        let c = EditConstraints::editor();
        assert!(c.allow_multiline);
        assert!(!c.read_only);
    }

    #[test]
    fn test_single_line_constraints() {
        let c = EditConstraints::single_line();
        assert!(!c.allow_multiline);
        assert!(!c.read_only);
    }

    #[test]
    fn test_read_only_constraints() {
        assert!(EditConstraints::read_only().read_only);
    }
}

//! Delimiter pair table and the character classes derived from it.

/// The paired delimiters that participate in auto-closing. Quotes close with
/// the same glyph, so each quote is both an opener and a closer.
const PAIRS: [(char, char); 4] = [('(', ')'), ('[', ']'), ('"', '"'), ('\'', '\'')];

/// Fixed opener/closer mapping with the "stop" character class.
///
/// All lookups are pure and total: an unknown character is simply not a
/// delimiter, never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimiterTable;

impl DelimiterTable {
    /// The closer paired with `opener`, if `opener` is in the table
    pub fn closing(&self, opener: char) -> Option<char> {
        PAIRS.iter().find(|(o, _)| *o == opener).map(|(_, c)| *c)
    }

    pub fn is_opener(&self, ch: char) -> bool {
        PAIRS.iter().any(|(o, _)| *o == ch)
    }

    pub fn is_closer(&self, ch: char) -> bool {
        PAIRS.iter().any(|(_, c)| *c == ch)
    }

    /// Characters before which auto-closing is allowed: they cannot be part
    /// of an identifier the user is about to type into. Anything else
    /// immediately after the caret suppresses the closer.
    pub fn is_stop(&self, ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, ';' | ',' | ')' | ']' | '}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_for_each_pair() {
        let table = DelimiterTable;
        assert_eq!(table.closing('('), Some(')'));
        assert_eq!(table.closing('['), Some(']'));
        assert_eq!(table.closing('"'), Some('"'));
        assert_eq!(table.closing('\''), Some('\''));
        assert_eq!(table.closing('{'), None);
        assert_eq!(table.closing('x'), None);
    }

    #[test]
    fn test_quotes_are_openers_and_closers() {
        let table = DelimiterTable;
        for quote in ['"', '\''] {
            assert!(table.is_opener(quote));
            assert!(table.is_closer(quote));
        }
    }

    #[test]
    fn test_brackets_are_one_sided() {
        let table = DelimiterTable;
        assert!(table.is_opener('('));
        assert!(!table.is_closer('('));
        assert!(table.is_closer(')'));
        assert!(!table.is_opener(')'));
    }

    #[test]
    fn test_stop_set() {
        let table = DelimiterTable;
        for ch in [' ', '\t', ';', ',', ')', ']', '}'] {
            assert!(table.is_stop(ch), "expected stop: {:?}", ch);
        }
        for ch in ['a', '1', '_', '(', '{', '"'] {
            assert!(!table.is_stop(ch), "expected non-stop: {:?}", ch);
        }
    }
}

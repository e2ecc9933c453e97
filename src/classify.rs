//! Character classes as seen by the game's map script parser.
//!
//! Only the four ASCII whitespace characters separate words. Unicode spaces, zero-width
//! spaces, form feeds and every other code point are ordinary word characters.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Space, tab or carriage return.
    Whitespace,
    /// Line feed. Also whitespace.
    LineTerminator,
    /// `/`, the first character of `/*`.
    CommentOpenStart,
    /// `*`, the first character of `*/`.
    CommentCloseStart,
    Other,
}

impl CharClass {
    pub fn is_whitespace(self) -> bool {
        matches!(self, CharClass::Whitespace | CharClass::LineTerminator)
    }
}

pub fn classify(c: char) -> CharClass {
    match c {
        ' ' | '\t' | '\r' => CharClass::Whitespace,
        '\n' => CharClass::LineTerminator,
        '/' => CharClass::CommentOpenStart,
        '*' => CharClass::CommentCloseStart,
        _ => CharClass::Other,
    }
}

/// Returns `true` if `c` separates words in a map script.
pub fn is_whitespace(c: char) -> bool {
    classify(c).is_whitespace()
}

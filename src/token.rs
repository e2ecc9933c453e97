use serde::Serialize;
use std::fmt;

use crate::position::Position;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub struct Token {
    pub(crate) kind: Kind,
    pub(crate) lexeme: String,
    pub(crate) start: Position,
    pub(crate) end: Position,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum Kind {
    Word,                // base_terrain, {, hello{}{/*}*/
    Comment,             // /* ... */
    UnterminatedComment, // /* ... <EOF>
    Whitespace,          // spaces, tabs, \r and \n
}

impl Token {
    pub(crate) fn new(kind: Kind, lexeme: String, start: Position, end: Position) -> Self {
        debug_assert!(start <= end);
        Self { kind, lexeme, start, end }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The exact characters of the source covered by this token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Position of the first character.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Position one past the last character.
    pub fn end(&self) -> Position {
        self.end
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == Kind::Whitespace
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, Kind::Comment | Kind::UnterminatedComment)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::Word => "word",
            Kind::Comment => "comment",
            Kind::UnterminatedComment => "unterminated comment",
            Kind::Whitespace => "whitespace",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{} {} {:?}", self.start, self.end, self.kind, self.lexeme)
    }
}

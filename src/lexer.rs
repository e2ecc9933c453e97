//! Splits a map script into words, comments and whitespace the way the game does.
//!
//! The game's parser only separates words at ASCII whitespace. Braces are not delimiters,
//! and `/*` only opens a comment when it starts a new token: `a /* b */` holds a comment, but
//! `a/* b */` is the word `a/*`, the word `b` and the word `*/`. Inside a comment the first
//! `*/` closes it, whatever surrounds it.

use tracing::{debug, trace, warn};

use crate::classify::{classify, is_whitespace, CharClass};
use crate::position::PositionTracker;
use crate::source::SourceBuffer;
use crate::stream::TokenStream;
use crate::token::{Kind, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningWhitespace,
    ScanningWord,
    ScanningComment,
    End,
}

pub struct Lexer<'a> {
    source: &'a SourceBuffer,
    tracker: PositionTracker,
    state: State,
    /// Offset of the first character of the token in progress.
    token_start: usize,
    current: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        let state = if source.is_empty() {
            State::End
        } else {
            State::ScanningWhitespace
        };
        Self {
            source,
            tracker: PositionTracker::new(source),
            state,
            token_start: 0,
            current: 0,
            tokens: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> TokenStream {
        while self.state != State::End {
            self.state = match self.state {
                State::ScanningWhitespace => self.scan_whitespace(),
                State::ScanningWord => self.scan_word(),
                State::ScanningComment => self.scan_comment(),
                State::End => State::End,
            };
        }

        debug!(
            target: "rms::lexer",
            file = self.source.file_name(),
            chars = self.source.len(),
            tokens = self.tokens.len(),
            "Finished scan"
        );
        TokenStream::new(self.tokens, self.source.encoding())
    }

    fn scan_whitespace(&mut self) -> State {
        let Some(c) = self.source.at(self.current) else {
            self.emit_pending_whitespace();
            return State::End;
        };
        let class = classify(c);
        if class.is_whitespace() {
            self.current += 1;
            return State::ScanningWhitespace;
        }

        self.emit_pending_whitespace();
        if class == CharClass::CommentOpenStart && self.next_is('*') {
            self.current += 2;
            State::ScanningComment
        } else {
            self.current += 1;
            State::ScanningWord
        }
    }

    fn scan_word(&mut self) -> State {
        match self.source.at(self.current) {
            None => {
                self.emit(Kind::Word);
                State::End
            }
            Some(c) if is_whitespace(c) => {
                self.emit(Kind::Word);
                State::ScanningWhitespace
            }
            // Markers, braces and non-ASCII spaces all extend the word.
            Some(_) => {
                self.current += 1;
                State::ScanningWord
            }
        }
    }

    fn scan_comment(&mut self) -> State {
        let Some(c) = self.source.at(self.current) else {
            self.emit(Kind::UnterminatedComment);
            if let Some(token) = self.tokens.last() {
                warn!(
                    target: "rms::lexer",
                    file = self.source.file_name(),
                    start = %token.start(),
                    "Comment is never closed"
                );
            }
            return State::End;
        };
        if classify(c) == CharClass::CommentCloseStart && self.next_is('/') {
            self.current += 2;
            self.emit(Kind::Comment);
            return State::ScanningWhitespace;
        }
        self.current += 1;
        State::ScanningComment
    }

    /// Looks one character past the current one.
    fn next_is(&self, c: char) -> bool {
        self.source.at(self.current + 1) == Some(c)
    }

    fn emit_pending_whitespace(&mut self) {
        if self.current > self.token_start {
            self.emit(Kind::Whitespace);
        }
    }

    /// Closes the token in progress at the current offset.
    fn emit(&mut self, kind: Kind) {
        let lexeme = self.source.slice(self.token_start, self.current);
        let start = self.tracker.position(self.token_start);
        let end = self.tracker.position(self.current);
        trace!(target: "rms::lexer", %kind, %start, %end, "Emitting token");
        self.tokens.push(Token::new(kind, lexeme, start, end));
        self.token_start = self.current;
    }
}

pub fn tokenize(source: &SourceBuffer) -> TokenStream {
    Lexer::new(source).tokenize()
}

/// Tokenizes an in-memory script.
pub fn lex(text: &str) -> TokenStream {
    tokenize(&SourceBuffer::new(text))
}

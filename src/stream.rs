use std::fs;
use std::path::Path;
use std::slice::Iter;

use serde::Serialize;

use crate::source::Encoding;
use crate::token::{Kind, Token};

pub type TokenIndex = usize;

/// The tokens of one file, in source order.
///
/// Every character of the source belongs to exactly one token, so the file can be rebuilt
/// from the stream without changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenStream {
    tokens: Vec<Token>,
    #[serde(skip)]
    encoding: Encoding,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>, encoding: Encoding) -> Self {
        Self { tokens, encoding }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token> {
        self.tokens.get(i)
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens that are not whitespace.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_whitespace())
    }

    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind() == Kind::Word)
    }

    /// The comment that runs to the end of the file, if there is one. It can only be the last
    /// token.
    pub fn unterminated_comment(&self) -> Option<&Token> {
        self.tokens
            .last()
            .filter(|t| t.kind() == Kind::UnterminatedComment)
    }

    /// Concatenates all lexemes, giving back the scanned text.
    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(Token::lexeme).collect()
    }

    /// The scanned file's original bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encoding.encode(&self.reconstruct())
    }

    /// Writes the original file to `path`, overwriting the file if it exists.
    /// An existing file may still be overwritten even if writing fails.
    pub fn write_to_path(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.to_bytes())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.tokens)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

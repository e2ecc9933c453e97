//! Tools for working with Random Map Script (RMS) files.
//!
//! The lexer splits a script into words, comments and whitespace exactly where the game's own
//! parser does, with the line and column of every token. The annotator and html writer build a
//! debugging view on top of the token stream.

pub mod annotator;
pub mod classify;
pub mod config;
pub mod error;
pub mod html_writer;
pub mod lexer;
pub mod logging;
pub mod maps;
pub mod position;
pub mod rms_data;
pub mod source;
pub mod stream;
pub mod token;

pub use lexer::{lex, tokenize, Lexer};
pub use position::Position;
pub use source::SourceBuffer;
pub use stream::TokenStream;
pub use token::{Kind, Token};

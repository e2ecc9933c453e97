//! Annotates a tokenized file with syntax highlighting classes and hover descriptions.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::rms_data::{self, Category};
use crate::stream::TokenStream;
use crate::token::{Kind, Token};

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("valid regex"));
static RND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^rnd\((-?[0-9]+),(-?[0-9]+)\)$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Comment,
    UnterminatedComment,
    /// A `*/` word outside of any comment.
    StrayCommentClose,
    Section,
    Directive,
    Conditional,
    Random,
    Brace,
    Label,
    Number,
    Rnd,
}

impl Highlight {
    /// The class name used for syntax highlighting.
    pub fn class_name(self) -> &'static str {
        match self {
            Highlight::Comment => "comment",
            Highlight::UnterminatedComment => "unterminated-comment",
            Highlight::StrayCommentClose => "stray-comment-close",
            Highlight::Section => "section",
            Highlight::Directive => "directive",
            Highlight::Conditional => "conditional",
            Highlight::Random => "random",
            Highlight::Brace => "brace",
            Highlight::Label => "label",
            Highlight::Number => "number",
            Highlight::Rnd => "rnd",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    highlight: Highlight,
    description: Option<String>,
    /// Sequential id of a comment, in source order.
    comment_id: Option<usize>,
}

impl Annotation {
    fn new(highlight: Highlight, description: Option<String>) -> Self {
        Self { highlight, description, comment_id: None }
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn comment_id(&self) -> Option<usize> {
        self.comment_id
    }
}

/// A token with its annotation, if it has one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotatedToken {
    token: Token,
    annotation: Option<Annotation>,
}

impl AnnotatedToken {
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotatedFile {
    tokens: Vec<AnnotatedToken>,
    num_comments: usize,
}

impl AnnotatedFile {
    pub fn annotate(stream: &TokenStream) -> Self {
        AnnotationBuilder::new(stream).build()
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    /// Number of comments, closed or not.
    pub fn num_comments(&self) -> usize {
        self.num_comments
    }
}

struct AnnotationBuilder<'a> {
    original_tokens: &'a TokenStream,
    next_comment_id: usize,
    annotated_tokens: Vec<AnnotatedToken>,
}

impl<'a> AnnotationBuilder<'a> {
    fn new(original_tokens: &'a TokenStream) -> Self {
        Self {
            original_tokens,
            next_comment_id: 0,
            annotated_tokens: Vec::with_capacity(original_tokens.len()),
        }
    }

    fn step(&mut self, token: &Token) {
        let annotation = match token.kind() {
            Kind::Whitespace => None,
            Kind::Comment => Some(self.comment(Highlight::Comment, None)),
            Kind::UnterminatedComment => Some(self.comment(
                Highlight::UnterminatedComment,
                Some(String::from("This comment is never closed and hides the rest of the file.")),
            )),
            Kind::Word => annotate_word(token.lexeme()),
        };
        self.annotated_tokens.push(AnnotatedToken { token: token.clone(), annotation });
    }

    fn comment(&mut self, highlight: Highlight, description: Option<String>) -> Annotation {
        let mut annotation = Annotation::new(highlight, description);
        annotation.comment_id = Some(self.next_comment_id);
        self.next_comment_id += 1;
        annotation
    }

    fn build(mut self) -> AnnotatedFile {
        for token in self.original_tokens {
            self.step(token);
        }
        debug!(
            target: "rms::annotator",
            tokens = self.annotated_tokens.len(),
            comments = self.next_comment_id,
            "Annotated file"
        );
        AnnotatedFile {
            tokens: self.annotated_tokens,
            num_comments: self.next_comment_id,
        }
    }
}

fn annotate_word(word: &str) -> Option<Annotation> {
    if let Some(keyword) = rms_data::lookup(word) {
        let (highlight, description) = match keyword.category {
            Category::Section => (Highlight::Section, keyword.description.to_string()),
            Category::Directive => (Highlight::Directive, keyword.description.to_string()),
            Category::Conditional => (Highlight::Conditional, keyword.description.to_string()),
            Category::Random => (Highlight::Random, keyword.description.to_string()),
            Category::Brace => (Highlight::Brace, keyword.description.to_string()),
            Category::Label(label) => {
                (Highlight::Label, format!("{} label. {}", label, keyword.description))
            }
        };
        return Some(Annotation::new(highlight, Some(description)));
    }

    if word == "*/" {
        return Some(Annotation::new(
            Highlight::StrayCommentClose,
            Some(String::from("Closes no comment. The game reads this as an ordinary word.")),
        ));
    }
    if NUMBER.is_match(word) {
        return Some(Annotation::new(Highlight::Number, None));
    }
    if let Some(caps) = RND.captures(word) {
        let description = format!("Random integer from {} to {}, inclusive.", &caps[1], &caps[2]);
        return Some(Annotation::new(Highlight::Rnd, Some(description)));
    }
    None
}

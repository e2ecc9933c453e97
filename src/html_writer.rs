//! Writes an annotated map script to a debugging HTML file.
//!
//! Each source line becomes a list item, and each token a span with a hover card showing its
//! range, kind and description.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::annotator::{AnnotatedFile, AnnotatedToken};

/// The `<head>` section of the html file.
const HTML_HEAD: &str = r#"  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <link rel="stylesheet" href="style.css" />
    <title>Code</title>
  </head>"#;

/// Replaces `&`, `<` and `>` so that `s` shows up as text in html.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

struct LineWriter<'w, W: Write> {
    out: &'w mut W,
    line_in_progress: bool,
    lines: usize,
}

impl<'w, W: Write> LineWriter<'w, W> {
    fn open_line(&mut self) -> std::io::Result<()> {
        if !self.line_in_progress {
            writeln!(self.out, "      <li>")?;
            write!(self.out, "        <pre><code>")?;
            self.line_in_progress = true;
        }
        Ok(())
    }

    fn close_line(&mut self) -> std::io::Result<()> {
        if self.line_in_progress {
            writeln!(self.out, "</code></pre>")?;
            writeln!(self.out, "      </li>")?;
            self.line_in_progress = false;
            self.lines += 1;
        }
        Ok(())
    }

    fn write_token(&mut self, annotated: &AnnotatedToken) -> std::io::Result<()> {
        let token = annotated.token();
        // Tokens spanning lines, like whitespace and comments, are split at each line feed.
        for segment in token.lexeme().split_inclusive('\n') {
            let (text, ends_line) = match segment.strip_suffix('\n') {
                Some(text) => (text, true),
                None => (segment, false),
            };
            self.open_line()?;
            if token.is_whitespace() {
                write!(self.out, "{}", text)?;
            } else if !text.is_empty() {
                write!(self.out, "{}", span(annotated, text))?;
            }
            if ends_line {
                self.close_line()?;
            }
        }
        Ok(())
    }
}

fn span(annotated: &AnnotatedToken, text: &str) -> String {
    let token = annotated.token();
    let annotation = annotated.annotation();
    let class = annotation
        .map(|a| format!(" {}", a.highlight().class_name()))
        .unwrap_or_default();
    let comment_id = annotation
        .and_then(|a| a.comment_id())
        .map(|id| format!(" data-comment-id=\"{}\"", id))
        .unwrap_or_default();
    let description = annotation
        .and_then(|a| a.description())
        .map(|d| format!("<div>{}</div>", escape_html(d)))
        .unwrap_or_default();
    format!(
        "<span class=\"code-item{}\"{}>{}<div class=\"card\"><div>{}&ndash;{} {}</div>{}</div></span>",
        class,
        comment_id,
        escape_html(text),
        token.start(),
        token.end(),
        token.kind(),
        description
    )
}

pub fn write_debug_file<W: Write>(file: &AnnotatedFile, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "{HTML_HEAD}")?;
    writeln!(out, "  <body>")?;
    writeln!(out, "    <ol>")?;
    let mut lines = LineWriter { out: &mut *out, line_in_progress: false, lines: 0 };
    for token in file.tokens() {
        lines.write_token(token)?;
    }
    // Ends the final line in case the file does not end with a line feed.
    lines.close_line()?;
    let line_count = lines.lines;
    writeln!(out, "    </ol>")?;
    writeln!(out, "  </body>")?;
    writeln!(out, "</html>")?;
    debug!(target: "rms::html", lines = line_count, "Wrote debug html");
    Ok(())
}

/// Writes the debug html to `path`, overwriting the file if it exists.
pub fn write_debug_path(file: &AnnotatedFile, path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_debug_file(file, &mut out)?;
    out.flush()
}

use serde::Serialize;
use std::fmt;

use crate::classify::{classify, CharClass};
use crate::source::SourceBuffer;

/// A 1-indexed line and column in a source file.
///
/// Columns count characters, so a tab or a multi-byte character advances the column by one.
/// Ordering is reading order: by line, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line >= 1 && column >= 1);
        Self { line, column }
    }

    pub fn start_of_file() -> Self {
        Self::new(1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start_of_file()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Converts character offsets of one buffer into line and column positions.
///
/// The character following a line feed starts a new line; the line feed itself stays on the
/// line it terminates.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    /// Character offset of the first character of each line.
    line_starts: Vec<usize>,
    len: usize,
}

impl PositionTracker {
    pub fn new(source: &SourceBuffer) -> Self {
        let mut line_starts = vec![0];
        for (offset, &c) in source.chars().iter().enumerate() {
            if classify(c) == CharClass::LineTerminator {
                line_starts.push(offset + 1);
            }
        }
        Self { line_starts, len: source.len() }
    }

    /// Position of the character at `offset`. An offset equal to the buffer length is the
    /// end-of-file position.
    pub fn position(&self, offset: usize) -> Position {
        debug_assert!(offset <= self.len);
        // Index of the last line starting at or before `offset`.
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        Position::new(line_index + 1, offset - self.line_starts[line_index] + 1)
    }

    pub fn end_of_file(&self) -> Position {
        self.position(self.len)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/*!
# Hyperlink span

Character-offset range inside a single line of test output.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Half-open `[start, end)` range of char offsets into an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HyperlinkSpan {
    pub start: usize,
    pub end: usize,
}

impl HyperlinkSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Converts the char range into a byte range of `line`.
    ///
    /// Offsets past the end of the line are clamped to its length.
    pub fn byte_range(&self, line: &str) -> Range<usize> {
        let to_byte = |chars: usize| {
            line.char_indices()
                .nth(chars)
                .map(|(idx, _)| idx)
                .unwrap_or(line.len())
        };
        to_byte(self.start)..to_byte(self.end)
    }

    /// Returns the part of `line` covered by this span.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.byte_range(line)]
    }
}

impl fmt::Display for HyperlinkSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

//! Span tracking for source location information.
//!
//! Provides a `Span` struct that tracks byte offset, line number, and column
//! for precise error reporting on BOM file lines.

/// Represents a location span in the source file.
///
/// Line and column are 1-based for human-readable error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset from the start of the input (0-based).
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based).
    pub column: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span with the given position and length.
    pub fn new(offset: usize, line: usize, column: usize, length: usize) -> Self {
        Self {
            offset,
            line,
            column,
            length,
        }
    }

    /// Creates a span covering an entire line.
    pub fn line(offset: usize, line: usize, length: usize) -> Self {
        Self::new(offset, line, 1, length)
    }

    /// Returns the end offset of this span.
    pub fn end_offset(&self) -> usize {
        self.offset + self.length
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 1, 1, 0)
    }
}

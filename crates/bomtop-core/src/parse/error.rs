//! Error types for BOM file parsing.
//!
//! This module defines error types that capture parse failures along with
//! the offending line's raw text and source location.

use super::span::Span;
use thiserror::Error;

/// An error that occurred while parsing a BOM file.
///
/// Parsing is strict: the first malformed line fails the whole parse, so one
/// of these is always terminal for the run that produced it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no header line.
    #[error("empty input: expected a header line with the top-N count")]
    EmptyInput,

    /// The header line is not a non-negative integer.
    #[error("line {line}: invalid header {raw:?}: expected a non-negative integer")]
    InvalidHeader {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// The raw text of the header line.
        raw: String,
        /// Location in the source.
        span: Span,
    },

    /// An entry line matched none of the three syntaxes.
    #[error("line {line}: unrecognized BOM entry {raw:?}")]
    UnrecognizedEntry {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// The raw text of the entry line.
        raw: String,
        /// Location in the source.
        span: Span,
    },

    /// A matched entry line has an empty reference designator list.
    #[error("line {line}: entry {raw:?} has an empty reference designator list")]
    MissingRefDes {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// The raw text of the entry line.
        raw: String,
        /// Location in the source.
        span: Span,
    },
}

impl ParseError {
    /// Creates an invalid header error.
    pub fn invalid_header(raw: impl Into<String>, span: Span) -> Self {
        Self::InvalidHeader {
            line: span.line,
            raw: raw.into(),
            span,
        }
    }

    /// Creates an unrecognized entry error.
    pub fn unrecognized_entry(raw: impl Into<String>, span: Span) -> Self {
        Self::UnrecognizedEntry {
            line: span.line,
            raw: raw.into(),
            span,
        }
    }

    /// Creates a missing reference designators error.
    pub fn missing_ref_des(raw: impl Into<String>, span: Span) -> Self {
        Self::MissingRefDes {
            line: span.line,
            raw: raw.into(),
            span,
        }
    }

    /// Returns the span associated with this error, if any.
    pub fn span(&self) -> Option<&Span> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::InvalidHeader { span, .. } => Some(span),
            ParseError::UnrecognizedEntry { span, .. } => Some(span),
            ParseError::MissingRefDes { span, .. } => Some(span),
        }
    }

    /// Returns the line number where this error occurred, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::InvalidHeader { line, .. } => Some(*line),
            ParseError::UnrecognizedEntry { line, .. } => Some(*line),
            ParseError::MissingRefDes { line, .. } => Some(*line),
        }
    }
}

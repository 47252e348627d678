//! AST data structures for BOM files.
//!
//! This module defines the nodes that represent parsed BOM file content:
//! the part identity, the per-line entries, and the file as a whole.

use super::span::Span;
use serde::Serialize;
use std::fmt::{self, Display};

/// The entry syntax a line was written in.
///
/// Every entry line carries one of three delimiter structures. The variant is
/// recorded on the parsed entry, but all three normalize to the same
/// (manufacturer, MPN, reference designators) tuple downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// `Manufacturer -- PartNumber:RefDes1,RefDes2,...`
    DashDelimited,
    /// `PartNumber:Manufacturer:RefDes1,RefDes2,...`
    ColonDelimited,
    /// `RefDes1,RefDes2,...;PartNumber;Manufacturer`
    SemicolonDelimited,
}

impl Syntax {
    /// Returns a short human-readable name for this syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Syntax::DashDelimited => "dash-delimited",
            Syntax::ColonDelimited => "colon-delimited",
            Syntax::SemicolonDelimited => "semicolon-delimited",
        }
    }
}

impl Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A part identity: manufacturer plus manufacturer part number.
///
/// An MPN can be common across multiple manufacturers, so the pair is the
/// counting key. The manufacturer may be empty when a line leaves it blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Part {
    /// The manufacturer name (may be empty).
    pub manufacturer: String,
    /// The manufacturer part number.
    pub mpn: String,
}

impl Part {
    /// Creates a new part identity.
    pub fn new(manufacturer: impl Into<String>, mpn: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            mpn: mpn.into(),
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.manufacturer.is_empty() {
            f.write_str(&self.mpn)
        } else {
            write!(f, "{} {}", self.manufacturer, self.mpn)
        }
    }
}

/// Represents the kind of line in a BOM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A blank line (may contain only whitespace).
    Blank,
    /// The header line holding the top-N count.
    Header {
        /// The number of top parts to report.
        limit: usize,
    },
    /// An entry line naming a part and its reference designators.
    Entry {
        /// The delimiter syntax the line was written in.
        syntax: Syntax,
        /// The part identity extracted from the line.
        part: Part,
        /// The reference designators listed on the line, in order.
        ref_des: Vec<String>,
    },
}

/// Represents a single line in a BOM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The kind/content of this line.
    pub kind: LineKind,
    /// Location of the entire line in the source file.
    pub span: Span,
}

impl Line {
    /// Creates a new line with the given kind and span.
    pub fn new(kind: LineKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates a blank line.
    pub fn blank(span: Span) -> Self {
        Self::new(LineKind::Blank, span)
    }

    /// Creates the header line.
    pub fn header(limit: usize, span: Span) -> Self {
        Self::new(LineKind::Header { limit }, span)
    }

    /// Creates an entry line.
    pub fn entry(syntax: Syntax, part: Part, ref_des: Vec<String>, span: Span) -> Self {
        Self::new(
            LineKind::Entry {
                syntax,
                part,
                ref_des,
            },
            span,
        )
    }

    /// Returns true if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    /// Returns true if this is the header line.
    pub fn is_header(&self) -> bool {
        matches!(self.kind, LineKind::Header { .. })
    }

    /// Returns true if this is an entry line.
    pub fn is_entry(&self) -> bool {
        matches!(self.kind, LineKind::Entry { .. })
    }
}

/// The complete parsed contents of a BOM file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomFile {
    /// The top-N count from the header line.
    pub limit: usize,
    /// All lines in the file, in order.
    pub lines: Vec<Line>,
}

impl BomFile {
    /// Creates a new BOM file AST from the header limit and lines.
    pub fn new(limit: usize, lines: Vec<Line>) -> Self {
        Self { limit, lines }
    }

    /// Returns an iterator over the entry lines as
    /// (part, reference designators) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&Part, &[String])> {
        self.lines.iter().filter_map(|line| match &line.kind {
            LineKind::Entry { part, ref_des, .. } => Some((part, ref_des.as_slice())),
            _ => None,
        })
    }

    /// Returns the number of entry lines.
    pub fn entry_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_entry()).count()
    }
}

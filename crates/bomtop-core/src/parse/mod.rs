//! Parser module for BOM files.
//!
//! A BOM file starts with a header line holding the top-N count, followed by
//! one entry per line describing a part in one of three delimiter syntaxes.
//! This module parses that format into an AST with span metadata for error
//! reporting.
//!
//! # Example
//!
//! ```rust
//! use bomtop_core::parse::parse_bom;
//!
//! let input = "2\nZ1,Z3;40001;Keystone\n";
//!
//! let file = parse_bom(input).expect("valid BOM");
//! assert_eq!(file.limit, 2);
//! for (part, ref_des) in file.entries() {
//!     println!("{}: {:?}", part, ref_des);
//! }
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
pub mod span;

// Re-export public types
pub use ast::{BomFile, Line, LineKind, Part, Syntax};
pub use error::ParseError;
pub use parser::parse_bom;
pub use span::Span;

// Re-export lexer utilities that may be useful for custom parsing
pub use lexer::{RawEntry, parse_entry, split_ref_des};

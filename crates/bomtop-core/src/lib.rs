//! BOM Top-N Core
//!
//! A library for parsing text BOM (bill of materials) files and reporting
//! their most frequently occurring parts.
//!
//! A BOM file starts with a header line holding the top-N count. Each
//! following non-blank line names a part (manufacturer and manufacturer part
//! number) along with the reference designators that place it, in one of
//! three delimiter syntaxes:
//!
//! ```text
//! 2
//! Wintermute Systems -- CASE-19201:A2,A3
//! AXXX-1000:Panasonic:D1,D8,D9
//! Z1,Z3;40001;Keystone
//! Z1,Z3,Z8;40001;Keystone
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use bomtop_core::{parse_bom, rank_parts};
//!
//! let input = "2\n\
//!     Wintermute Systems -- CASE-19201:A2,A3\n\
//!     AXXX-1000:Panasonic:D1,D8,D9\n\
//!     Z1,Z3;40001;Keystone\n\
//!     Z1,Z3,Z8;40001;Keystone\n";
//!
//! let file = parse_bom(input).expect("valid BOM");
//! let ranked = rank_parts(&file);
//!
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].part.manufacturer, "Keystone");
//! assert_eq!(ranked[0].part.mpn, "40001");
//! assert_eq!(ranked[0].count, 5);
//! ```
//!
//! Parsing is strict: the first malformed line fails the whole parse with a
//! [`parse::ParseError`] naming the line.
//!
//! # Modules
//!
//! - [`parse`]: Parser for BOM files
//! - [`report`]: Occurrence counting and top-N ranking

pub mod parse;
pub mod report;

// Re-export commonly used types at the crate root
pub use parse::{BomFile, ParseError, Part, parse_bom};
pub use report::{PartCount, rank_parts, rank_parts_with_limit};

//! Line and file-level parsers for BOM files.
//!
//! This module combines the lexer components to classify complete lines
//! and parse entire BOM files.

use super::ast::{BomFile, Line, Part};
use super::error::ParseError;
use super::lexer::{is_blank_line, parse_entry, split_ref_des};
use super::span::Span;
use log::{debug, trace};

/// Parses a single entry line into a Line AST node.
fn parse_entry_line(text: &str, span: Span) -> Result<Line, ParseError> {
    let Some(raw) = parse_entry(text) else {
        return Err(ParseError::unrecognized_entry(text, span));
    };

    let Some(tokens) = split_ref_des(raw.ref_des_csv) else {
        return Err(ParseError::missing_ref_des(text, span));
    };

    let part = Part::new(raw.manufacturer, raw.mpn);
    let ref_des = tokens.into_iter().map(str::to_owned).collect();
    Ok(Line::entry(raw.syntax, part, ref_des, span))
}

/// Parses the header line into the top-N count.
fn parse_header_line(text: &str, span: Span) -> Result<usize, ParseError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ParseError::invalid_header(text, span))
}

/// Parses a complete BOM file.
///
/// The first non-blank line must be a non-negative integer giving the top-N
/// count; every following non-blank line must be an entry in one of the three
/// syntaxes. Parsing is strict: the first malformed line fails the whole
/// parse, since BOM integrity must not be silently degraded.
pub fn parse_bom(input: &str) -> Result<BomFile, ParseError> {
    debug!("Parsing BOM file ({} bytes)", input.len());

    let mut lines = Vec::new();
    let mut limit: Option<usize> = None;
    let mut offset = 0;

    for (line_idx, raw) in input.split_inclusive('\n').enumerate() {
        let line_num = line_idx + 1; // 1-based line numbers
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        let span = Span::line(offset, line_num, text.len());

        if is_blank_line(text) {
            lines.push(Line::blank(span));
        } else if limit.is_none() {
            let n = parse_header_line(text, span)?;
            trace!("Line {}: header, top-N count {}", line_num, n);
            limit = Some(n);
            lines.push(Line::header(n, span));
        } else {
            let line = parse_entry_line(text, span)?;
            trace!("Line {}: entry", line_num);
            lines.push(line);
        }

        offset += raw.len();
    }

    let Some(limit) = limit else {
        debug!("No header line found");
        return Err(ParseError::EmptyInput);
    };

    let file = BomFile::new(limit, lines);
    debug!(
        "Parsing complete: limit {}, {} entries",
        file.limit,
        file.entry_count()
    );
    Ok(file)
}

//! Lexer for BOM entry lines.
//!
//! This module contains nom-based parsers for the three entry syntaxes.
//! Each line is tried against the syntaxes in a fixed priority order
//! (dash, colon, semicolon); the first structural match wins.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::char,
    combinator::rest,
};

use super::ast::Syntax;

/// The raw fields of an entry line before AST construction.
///
/// Manufacturer and MPN are trimmed; the reference designator list is left
/// as the raw comma-separated text for the caller to split and validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// The syntax that matched.
    pub syntax: Syntax,
    /// The manufacturer name (may be empty).
    pub manufacturer: &'a str,
    /// The manufacturer part number (never blank).
    pub mpn: &'a str,
    /// The comma-separated reference designator text.
    pub ref_des_csv: &'a str,
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Tries the three entry syntaxes in priority order.
///
/// Returns `None` if the line matches none of them. A structural match with
/// an empty reference designator list still returns `Some`; the caller
/// reports that as its own error.
pub fn parse_entry(line: &str) -> Option<RawEntry<'_>> {
    dash_entry(line)
        .or_else(|| colon_entry(line))
        .or_else(|| semicolon_entry(line))
}

/// `Manufacturer -- PartNumber:RefDes1,RefDes2,...`
fn dash_entry(input: &str) -> Option<RawEntry<'_>> {
    let result: IResult<&str, (&str, &str, &str)> =
        (take_until(" -- "), tag(" -- "), take_until(":"), char(':'), rest)
            .map(|(manufacturer, _, mpn, _, refs)| (manufacturer, mpn, refs))
            .parse(input);
    let (_, (manufacturer, mpn, refs)) = result.ok()?;
    make_entry(Syntax::DashDelimited, manufacturer, mpn, refs)
}

/// `PartNumber:Manufacturer:RefDes1,RefDes2,...`
fn colon_entry(input: &str) -> Option<RawEntry<'_>> {
    let result: IResult<&str, (&str, &str, &str)> = (
        take_while1(|c: char| c != ':'),
        char(':'),
        take_while(|c: char| c != ':'),
        char(':'),
        rest,
    )
        .map(|(mpn, _, manufacturer, _, refs)| (manufacturer, mpn, refs))
        .parse(input);
    let (_, (manufacturer, mpn, refs)) = result.ok()?;
    // Exactly three colon-separated fields
    if refs.contains(':') {
        return None;
    }
    make_entry(Syntax::ColonDelimited, manufacturer, mpn, refs)
}

/// `RefDes1,RefDes2,...;PartNumber;Manufacturer`
fn semicolon_entry(input: &str) -> Option<RawEntry<'_>> {
    let result: IResult<&str, (&str, &str, &str)> = (
        take_while(|c: char| c != ';'),
        char(';'),
        take_while1(|c: char| c != ';'),
        char(';'),
        rest,
    )
        .map(|(refs, _, mpn, _, manufacturer)| (manufacturer, mpn, refs))
        .parse(input);
    let (_, (manufacturer, mpn, refs)) = result.ok()?;
    // Exactly three semicolon-separated fields
    if manufacturer.contains(';') {
        return None;
    }
    make_entry(Syntax::SemicolonDelimited, manufacturer, mpn, refs)
}

/// Trims the extracted fields and rejects blank part numbers.
fn make_entry<'a>(
    syntax: Syntax,
    manufacturer: &'a str,
    mpn: &'a str,
    ref_des_csv: &'a str,
) -> Option<RawEntry<'a>> {
    let mpn = mpn.trim();
    if mpn.is_empty() {
        return None;
    }
    Some(RawEntry {
        syntax,
        manufacturer: manufacturer.trim(),
        mpn,
        ref_des_csv,
    })
}

/// Splits a comma-separated reference designator list into trimmed tokens.
///
/// Returns `None` if the list is empty or contains a blank token.
pub fn split_ref_des(csv: &str) -> Option<Vec<&str>> {
    if csv.trim().is_empty() {
        return None;
    }
    let tokens: Vec<&str> = csv.split(',').map(str::trim).collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return None;
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_blank_line_cases() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   "));
        assert!(is_blank_line("\t  \t"));
        assert!(!is_blank_line("Z1,Z3;40001;Keystone"));
    }

    #[test]
    fn parse_entry_dash_syntax() {
        let entry = parse_entry("Wintermute Systems -- CASE-19201:A2,A3").unwrap();
        assert_eq!(entry.syntax, Syntax::DashDelimited);
        assert_eq!(entry.manufacturer, "Wintermute Systems");
        assert_eq!(entry.mpn, "CASE-19201");
        assert_eq!(entry.ref_des_csv, "A2,A3");
    }

    #[test]
    fn parse_entry_colon_syntax() {
        let entry = parse_entry("AXXX-1000:Panasonic:D1,D8,D9").unwrap();
        assert_eq!(entry.syntax, Syntax::ColonDelimited);
        assert_eq!(entry.manufacturer, "Panasonic");
        assert_eq!(entry.mpn, "AXXX-1000");
        assert_eq!(entry.ref_des_csv, "D1,D8,D9");
    }

    #[test]
    fn parse_entry_semicolon_syntax() {
        let entry = parse_entry("Z1,Z3;40001;Keystone").unwrap();
        assert_eq!(entry.syntax, Syntax::SemicolonDelimited);
        assert_eq!(entry.manufacturer, "Keystone");
        assert_eq!(entry.mpn, "40001");
        assert_eq!(entry.ref_des_csv, "Z1,Z3");
    }

    #[test]
    fn equivalent_content_normalizes_identically() {
        let dash = parse_entry("Keystone -- 40001:Z1,Z3").unwrap();
        let colon = parse_entry("40001:Keystone:Z1,Z3").unwrap();
        let semi = parse_entry("Z1,Z3;40001;Keystone").unwrap();

        for entry in [&dash, &colon, &semi] {
            assert_eq!(entry.manufacturer, "Keystone");
            assert_eq!(entry.mpn, "40001");
            assert_eq!(split_ref_des(entry.ref_des_csv).unwrap(), vec!["Z1", "Z3"]);
        }
    }

    #[test]
    fn dash_syntax_takes_priority_over_colon() {
        // Contains both " -- " and a colon; the dash syntax is tried first.
        let entry = parse_entry("Acme Corp -- PN-1:R1,R2").unwrap();
        assert_eq!(entry.syntax, Syntax::DashDelimited);
        assert_eq!(entry.manufacturer, "Acme Corp");
        assert_eq!(entry.mpn, "PN-1");
    }

    #[test]
    fn colon_syntax_requires_exactly_three_fields() {
        assert!(parse_entry("a:b:c:d").is_none());
    }

    #[test]
    fn semicolon_syntax_requires_exactly_three_fields() {
        assert!(parse_entry("a;b;c;d").is_none());
    }

    #[test]
    fn colon_syntax_allows_empty_manufacturer() {
        let entry = parse_entry("AXXX-1000::D1").unwrap();
        assert_eq!(entry.syntax, Syntax::ColonDelimited);
        assert_eq!(entry.manufacturer, "");
        assert_eq!(entry.mpn, "AXXX-1000");
    }

    #[test]
    fn blank_mpn_is_not_a_match() {
        assert!(parse_entry("Z1,Z3; ;Keystone").is_none());
    }

    #[test]
    fn unstructured_line_is_not_a_match() {
        assert!(parse_entry("this is not a bom line").is_none());
        assert!(parse_entry("R1,R2,R3").is_none());
    }

    #[test]
    fn structural_match_with_empty_ref_des_is_still_a_match() {
        let entry = parse_entry("Acme -- PN-1:").unwrap();
        assert_eq!(entry.ref_des_csv, "");
        assert!(split_ref_des(entry.ref_des_csv).is_none());
    }

    #[test]
    fn split_ref_des_trims_tokens() {
        assert_eq!(split_ref_des("A2, A3 ,A4").unwrap(), vec!["A2", "A3", "A4"]);
    }

    #[test]
    fn split_ref_des_rejects_blank_tokens() {
        assert!(split_ref_des("").is_none());
        assert!(split_ref_des("   ").is_none());
        assert!(split_ref_des("A2,,A3").is_none());
        assert!(split_ref_des("A2,").is_none());
    }
}

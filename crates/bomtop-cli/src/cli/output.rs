//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for the
//! ranked part report.

use bomtop_core::PartCount;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// JSON output format.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// The ranked parts, most frequent first.
    pub parts: Vec<JsonPart>,
}

impl JsonOutput {
    /// Creates a JSON output from a ranked part list.
    pub fn from_ranked(ranked: &[PartCount]) -> Self {
        Self {
            parts: ranked.iter().map(JsonPart::from).collect(),
        }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// A single ranked part in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonPart {
    /// The manufacturer name (may be empty).
    pub manufacturer: String,
    /// The manufacturer part number.
    pub mpn: String,
    /// Number of reference designator occurrences.
    pub count: u64,
}

impl From<&PartCount> for JsonPart {
    fn from(ranked: &PartCount) -> Self {
        Self {
            manufacturer: ranked.part.manufacturer.clone(),
            mpn: ranked.part.mpn.clone(),
            count: ranked.count,
        }
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes the ranked report, one part per line.
    pub fn write_report(&mut self, ranked: &[PartCount]) -> std::io::Result<()> {
        let header = format!("==> top {} part(s)", ranked.len());
        if self.use_colors {
            writeln!(self.writer, "{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "{}", header)?;
        }

        for part_count in ranked {
            let label = format!(
                "({}, {})",
                part_count.part.manufacturer, part_count.part.mpn
            );
            if self.use_colors {
                writeln!(self.writer, "{}: {}", label, part_count.count.to_string().bold())?;
            } else {
                writeln!(self.writer, "{}: {}", label, part_count.count)?;
            }
        }

        Ok(())
    }

    /// Writes an error message.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)
        } else {
            writeln!(self.writer, "Error: {}", message)
        }
    }
}

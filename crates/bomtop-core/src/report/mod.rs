//! Occurrence counting and top-N ranking for parsed BOM files.
//!
//! Every reference designator listed on an entry line adds one occurrence to
//! that line's part identity. Counts accumulate across lines for the same
//! (manufacturer, MPN) key, then the parts are ranked by descending count
//! with ties broken by first appearance in the input.

use crate::parse::{BomFile, Part};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

/// A ranked part with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartCount {
    /// The part identity.
    #[serde(flatten)]
    pub part: Part,
    /// Number of reference designator occurrences.
    pub count: u64,
}

/// Ranks the parts in a BOM file using the file's own header count.
///
/// See [`rank_parts_with_limit`] for the ranking rules.
pub fn rank_parts(file: &BomFile) -> Vec<PartCount> {
    rank_parts_with_limit(file, file.limit)
}

/// Ranks the parts in a BOM file, returning at most `limit` entries.
///
/// Parts are sorted by descending occurrence count; ties keep first-seen
/// order from the input. If fewer than `limit` distinct parts exist, all of
/// them are returned. A limit of zero yields an empty result.
pub fn rank_parts_with_limit(file: &BomFile, limit: usize) -> Vec<PartCount> {
    // IndexMap keeps insertion order, which is the tie-break order.
    let mut counts: IndexMap<&Part, u64> = IndexMap::new();
    for (part, ref_des) in file.entries() {
        *counts.entry(part).or_insert(0) += ref_des.len() as u64;
    }
    debug!("Tallied {} distinct parts", counts.len());

    let mut ranked: Vec<PartCount> = counts
        .into_iter()
        .map(|(part, count)| PartCount {
            part: part.clone(),
            count,
        })
        .collect();
    // Stable sort preserves first-seen order among equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

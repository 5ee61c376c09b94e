//! Year-level aggregation over diary entries.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::entry::DiaryEntry;

/// Number of tags reported in `YearStats::top_tags`.
pub const TOP_TAG_LIMIT: usize = 3;

/// Aggregate counts for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStats {
    /// Distinct dates with at least one entry
    pub days_with_entries: usize,

    /// Month (1..=12) with the most entries; earliest month wins ties
    pub top_month: Option<u32>,

    /// Entry count per month, January first
    pub month_counts: [u32; 12],

    /// Most used tags, at most three, with shared ranks on ties
    pub top_tags: Vec<TagRank>,
}

impl YearStats {
    pub fn total_entries(&self) -> u32 {
        self.month_counts.iter().sum()
    }

    /// Count for a 1-based month; out-of-range months count as zero.
    pub fn month_count(&self, month: u32) -> u32 {
        match month {
            1..=12 => self.month_counts[(month - 1) as usize],
            _ => 0,
        }
    }
}

/// A tag with its usage count and rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRank {
    pub tag: String,
    pub count: u32,
    pub rank: u32,
}

/// Compute statistics over the entries whose date falls in `year`.
pub fn year_stats(entries: &[DiaryEntry], year: i32) -> YearStats {
    let prefix = format!("{}-", year);
    let mut dates = BTreeSet::new();
    let mut month_counts = [0u32; 12];
    let mut tag_counts: HashMap<&str, u32> = HashMap::new();

    for entry in entries.iter().filter(|e| e.date.starts_with(&prefix)) {
        dates.insert(entry.date.as_str());
        if let Some(month @ 1..=12) = entry.month() {
            month_counts[(month - 1) as usize] += 1;
        }
        for tag in &entry.tags {
            let key = tag.trim();
            if !key.is_empty() {
                *tag_counts.entry(key).or_insert(0) += 1;
            }
        }
    }

    YearStats {
        days_with_entries: dates.len(),
        top_month: top_month(&month_counts),
        month_counts,
        top_tags: rank_tags(tag_counts, TOP_TAG_LIMIT),
    }
}

/// Month with the strictly greatest count; `None` when every count is zero.
pub fn top_month(month_counts: &[u32; 12]) -> Option<u32> {
    let mut best = None;
    let mut max = 0;
    for (index, &count) in month_counts.iter().enumerate() {
        if count > max {
            max = count;
            best = Some(index as u32 + 1);
        }
    }
    best
}

/// Tag order for listings: case-insensitive first, exact text on ties.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order tags by count (descending) then name, keep `limit`, and assign
/// dense ranks: equal counts share a rank and the next distinct count gets
/// the following rank.
pub fn rank_tags<'a, I>(counts: I, limit: usize) -> Vec<TagRank>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut sorted: Vec<(&str, u32)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| compare_tags(a.0, b.0)));

    let mut ranked = Vec::with_capacity(limit.min(sorted.len()));
    let mut rank = 0;
    let mut previous = None;
    for (tag, count) in sorted.into_iter().take(limit) {
        if previous != Some(count) {
            rank += 1;
        }
        ranked.push(TagRank {
            tag: tag.to_string(),
            count,
            rank,
        });
        previous = Some(count);
    }
    ranked
}

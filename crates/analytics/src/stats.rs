//! Aggregations behind the Dashboard and Analytics pages.

use indexmap::IndexMap;
use serde::Serialize;

use clearlabel_products::{ProductRecord, ProductStatus, Score};

/// Histogram bucket labels and their inclusive upper bounds.
const BUCKETS: [(&str, u8); 3] = [("0-59", 59), ("60-79", 79), ("80-100", 100)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagCount {
    pub flag: String,
    pub count: usize,
}

/// Record count per derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    #[serde(rename = "Approved")]
    pub approved: usize,
    #[serde(rename = "Pending")]
    pub pending: usize,
    #[serde(rename = "Flagged")]
    pub flagged: usize,
}

impl StatusBreakdown {
    pub fn get(&self, status: ProductStatus) -> usize {
        match status {
            ProductStatus::Approved => self.approved,
            ProductStatus::Pending => self.pending,
            ProductStatus::Flagged => self.flagged,
        }
    }

    pub fn total(&self) -> usize {
        self.approved + self.pending + self.flagged
    }

    fn increment(&mut self, status: ProductStatus) {
        match status {
            ProductStatus::Approved => self.approved += 1,
            ProductStatus::Pending => self.pending += 1,
            ProductStatus::Flagged => self.flagged += 1,
        }
    }
}

/// Mean score rounded half up; `0` for an empty collection.
pub fn average_score(records: &[ProductRecord]) -> Score {
    if records.is_empty() {
        return Score::MIN;
    }
    let n = records.len() as i64;
    let sum: i64 = records.iter().map(|r| i64::from(r.score.value())).sum();
    Score::new((2 * sum + n) / (2 * n))
}

/// Counts per fixed bucket: `[0,60)`, `[60,80)`, `[80,100]`.
pub fn score_histogram(records: &[ProductRecord]) -> Vec<ScoreBucket> {
    let mut buckets: Vec<ScoreBucket> = BUCKETS
        .iter()
        .map(|&(label, _)| ScoreBucket { label, count: 0 })
        .collect();
    for record in records {
        let score = record.score.value();
        if let Some(slot) = BUCKETS.iter().position(|(_, upper)| score <= *upper) {
            buckets[slot].count += 1;
        }
    }
    buckets
}

pub fn status_breakdown(records: &[ProductRecord]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for record in records {
        breakdown.increment(record.status());
    }
    breakdown
}

/// Up to `n` records by descending score. Equal scores keep input order.
pub fn top_n(records: &[ProductRecord], n: usize) -> Vec<&ProductRecord> {
    let mut ranked: Vec<&ProductRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(n);
    ranked
}

/// Most frequent flags, descending by count; ties keep first-seen order.
pub fn flag_frequency(records: &[ProductRecord], limit: usize) -> Vec<FlagCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for flag in records.iter().flat_map(|r| r.flags.iter()) {
        *counts.entry(flag.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<FlagCount> = counts
        .into_iter()
        .map(|(flag, count)| FlagCount {
            flag: flag.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

//! Products page search and filtering.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use clearlabel_products::{ProductRecord, ProductStatus, Score};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProductStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ProductStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = <ProductStatus as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Name search + inclusive score range + status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub query: String,
    pub min_score: Score,
    pub max_score: Score,
    pub status: StatusFilter,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            min_score: Score::MIN,
            max_score: Score::MAX,
            status: StatusFilter::All,
        }
    }
}

impl ProductFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_score_range(mut self, min: Score, max: Score) -> Self {
        self.min_score = min;
        self.max_score = max;
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, record: &ProductRecord) -> bool {
        let query = self.query.to_lowercase();
        self.matches_lowered(record, &query)
    }

    /// Matching records in input order.
    pub fn apply<'a>(&self, records: &'a [ProductRecord]) -> Vec<&'a ProductRecord> {
        let query = self.query.to_lowercase();
        records
            .iter()
            .filter(|r| self.matches_lowered(r, &query))
            .collect()
    }

    fn matches_lowered(&self, record: &ProductRecord, query: &str) -> bool {
        record.product_name.to_lowercase().contains(query)
            && record.score >= self.min_score
            && record.score <= self.max_score
            && self.status.matches(record.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::tests::record;

    fn named(id: u64, name: &str, score: i64) -> ProductRecord {
        ProductRecord {
            product_name: name.to_string(),
            ..record(id, score, &[])
        }
    }

    #[test]
    fn default_filter_keeps_everything() {
        let records = [named(1, "Oat Bar", 10), named(2, "Soap", 99)];
        assert_eq!(ProductFilter::default().apply(&records).len(), 2);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let records = [named(1, "Organic Oat Bar", 85), named(2, "Soap", 85)];
        let hits = ProductFilter::default().with_query("OAT").apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Organic Oat Bar");
    }

    #[test]
    fn score_range_is_inclusive() {
        let records = [named(1, "a", 59), named(2, "b", 60), named(3, "c", 80), named(4, "d", 81)];
        let hits = ProductFilter::default()
            .with_score_range(Score::new(60), Score::new(80))
            .apply(&records);
        let names: Vec<_> = hits.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn status_filter_uses_derived_status() {
        let records = [named(1, "a", 95), named(2, "b", 65), named(3, "c", 20)];
        let hits = ProductFilter::default()
            .with_status(StatusFilter::Only(ProductStatus::Pending))
            .apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "b");
    }

    #[test]
    fn status_filter_parses_all_and_statuses() {
        assert_eq!("All".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "flagged".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ProductStatus::Flagged)
        );
        assert!("maybe".parse::<StatusFilter>().is_err());
    }
}

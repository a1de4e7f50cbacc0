//! Page-level bundles of the aggregations.

use serde::Serialize;

use clearlabel_products::{ProductRecord, ProductStatus, Score};

use crate::stats::{
    FlagCount, ScoreBucket, StatusBreakdown, average_score, flag_frequency, score_histogram,
    status_breakdown, top_n,
};

/// Dashboard verdict on the catalog-wide average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Advisory {
    Excellent,
    GoodProgress,
    NeedsReview,
}

impl Advisory {
    /// Same bands as [`ProductStatus`].
    pub fn for_average(average: Score) -> Self {
        match average.status() {
            ProductStatus::Approved => Advisory::Excellent,
            ProductStatus::Pending => Advisory::GoodProgress,
            ProductStatus::Flagged => Advisory::NeedsReview,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Excellent => "Excellent! Your transparency standards are top-tier.",
            Advisory::GoodProgress => "Good progress! Keep improving your product clarity.",
            Advisory::NeedsReview => {
                "Consider reviewing flagged products to enhance transparency."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary<'a> {
    pub total_products: usize,
    pub status_counts: StatusBreakdown,
    pub average_score: Score,
    pub top_products: Vec<&'a ProductRecord>,
    pub advisory: Advisory,
    pub advisory_message: &'static str,
}

impl<'a> DashboardSummary<'a> {
    pub fn compute(records: &'a [ProductRecord], top: usize) -> Self {
        let average = average_score(records);
        let advisory = Advisory::for_average(average);
        Self {
            total_products: records.len(),
            status_counts: status_breakdown(records),
            average_score: average,
            top_products: top_n(records, top),
            advisory,
            advisory_message: advisory.message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport<'a> {
    pub total_products: usize,
    pub average_score: Score,
    pub flagged_items: usize,
    pub top_performer: Option<&'a str>,
    pub score_distribution: Vec<ScoreBucket>,
    pub status_breakdown: StatusBreakdown,
    pub top_products: Vec<&'a ProductRecord>,
    pub common_flags: Vec<FlagCount>,
}

impl<'a> AnalyticsReport<'a> {
    pub fn compute(records: &'a [ProductRecord], top: usize, flag_limit: usize) -> Self {
        let breakdown = status_breakdown(records);
        let top_products = top_n(records, top);
        Self {
            total_products: records.len(),
            average_score: average_score(records),
            flagged_items: breakdown.flagged,
            top_performer: top_products.first().map(|r| r.product_name.as_str()),
            score_distribution: score_histogram(records),
            status_breakdown: breakdown,
            top_products,
            common_flags: flag_frequency(records, flag_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::tests::record;

    #[test]
    fn advisory_follows_status_bands() {
        assert_eq!(Advisory::for_average(Score::new(80)), Advisory::Excellent);
        assert_eq!(Advisory::for_average(Score::new(60)), Advisory::GoodProgress);
        assert_eq!(Advisory::for_average(Score::new(59)), Advisory::NeedsReview);
    }

    #[test]
    fn dashboard_summary_over_a_small_catalog() {
        let records = [record(1, 90, &[]), record(2, 70, &[]), record(3, 40, &["Vague"])];
        let summary = DashboardSummary::compute(&records, 2);
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.average_score.value(), 67);
        assert_eq!(summary.advisory, Advisory::GoodProgress);
        assert_eq!(summary.top_products.len(), 2);
        assert_eq!(summary.status_counts.flagged, 1);
    }

    #[test]
    fn analytics_report_on_empty_catalog() {
        let report = AnalyticsReport::compute(&[], 5, 5);
        assert_eq!(report.total_products, 0);
        assert_eq!(report.average_score, Score::MIN);
        assert_eq!(report.top_performer, None);
        assert!(report.common_flags.is_empty());
        assert_eq!(report.score_distribution.len(), 3);
    }

    #[test]
    fn analytics_report_names_the_top_performer() {
        let records = [record(1, 62, &["Late"]), record(2, 97, &[]), record(3, 30, &["Late"])];
        let report = AnalyticsReport::compute(&records, 5, 5);
        assert_eq!(report.top_performer, Some("Product 2"));
        assert_eq!(report.flagged_items, 1);
        assert_eq!(report.common_flags[0].count, 2);
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let records = [record(1, 85, &[])];
        let json = serde_json::to_value(AnalyticsReport::compute(&records, 5, 5)).unwrap();
        assert_eq!(json["averageScore"], 85);
        assert_eq!(json["statusBreakdown"]["Approved"], 1);
        assert_eq!(json["scoreDistribution"][2]["label"], "80-100");
    }
}

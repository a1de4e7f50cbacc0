use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use clearlabel_products::Score;

/// Outcome of a transparency review.
///
/// This is feedback for display, not a product record: nothing in the catalog is
/// mutated by producing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub score: Score,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewResult {
    pub fn new(score: Score, summary: impl Into<String>) -> Self {
        Self {
            score,
            summary: summary.into(),
            suggestions: Vec::new(),
            reviewed_at: Utc::now(),
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reviewed_at(mut self, reviewed_at: DateTime<Utc>) -> Self {
        self.reviewed_at = reviewed_at;
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("invalid draft: {0}")]
    InvalidInput(String),

    #[error("scoring service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("scoring timed out after {0:?}")]
    Timeout(Duration),

    /// The caller stopped waiting before the service answered.
    #[error("scoring was cancelled before it completed")]
    Cancelled,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ScoringError {
    /// Whether re-submitting the same draft may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ScoringError::ServiceUnavailable(_)
                | ScoringError::Timeout(_)
                | ScoringError::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_suggestions_in_order() {
        let result = ReviewResult::new(Score::new(88), "ok").with_suggestions(["a", "b"]);
        assert_eq!(result.suggestions, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.score.value(), 88);
    }

    #[test]
    fn timeouts_and_outages_are_retryable() {
        assert!(ScoringError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(ScoringError::ServiceUnavailable("503".into()).is_retryable());
        assert!(ScoringError::Cancelled.is_retryable());
        assert!(!ScoringError::InvalidInput("no name".into()).is_retryable());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = ReviewResult::new(Score::new(75), "fine");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 75);
        assert!(json.get("reviewedAt").is_some());
    }
}

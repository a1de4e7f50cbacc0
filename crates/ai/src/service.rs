use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use clearlabel_products::ProductDraft;

use crate::result::{ReviewResult, ScoringError};

/// Produces a transparency review for a completed draft.
///
/// Implementations must not mutate the draft; the wizard keeps ownership of it.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn score(&self, draft: &ProductDraft) -> Result<ReviewResult, ScoringError>;
}

#[async_trait]
impl<S: ScoringService + ?Sized> ScoringService for Arc<S> {
    async fn score(&self, draft: &ProductDraft) -> Result<ReviewResult, ScoringError> {
        (**self).score(draft).await
    }
}

/// Bounds any scoring service with a deadline.
#[derive(Debug, Clone)]
pub struct TimeoutScoring<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimeoutScoring<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl<S: ScoringService> ScoringService for TimeoutScoring<S> {
    async fn score(&self, draft: &ProductDraft) -> Result<ReviewResult, ScoringError> {
        match tokio::time::timeout(self.timeout, self.inner.score(draft)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "scoring service timed out");
                Err(ScoringError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::StubScoringService;

    #[tokio::test]
    async fn slow_service_times_out() {
        let slow = StubScoringService::with_seed(1).with_delay(Duration::from_millis(200));
        let scorer = TimeoutScoring::new(slow, Duration::from_millis(5));
        let err = scorer.score(&ProductDraft::default()).await.unwrap_err();
        assert_eq!(err, ScoringError::Timeout(Duration::from_millis(5)));
    }

    #[tokio::test]
    async fn fast_service_passes_through() {
        let fast = StubScoringService::with_seed(1).with_delay(Duration::ZERO);
        let scorer = TimeoutScoring::new(fast, Duration::from_secs(1));
        let result = scorer.score(&ProductDraft::default()).await.unwrap();
        assert!((70..=99).contains(&result.score.value()));
    }

    #[tokio::test]
    async fn shared_service_is_usable_through_arc() {
        let shared: Arc<dyn ScoringService> =
            Arc::new(StubScoringService::with_seed(9).with_delay(Duration::ZERO));
        assert!(shared.score(&ProductDraft::default()).await.is_ok());
    }
}

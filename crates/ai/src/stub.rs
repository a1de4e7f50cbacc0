use std::ops::RangeInclusive;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use clearlabel_products::{ProductDraft, Score};

use crate::result::{ReviewResult, ScoringError};
use crate::service::ScoringService;

const SUMMARY: &str = "Your product demonstrates strong ethical sourcing and clear transparency. \
However, supplier traceability can be improved further.";

const SUGGESTIONS: [&str; 3] = [
    "List supplier certifications for higher credibility.",
    "Add lifecycle data for key raw materials.",
    "Consider carbon footprint disclosure for eco-conscious consumers.",
];

/// Placeholder reviewer: waits a fixed delay, then returns a random score in
/// [`StubScoringService::SCORE_RANGE`] with canned feedback.
///
/// The draft contents do not influence the result.
#[derive(Debug)]
pub struct StubScoringService {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl StubScoringService {
    pub const SCORE_RANGE: RangeInclusive<u8> = 70..=99;
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence of scores, for tests and demos.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            rng: Mutex::new(rng),
        }
    }

    fn next_score(&self) -> Result<Score, ScoringError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ScoringError::Internal("score generator lock poisoned".to_string()))?;
        Ok(Score::new(i64::from(rng.gen_range(Self::SCORE_RANGE))))
    }
}

impl Default for StubScoringService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScoringService for StubScoringService {
    async fn score(&self, draft: &ProductDraft) -> Result<ReviewResult, ScoringError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let score = self.next_score()?;
        tracing::debug!(product = %draft.product_name, %score, "stub review generated");
        Ok(ReviewResult::new(score, SUMMARY).with_suggestions(SUGGESTIONS))
    }
}

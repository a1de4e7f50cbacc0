//! Analytics over the read-only product catalog.
//!
//! Everything here is a pure function of its inputs and tolerates an empty
//! collection. Callers may cache results; there is nothing to invalidate because
//! the records never change during a session.

pub mod filter;
pub mod stats;
pub mod summary;

pub use filter::{ProductFilter, StatusFilter};
pub use stats::{
    FlagCount, ScoreBucket, StatusBreakdown, average_score, flag_frequency, score_histogram,
    status_breakdown, top_n,
};
pub use summary::{Advisory, AnalyticsReport, DashboardSummary};

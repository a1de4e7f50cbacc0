//! `clearlabel-ai`
//!
//! **Responsibility:** transparency-review boundary.
//!
//! The wizard hands a finished [`ProductDraft`](clearlabel_products::ProductDraft)
//! to a [`ScoringService`] and gets a [`ReviewResult`] back. The only implementation
//! shipped here is a stub; a real backend plugs in behind the same trait.

pub mod result;
pub mod service;
pub mod stub;

pub use result::{ReviewResult, ScoringError};
pub use service::{ScoringService, TimeoutScoring};
pub use stub::StubScoringService;

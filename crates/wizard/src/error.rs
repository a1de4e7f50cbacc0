use thiserror::Error;

use clearlabel_ai::ScoringError;
use clearlabel_core::DomainError;

/// Failure of a wizard operation.
///
/// Step validation is not represented here; blocked navigation is reported
/// through [`Transition::Blocked`](crate::Transition::Blocked).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("review failed: {0}")]
    Scoring(#[from] ScoringError),
}

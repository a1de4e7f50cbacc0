//! Add Product wizard.
//!
//! A linear four-step flow (Basic Info, Ingredients, Certifications, Review)
//! modelled as a command/event aggregate. Forward navigation is gated by
//! per-step validation; the Review step hands the draft to a
//! [`ScoringService`](clearlabel_ai::ScoringService) exactly once at a time.

pub mod error;
pub mod step;
pub mod validation;
pub mod wizard;

pub use error::WizardError;
pub use step::{StepProgress, WizardStep};
pub use validation::{FieldKey, ValidationErrors, validate_draft, validate_step};
pub use wizard::{ProductWizard, SubmissionState, Transition, WizardCommand, WizardEvent};

use clearlabel_ai::{ReviewResult, ScoringError, ScoringService};
use clearlabel_core::{Aggregate, AggregateRoot, DomainError, DomainResult, WizardId};
use clearlabel_products::{DraftField, Ingredient, ProductDraft};

use crate::error::WizardError;
use crate::step::{StepProgress, WizardStep};
use crate::validation::{FieldKey, ValidationErrors, validate_draft, validate_step};

/// Review submission sub-state of the Review step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A scoring call is outstanding; the wizard accepts no other submission.
    InFlight,
    Completed(ReviewResult),
    /// Last attempt failed; the draft may be resubmitted.
    Failed(ScoringError),
}

/// Result of an `advance` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: WizardStep, to: WizardStep },
    Blocked(ValidationErrors),
}

impl Transition {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Transition::Blocked(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    UpdateField { field: DraftField, value: String },
    AddIngredient { name: String, source: String },
    RemoveIngredient { index: usize },
    AddCertification { text: String },
    RemoveCertification { index: usize },
    Advance,
    Retreat,
    BeginSubmission,
    CompleteSubmission { outcome: Result<ReviewResult, ScoringError> },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    FieldUpdated { field: DraftField, value: String },
    IngredientAdded { ingredient: Ingredient },
    IngredientRemoved { index: usize },
    CertificationAdded { text: String },
    CertificationRemoved { index: usize },
    StepAdvanced { from: WizardStep, to: WizardStep },
    AdvanceBlocked { step: WizardStep, errors: ValidationErrors },
    StepRetreated { from: WizardStep, to: WizardStep },
    SubmissionStarted,
    ReviewCompleted { result: ReviewResult },
    SubmissionFailed { error: ScoringError },
    WizardReset,
}

/// Aggregate root: the Add Product wizard.
///
/// The draft lives only as long as the wizard; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductWizard {
    id: WizardId,
    step: WizardStep,
    draft: ProductDraft,
    errors: ValidationErrors,
    submission: SubmissionState,
    version: u64,
}

impl ProductWizard {
    pub fn new() -> Self {
        Self::with_id(WizardId::new())
    }

    pub fn with_id(id: WizardId) -> Self {
        Self {
            id,
            step: WizardStep::FIRST,
            draft: ProductDraft::default(),
            errors: ValidationErrors::new(),
            submission: SubmissionState::Idle,
            version: 0,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn review(&self) -> Option<&ReviewResult> {
        match &self.submission {
            SubmissionState::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::InFlight
    }

    /// Stepper header: each step with its state relative to the current one.
    pub fn progress(&self) -> Vec<(WizardStep, StepProgress)> {
        WizardStep::ALL
            .into_iter()
            .map(|s| (s, s.progress_relative_to(self.step)))
            .collect()
    }

    pub fn update_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        self.execute(&WizardCommand::UpdateField {
            field,
            value: value.into(),
        })?;
        Ok(())
    }

    /// Returns `false` when the input was blank and nothing was appended.
    pub fn add_ingredient(&mut self, name: &str, source: &str) -> DomainResult<bool> {
        let events = self.execute(&WizardCommand::AddIngredient {
            name: name.to_string(),
            source: source.to_string(),
        })?;
        Ok(!events.is_empty())
    }

    /// Removes the entry currently at `index`; later entries shift down by one.
    pub fn remove_ingredient(&mut self, index: usize) -> DomainResult<()> {
        self.execute(&WizardCommand::RemoveIngredient { index })?;
        Ok(())
    }

    /// Returns `false` when the input was blank and nothing was appended.
    pub fn add_certification(&mut self, text: &str) -> DomainResult<bool> {
        let events = self.execute(&WizardCommand::AddCertification {
            text: text.to_string(),
        })?;
        Ok(!events.is_empty())
    }

    pub fn remove_certification(&mut self, index: usize) -> DomainResult<()> {
        self.execute(&WizardCommand::RemoveCertification { index })?;
        Ok(())
    }

    pub fn advance(&mut self) -> DomainResult<Transition> {
        let events = self.execute(&WizardCommand::Advance)?;
        let transition = match events.into_iter().next() {
            Some(WizardEvent::StepAdvanced { from, to }) => Transition::Moved { from, to },
            Some(WizardEvent::AdvanceBlocked { step, errors }) => {
                tracing::debug!(
                    wizard = %self.id,
                    %step,
                    keys = ?errors.keys().collect::<Vec<_>>(),
                    "advance blocked"
                );
                Transition::Blocked(errors)
            }
            other => {
                return Err(DomainError::invariant(format!(
                    "advance produced unexpected event: {other:?}"
                )));
            }
        };
        if let Transition::Moved { from, to } = &transition {
            tracing::debug!(wizard = %self.id, %from, %to, "wizard advanced");
        }
        Ok(transition)
    }

    pub fn retreat(&mut self) -> DomainResult<WizardStep> {
        self.execute(&WizardCommand::Retreat)?;
        Ok(self.step)
    }

    /// Marks a submission as in flight and returns the draft snapshot to score.
    ///
    /// Use together with [`ProductWizard::complete_submission`] when the wizard is
    /// shared and cannot be borrowed across the scoring call.
    pub fn begin_submission(&mut self) -> DomainResult<ProductDraft> {
        self.execute(&WizardCommand::BeginSubmission)?;
        tracing::info!(
            wizard = %self.id,
            product = %self.draft.product_name,
            "review submission started"
        );
        Ok(self.draft.clone())
    }

    pub fn complete_submission(
        &mut self,
        outcome: Result<ReviewResult, ScoringError>,
    ) -> Result<ReviewResult, WizardError> {
        self.execute(&WizardCommand::CompleteSubmission {
            outcome: outcome.clone(),
        })?;
        match outcome {
            Ok(result) => {
                tracing::info!(wizard = %self.id, score = %result.score, "review completed");
                Ok(result)
            }
            Err(error) => {
                tracing::warn!(
                    wizard = %self.id,
                    %error,
                    retryable = error.is_retryable(),
                    "review failed"
                );
                Err(error.into())
            }
        }
    }

    /// Scores the draft and stores the result. Stays on the Review step.
    ///
    /// Dropping the returned future before the service answers leaves the
    /// submission `Failed` with [`ScoringError::Cancelled`], so it can be retried.
    pub async fn submit<S>(&mut self, scorer: &S) -> Result<ReviewResult, WizardError>
    where
        S: ScoringService + ?Sized,
    {
        let draft = self.begin_submission()?;
        let mut guard = InFlightGuard { wizard: self };
        let outcome = scorer.score(&draft).await;
        guard.wizard.complete_submission(outcome)
    }

    /// Discards the draft and starts over at the first step.
    pub fn reset(&mut self) {
        // Reset is accepted in every state.
        let _ = self.execute(&WizardCommand::Reset);
        tracing::debug!(wizard = %self.id, "wizard reset");
    }

    fn ensure_editable(&self) -> DomainResult<()> {
        match self.submission {
            SubmissionState::InFlight => {
                Err(DomainError::conflict("a review submission is in flight"))
            }
            SubmissionState::Completed(_) => Err(DomainError::conflict(
                "review already completed; reset to start over",
            )),
            SubmissionState::Idle | SubmissionState::Failed(_) => Ok(()),
        }
    }

    fn handle_remove(
        collection: &'static str,
        index: usize,
        len: usize,
        event: WizardEvent,
    ) -> DomainResult<Vec<WizardEvent>> {
        if index >= len {
            return Err(DomainError::invalid_index(collection, index, len));
        }
        Ok(vec![event])
    }

    fn handle_begin_submission(&self) -> DomainResult<Vec<WizardEvent>> {
        if self.step != WizardStep::Review {
            return Err(DomainError::invariant(
                "submission is only available on the review step",
            ));
        }
        match self.submission {
            SubmissionState::InFlight => {
                return Err(DomainError::conflict("a review submission is already in flight"));
            }
            SubmissionState::Completed(_) => {
                return Err(DomainError::conflict("review already completed"));
            }
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }
        let errors = validate_draft(&self.draft);
        if !errors.is_empty() {
            let keys: Vec<_> = errors.keys().map(|k| k.as_str()).collect();
            return Err(DomainError::validation(format!(
                "draft is incomplete: {}",
                keys.join(", ")
            )));
        }
        Ok(vec![WizardEvent::SubmissionStarted])
    }

    fn handle_complete_submission(
        &self,
        outcome: &Result<ReviewResult, ScoringError>,
    ) -> DomainResult<Vec<WizardEvent>> {
        if self.submission != SubmissionState::InFlight {
            return Err(DomainError::conflict("no review submission is in flight"));
        }
        Ok(vec![match outcome {
            Ok(result) => WizardEvent::ReviewCompleted {
                result: result.clone(),
            },
            Err(error) => WizardEvent::SubmissionFailed {
                error: error.clone(),
            },
        }])
    }
}

impl Default for ProductWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for ProductWizard {
    type Id = WizardId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for ProductWizard {
    type Command = WizardCommand;
    type Event = WizardEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            WizardEvent::FieldUpdated { field, value } => {
                self.draft.set_field(*field, value.clone());
            }
            WizardEvent::IngredientAdded { ingredient } => {
                self.draft.ingredients.push(ingredient.clone());
                self.errors.clear(FieldKey::Ingredients);
            }
            WizardEvent::IngredientRemoved { index } => {
                self.draft.ingredients = without_index(&self.draft.ingredients, *index);
            }
            WizardEvent::CertificationAdded { text } => {
                self.draft.certifications.push(text.clone());
                self.errors.clear(FieldKey::Certifications);
            }
            WizardEvent::CertificationRemoved { index } => {
                self.draft.certifications = without_index(&self.draft.certifications, *index);
            }
            WizardEvent::StepAdvanced { to, .. } => {
                self.errors = ValidationErrors::new();
                self.step = *to;
            }
            WizardEvent::AdvanceBlocked { errors, .. } => {
                self.errors = errors.clone();
            }
            WizardEvent::StepRetreated { to, .. } => {
                self.step = *to;
                if matches!(self.submission, SubmissionState::Failed(_)) {
                    self.submission = SubmissionState::Idle;
                }
            }
            WizardEvent::SubmissionStarted => {
                self.submission = SubmissionState::InFlight;
            }
            WizardEvent::ReviewCompleted { result } => {
                self.submission = SubmissionState::Completed(result.clone());
            }
            WizardEvent::SubmissionFailed { error } => {
                self.submission = SubmissionState::Failed(error.clone());
            }
            WizardEvent::WizardReset => {
                self.step = WizardStep::FIRST;
                self.draft = ProductDraft::default();
                self.errors = ValidationErrors::new();
                self.submission = SubmissionState::Idle;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            WizardCommand::Reset => return Ok(vec![WizardEvent::WizardReset]),
            WizardCommand::BeginSubmission => return self.handle_begin_submission(),
            WizardCommand::CompleteSubmission { outcome } => {
                return self.handle_complete_submission(outcome);
            }
            _ => self.ensure_editable()?,
        }

        match command {
            WizardCommand::UpdateField { field, value } => Ok(vec![WizardEvent::FieldUpdated {
                field: *field,
                value: value.clone(),
            }]),
            WizardCommand::AddIngredient { name, source } => Ok(Ingredient::new(name, source)
                .map(|ingredient| WizardEvent::IngredientAdded { ingredient })
                .into_iter()
                .collect()),
            WizardCommand::RemoveIngredient { index } => Self::handle_remove(
                "ingredients",
                *index,
                self.draft.ingredients.len(),
                WizardEvent::IngredientRemoved { index: *index },
            ),
            WizardCommand::AddCertification { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(Vec::new());
                }
                Ok(vec![WizardEvent::CertificationAdded {
                    text: text.to_string(),
                }])
            }
            WizardCommand::RemoveCertification { index } => Self::handle_remove(
                "certifications",
                *index,
                self.draft.certifications.len(),
                WizardEvent::CertificationRemoved { index: *index },
            ),
            WizardCommand::Advance => {
                let errors = validate_step(self.step, &self.draft);
                if errors.is_empty() {
                    Ok(vec![WizardEvent::StepAdvanced {
                        from: self.step,
                        to: self.step.next(),
                    }])
                } else {
                    Ok(vec![WizardEvent::AdvanceBlocked {
                        step: self.step,
                        errors,
                    }])
                }
            }
            WizardCommand::Retreat => Ok(vec![WizardEvent::StepRetreated {
                from: self.step,
                to: self.step.previous(),
            }]),
            WizardCommand::Reset
            | WizardCommand::BeginSubmission
            | WizardCommand::CompleteSubmission { .. } => Ok(Vec::new()),
        }
    }
}

/// Holds the wizard across the scoring await in [`ProductWizard::submit`].
///
/// If the submit future is dropped before the service answers, the submission
/// is recorded as [`ScoringError::Cancelled`] so it can be retried with the
/// draft intact.
struct InFlightGuard<'a> {
    wizard: &'a mut ProductWizard,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.wizard.is_submitting() {
            tracing::warn!(wizard = %self.wizard.id, "review submission cancelled");
            let _ = self.wizard.execute(&WizardCommand::CompleteSubmission {
                outcome: Err(ScoringError::Cancelled),
            });
        }
    }
}

/// New sequence without the entry at `index`; the original is left untouched.
fn without_index<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

//! Drives the Add Product wizard from a prepared draft, the way a user would.

use clearlabel_ai::ScoringService;
use clearlabel_products::{DraftField, ProductDraft};
use clearlabel_wizard::{ProductWizard, Transition, WizardError, WizardStep};

/// Replays `draft` step by step and submits it for review.
///
/// Stops early (returning the wizard as-is) when a step refuses to advance, so
/// the caller can render the inline errors. A failed review is likewise left on
/// the wizard as its submission state rather than returned as an error.
pub async fn replay_draft<S>(draft: &ProductDraft, scorer: &S) -> Result<ProductWizard, WizardError>
where
    S: ScoringService + ?Sized,
{
    let mut wizard = ProductWizard::new();

    for field in DraftField::ALL {
        wizard.update_field(field, draft.field(field))?;
    }
    if !advanced(&mut wizard)? {
        return Ok(wizard);
    }

    for ingredient in &draft.ingredients {
        wizard.add_ingredient(&ingredient.name, &ingredient.source)?;
    }
    if !advanced(&mut wizard)? {
        return Ok(wizard);
    }

    for certification in &draft.certifications {
        wizard.add_certification(certification)?;
    }
    if !advanced(&mut wizard)? {
        return Ok(wizard);
    }

    debug_assert_eq!(wizard.step(), WizardStep::Review);
    match wizard.submit(scorer).await {
        Ok(_) | Err(WizardError::Scoring(_)) => Ok(wizard),
        Err(other) => Err(other),
    }
}

fn advanced(wizard: &mut ProductWizard) -> Result<bool, WizardError> {
    Ok(match wizard.advance()? {
        Transition::Moved { .. } => true,
        Transition::Blocked(errors) => {
            tracing::info!(step = %wizard.step(), errors = errors.len(), "draft stopped at step");
            false
        }
    })
}

//! Per-step validation.
//!
//! Validation runs at transition time only; writes to the draft are never
//! rejected. An empty [`ValidationErrors`] means the step may be left.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use clearlabel_products::{DraftField, ProductDraft};

use crate::step::WizardStep;

/// Key an error message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    ProductName,
    Category,
    Description,
    Ingredients,
    Certifications,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::ProductName => "productName",
            FieldKey::Category => "category",
            FieldKey::Description => "description",
            FieldKey::Ingredients => "ingredients",
            FieldKey::Certifications => "certifications",
        }
    }
}

impl From<DraftField> for FieldKey {
    fn from(field: DraftField) -> Self {
        match field {
            DraftField::ProductName => FieldKey::ProductName,
            DraftField::Category => FieldKey::Category,
            DraftField::Description => FieldKey::Description,
        }
    }
}

impl core::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed error messages. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldKey, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    /// Drops a single key, leaving the others untouched.
    pub fn clear(&mut self, key: FieldKey) -> Option<String> {
        self.0.remove(&key)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Errors that block leaving `step` with `draft` as it stands.
pub fn validate_step(step: WizardStep, draft: &ProductDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match step {
        WizardStep::BasicInfo => {
            for field in draft.blank_fields() {
                errors.insert(field.into(), format!("{} is required.", field.label()));
            }
        }
        WizardStep::Ingredients => {
            if draft.ingredients.is_empty() {
                errors.insert(FieldKey::Ingredients, "Please add at least one ingredient.");
            }
        }
        WizardStep::Certifications => {
            if draft.certifications.is_empty() {
                errors.insert(
                    FieldKey::Certifications,
                    "Please add at least one certification.",
                );
            }
        }
        WizardStep::Review => {}
    }
    errors
}

/// Union of every step's errors; what a submission requires to be empty.
pub fn validate_draft(draft: &ProductDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for step in WizardStep::ALL {
        errors.merge(validate_step(step, draft));
    }
    errors
}

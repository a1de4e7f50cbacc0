use core::str::FromStr;

use serde::{Deserialize, Serialize};

use clearlabel_core::{DomainError, ValueObject};

/// One ingredient line of a draft. Both parts are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub source: String,
}

impl Ingredient {
    /// Returns `None` when either part is blank after trimming.
    pub fn new(name: &str, source: &str) -> Option<Self> {
        let name = name.trim();
        let source = source.trim();
        if name.is_empty() || source.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            source: source.to_string(),
        })
    }
}

impl ValueObject for Ingredient {}

/// Scalar fields of a draft that can be written directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    ProductName,
    Category,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [
        DraftField::ProductName,
        DraftField::Category,
        DraftField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::ProductName => "productName",
            DraftField::Category => "category",
            DraftField::Description => "description",
        }
    }

    /// Human label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::ProductName => "Product name",
            DraftField::Category => "Category",
            DraftField::Description => "Description",
        }
    }
}

impl FromStr for DraftField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown draft field: {s}")))
    }
}

/// The in-progress product built by the Add Product wizard.
///
/// Never persisted; discarded when the wizard is reset or dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl ProductDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::ProductName => &self.product_name,
            DraftField::Category => &self.category,
            DraftField::Description => &self.description,
        }
    }

    /// Raw write; no validation (that happens on step transitions).
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::ProductName => self.product_name = value,
            DraftField::Category => self.category = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Scalar fields that are blank after trimming, in declaration order.
    pub fn blank_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }
}

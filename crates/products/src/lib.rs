//! Products domain module.
//!
//! Read-only scored product records (the analytics input), the editable draft the
//! Add Product wizard builds, and the fixture loader that feeds the dashboard.

pub mod catalog;
pub mod draft;
pub mod record;

pub use catalog::{FixtureError, load_records, parse_records};
pub use draft::{DraftField, Ingredient, ProductDraft};
pub use record::{ProductRecord, ProductStatus, RecordId, Score};

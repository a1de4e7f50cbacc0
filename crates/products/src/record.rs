use core::str::FromStr;

use serde::{Deserialize, Serialize};

use clearlabel_core::{DomainError, Entity, ValueObject};

/// Transparency score in `[0, 100]`.
///
/// Construction clamps, so an out-of-range value coming from a fixture or a
/// scoring backend can never escape into the aggregates.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Status derived from the score (never stored).
    pub fn status(self) -> ProductStatus {
        ProductStatus::from_score(self)
    }
}

impl ValueObject for Score {}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl core::fmt::Display for Score {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review status, a pure function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    Approved,
    Pending,
    Flagged,
}

impl ProductStatus {
    /// Every status, in display order.
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Approved,
        ProductStatus::Pending,
        ProductStatus::Flagged,
    ];

    pub const APPROVED_THRESHOLD: u8 = 80;
    pub const PENDING_THRESHOLD: u8 = 60;

    pub fn from_score(score: Score) -> Self {
        match score.value() {
            s if s >= Self::APPROVED_THRESHOLD => ProductStatus::Approved,
            s if s >= Self::PENDING_THRESHOLD => ProductStatus::Pending,
            _ => ProductStatus::Flagged,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Approved => "Approved",
            ProductStatus::Pending => "Pending",
            ProductStatus::Flagged => "Flagged",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approved" => Ok(ProductStatus::Approved),
            "pending" => Ok(ProductStatus::Pending),
            "flagged" => Ok(ProductStatus::Flagged),
            other => Err(DomainError::validation(format!("unknown status: {other}"))),
        }
    }
}

/// Fixture identifier; fixtures use either numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(u64),
    Text(String),
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordId::Numeric(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A scored product as supplied by the external fixture.
///
/// Read-only for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: RecordId,
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    pub score: Score,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub flags: Vec<String>,
}

impl ProductRecord {
    pub const DEFAULT_CATEGORY: &'static str = "General";

    pub fn status(&self) -> ProductStatus {
        self.score.status()
    }

    pub fn category_or_default(&self) -> &str {
        if self.category.trim().is_empty() {
            Self::DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.status() == ProductStatus::Flagged
    }
}

impl Entity for ProductRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_out_of_range_values() {
        assert_eq!(Score::new(-5).value(), 0);
        assert_eq!(Score::new(140).value(), 100);
        assert_eq!(Score::new(73).value(), 73);
    }

    #[test]
    fn status_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(Score::new(100).status(), ProductStatus::Approved);
        assert_eq!(Score::new(80).status(), ProductStatus::Approved);
        assert_eq!(Score::new(79).status(), ProductStatus::Pending);
        assert_eq!(Score::new(60).status(), ProductStatus::Pending);
        assert_eq!(Score::new(59).status(), ProductStatus::Flagged);
        assert_eq!(Score::new(0).status(), ProductStatus::Flagged);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("approved".parse::<ProductStatus>().unwrap(), ProductStatus::Approved);
        assert_eq!(" Flagged ".parse::<ProductStatus>().unwrap(), ProductStatus::Flagged);
        assert!("archived".parse::<ProductStatus>().is_err());
        for status in ProductStatus::ALL {
            assert_eq!(status.as_str().parse::<ProductStatus>().unwrap(), status);
        }
    }

    #[test]
    fn record_deserializes_fixture_shape() {
        let json = r#"{
            "id": 7,
            "productName": "Oat Bar",
            "category": "Snacks",
            "score": 112,
            "explanation": "Clear sourcing.",
            "suggestions": ["Add carbon data"],
            "flags": []
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Numeric(7));
        assert_eq!(record.product_name, "Oat Bar");
        assert_eq!(record.score.value(), 100);
        assert_eq!(record.status(), ProductStatus::Approved);
    }

    #[test]
    fn missing_category_falls_back_to_general() {
        let json = r#"{"id": "p-1", "productName": "Soap", "score": 40}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Text("p-1".to_string()));
        assert_eq!(record.category_or_default(), "General");
        assert!(record.flags.is_empty());
        assert!(record.is_flagged());
    }

    #[test]
    fn records_with_same_id_are_the_same_entity() {
        let a: ProductRecord =
            serde_json::from_str(r#"{"id": 3, "productName": "Tea", "score": 90}"#).unwrap();
        let b: ProductRecord =
            serde_json::from_str(r#"{"id": 3, "productName": "Green Tea", "score": 55}"#).unwrap();
        assert!(a.is_same(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn score_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Score::new(64)).unwrap();
        assert_eq!(json, "64");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any integer lands in [0, 100] and keeps its status band.
            #[test]
            fn score_is_always_clamped(raw in any::<i64>()) {
                let score = Score::new(raw);
                prop_assert!(score >= Score::MIN && score <= Score::MAX);
                if (0..=100).contains(&raw) {
                    prop_assert_eq!(i64::from(score.value()), raw);
                }
            }
        }
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic, business failures belong here. Per-field form validation
/// is *not* an error: it is reported as data so the caller can render it inline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A positional index did not address an existing entry.
    #[error("index {index} out of range for {collection} (len {len})")]
    InvalidIndex {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// The operation conflicts with the current state (e.g. double submission).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_index(collection: &'static str, index: usize, len: usize) -> Self {
        Self::InvalidIndex {
            collection,
            index,
            len,
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_message_names_collection() {
        let err = DomainError::invalid_index("ingredients", 3, 1);
        assert_eq!(
            err.to_string(),
            "index 3 out of range for ingredients (len 1)"
        );
    }
}

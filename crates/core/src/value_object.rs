//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are immutable: two instances with the same
/// attributes are equal, and "modifying" one means constructing a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Score(u8);
///
/// impl ValueObject for Score {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Entities are compared by identity; their attributes may differ over time.

pub trait Entity {
    type Id: Clone + Eq + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True when both values refer to the same entity, whatever their attributes.
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

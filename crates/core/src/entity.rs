//! Entity trait: identity that persists across state changes.

/// Entity marker + minimal interface.
///
/// An entity is defined by its identifier, not by its current field values:
/// two snapshots of the same item compare as the same entity even after a
/// restock changed its counts.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// Records coming from the store may lack an identifier, so the id is optional.
/// Two entities without an id are never considered the same entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if the record carries one.
    fn id(&self) -> Option<&Self::Id>;

    /// Identity comparison (both sides must carry an id).
    fn same_entity(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

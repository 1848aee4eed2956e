//! Entity trait: identity that survives state changes.

/// Something with a stable identifier.
///
/// Two entities are "the same" when their ids match, whatever their other
/// fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}

//! Entity trait: identity that survives any change of display attributes.

/// Entity marker + minimal interface.
///
/// Catalog records are entities: two products with the same `ItemId` are the
/// same product even if their copy differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

//! Entity trait: identity that survives attribute changes.

/// Entity marker + minimal interface.
///
/// Two catalog records with the same id describe the same product, even when
/// their prices or stock flags differ between snapshots.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

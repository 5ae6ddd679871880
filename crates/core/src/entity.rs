//! Entity trait: a value stored and looked up by its own identity.

/// Something keyed by an identity it carries.
///
/// Keyed stores derive the key from `id()` instead of accepting one from the
/// caller, so an entry can never sit under a key that differs from its id.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}

//! Core [`Component`] trait.
//!
//! The set of component kinds is closed: each kind owns one sparse map in the
//! [`ComponentStore`], and the trait tells generic code which map that is.
//! This gives `World::add_component::<T>()` and friends a typed entry point
//! without type-erasing the storage.

use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::store::ComponentStore;

/// The core component trait.
///
/// # Examples
///
/// ```rust
/// use platformer_component::{Component, ComponentStore, Entity, Movement};
///
/// let mut store = ComponentStore::default();
/// Movement::storage_mut(&mut store).insert(Entity::from_raw(1), Movement::default());
/// assert!(store.contains::<Movement>(Entity::from_raw(1)));
/// assert_eq!(Movement::type_name(), "Movement");
/// ```
pub trait Component: Sized + 'static {
    /// A human-readable name for this component kind, used in diagnostics.
    fn type_name() -> &'static str;

    /// The sparse map holding every instance of this kind.
    fn storage(store: &ComponentStore) -> &BTreeMap<Entity, Self>;

    /// Mutable access to the sparse map holding every instance of this kind.
    fn storage_mut(store: &mut ComponentStore) -> &mut BTreeMap<Entity, Self>;
}

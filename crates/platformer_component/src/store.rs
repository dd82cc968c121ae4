//! Sparse per-kind component maps.
//!
//! Every component kind lives in its own `BTreeMap<Entity, T>`. Not every
//! entity has every kind. Maps are ordered by entity id, and ids are handed
//! out monotonically, so iterating a map visits entities in creation order.

use std::collections::BTreeMap;

use crate::animation::Animation;
use crate::base::Base;
use crate::classification::Classification;
use crate::component::Component;
use crate::entity::Entity;
use crate::motion::{Movement, Physics};
use crate::scratch::Scratch;

/// All component maps of one world.
///
/// Fields are public so systems can borrow two different kinds mutably at the
/// same time (e.g. an [`Animation`] and the [`Base`] it commits frames to).
#[derive(Debug, Default)]
pub struct ComponentStore {
    pub bases: BTreeMap<Entity, Base>,
    pub types: BTreeMap<Entity, Classification>,
    pub animations: BTreeMap<Entity, Animation>,
    pub movements: BTreeMap<Entity, Movement>,
    pub physics: BTreeMap<Entity, Physics>,
    pub scratch: BTreeMap<Entity, Scratch>,
}

impl ComponentStore {
    /// Returns `true` if `entity` has a component of kind `T`.
    #[must_use]
    pub fn contains<T: Component>(&self, entity: Entity) -> bool {
        T::storage(self).contains_key(&entity)
    }

    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        T::storage(self).get(&entity)
    }

    #[must_use]
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        T::storage_mut(self).get_mut(&entity)
    }

    /// Insert or overwrite the `T` component of `entity`.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        T::storage_mut(self).insert(entity, component);
    }

    /// Erase every component of `entity` as a unit.
    ///
    /// Returns `true` if the entity had a [`Base`] before the call.
    pub fn remove_all(&mut self, entity: Entity) -> bool {
        let existed = self.bases.remove(&entity).is_some();
        self.types.remove(&entity);
        self.animations.remove(&entity);
        self.movements.remove(&entity);
        self.physics.remove(&entity);
        self.scratch.remove(&entity);
        existed
    }

    /// Entities that currently have a [`Base`], in id order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.bases.keys().copied()
    }
}

macro_rules! impl_component {
    ($ty:ty, $field:ident, $name:literal) => {
        impl Component for $ty {
            fn type_name() -> &'static str {
                $name
            }

            fn storage(store: &ComponentStore) -> &BTreeMap<Entity, Self> {
                &store.$field
            }

            fn storage_mut(store: &mut ComponentStore) -> &mut BTreeMap<Entity, Self> {
                &mut store.$field
            }
        }
    };
}

impl_component!(Base, bases, "Base");
impl_component!(Classification, types, "Type");
impl_component!(Animation, animations, "Animation");
impl_component!(Movement, movements, "Movement");
impl_component!(Physics, physics, "Physics");
impl_component!(Scratch, scratch, "Scratch");

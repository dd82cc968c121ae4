//! World state: entity registry, component store, and per-entity update
//! table.
//!
//! The [`World`] is the explicit context every system operation receives. It
//! owns all component maps, so each test (or each level) can build a fresh,
//! isolated world.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use platformer_component::{
    Base, Classification, Component, ComponentStore, Entity, EntityAllocator,
};
use tracing::debug;

use crate::behavior::Behavior;
use crate::config::WorldConfig;
use crate::error::WorldError;
use crate::frontend::{AssetLoader, InputState};
use crate::game::{PendingRemoval, Removal};
use crate::reaction::SpawnRequest;
use crate::time::{MonotonicTime, TimeSource};

/// All simulation state of one running level.
pub struct World {
    /// Entity ID allocator.
    allocator: EntityAllocator,
    /// Sparse component maps.
    store: ComponentStore,
    /// Update behaviours keyed by entity. Id order is creation order.
    behaviors: BTreeMap<Entity, Box<dyn Behavior>>,
    /// Removals waiting for the end-of-tick drain.
    removals: Vec<PendingRemoval>,
    /// Entities content was asked to spawn by collision reactions.
    spawn_requests: Vec<SpawnRequest>,
    assets: Box<dyn AssetLoader>,
    time: Box<dyn TimeSource>,
    /// The time sample every clock reads during the current tick.
    now: Duration,
    input: InputState,
    config: WorldConfig,
}

impl World {
    /// Create an empty world loading assets through `assets`, timed by the
    /// wall clock, with default configuration.
    #[must_use]
    pub fn new(assets: impl AssetLoader + 'static) -> Self {
        Self {
            allocator: EntityAllocator::new(),
            store: ComponentStore::default(),
            behaviors: BTreeMap::new(),
            removals: Vec::new(),
            spawn_requests: Vec::new(),
            assets: Box::new(assets),
            time: Box::new(MonotonicTime::new()),
            now: Duration::ZERO,
            input: InputState::default(),
            config: WorldConfig::default(),
        }
    }

    /// Replace the time source and take a fresh sample from it.
    #[must_use]
    pub fn with_time_source(mut self, time: impl TimeSource + 'static) -> Self {
        self.time = Box::new(time);
        self.sample_time();
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: WorldConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    // -- Time --

    /// Read the time source. Called once at the start of every tick.
    pub fn sample_time(&mut self) {
        self.now = self.time.now();
    }

    /// The current tick's time sample.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    // -- Input --

    /// Key state captured at the start of the current frame.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    // -- Entity lifecycle --

    /// Create an entity displaying the asset at `path`.
    ///
    /// The entity starts with a [`Base`] showing the whole asset at the
    /// origin and an unclassified [`Classification`]. Nothing else is
    /// attached.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::AssetLoad`] if the asset cannot be loaded. No id
    /// is consumed in that case.
    pub fn create(&mut self, path: &str) -> Result<Entity, WorldError> {
        let asset = self
            .assets
            .load(path)
            .map_err(|source| WorldError::AssetLoad {
                path: path.to_string(),
                source,
            })?;

        let entity = self.allocator.allocate();
        self.store.insert(entity, Base::from_asset(&asset));
        self.store.insert(entity, Classification::None);

        debug!(%entity, path, "entity created");
        Ok(entity)
    }

    /// Returns `true` while the entity has a [`Base`].
    #[must_use]
    pub fn can_access(&self, entity: Entity) -> bool {
        self.store.bases.contains_key(&entity)
    }

    /// Erase every component and the update behaviour of `entity`.
    ///
    /// Removing an entity that is already gone is a no-op.
    pub fn remove(&mut self, entity: Entity) {
        if self.store.remove_all(entity) {
            self.behaviors.remove(&entity);
            debug!(%entity, "entity removed");
        }
    }

    /// Accessible entities, in id order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.store.entities()
    }

    /// Returns the number of accessible entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.store.bases.len()
    }

    // -- Component operations --

    /// Attach a default-constructed `T`, overwriting any existing one.
    ///
    /// Does nothing if the entity is not accessible.
    pub fn add_component<T: Component + Default>(&mut self, entity: Entity) {
        self.insert(entity, T::default());
    }

    /// Attach `component`, overwriting any existing one.
    ///
    /// Does nothing if the entity is not accessible.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        if self.can_access(entity) {
            self.store.insert(entity, component);
        }
    }

    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store.get::<T>(entity)
    }

    #[must_use]
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.store.get_mut::<T>(entity)
    }

    #[must_use]
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.store.contains::<T>(entity)
    }

    /// Fetch a component that must be attached.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::MissingComponent`] if it is not.
    pub fn try_get<T: Component>(&self, entity: Entity) -> Result<&T, WorldError> {
        self.store
            .get::<T>(entity)
            .ok_or(WorldError::MissingComponent {
                entity,
                component: T::type_name(),
            })
    }

    /// Direct access to the component maps.
    #[must_use]
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Direct mutable access, for borrowing two component kinds at once.
    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }

    /// Look up a component a system operation requires.
    ///
    /// Asking for a component that was never attached to an accessible
    /// entity is a caller bug and fails a debug assertion; release builds
    /// treat it like an inaccessible entity and do nothing.
    pub(crate) fn required<T: Component>(&self, entity: Entity, operation: &str) -> Option<&T> {
        let component = self.store.get::<T>(entity);
        debug_assert!(
            component.is_some() || !self.can_access(entity),
            "{operation}: {entity} has no {} component",
            T::type_name()
        );
        component
    }

    /// Mutable counterpart of [`World::required`].
    pub(crate) fn required_mut<T: Component>(
        &mut self,
        entity: Entity,
        operation: &str,
    ) -> Option<&mut T> {
        let accessible = self.can_access(entity);
        let component = self.store.get_mut::<T>(entity);
        debug_assert!(
            component.is_some() || !accessible,
            "{operation}: {entity} has no {} component",
            T::type_name()
        );
        component
    }

    // -- Behaviours --

    /// Install the update behaviour of `entity`, replacing any previous one.
    ///
    /// Does nothing if the entity is not accessible.
    pub fn set_behavior(&mut self, entity: Entity, behavior: impl Behavior + 'static) {
        if self.can_access(entity) {
            self.behaviors.insert(entity, Box::new(behavior));
        }
    }

    pub fn remove_behavior(&mut self, entity: Entity) {
        self.behaviors.remove(&entity);
    }

    #[must_use]
    pub fn has_behavior(&self, entity: Entity) -> bool {
        self.behaviors.contains_key(&entity)
    }

    /// Name of the behaviour installed on `entity`.
    #[must_use]
    pub fn behavior_name(&self, entity: Entity) -> Option<&'static str> {
        self.behaviors.get(&entity).map(|b| b.name())
    }

    /// Entities with a behaviour, in update order.
    pub(crate) fn behavior_order(&self) -> Vec<Entity> {
        self.behaviors.keys().copied().collect()
    }

    /// Take a behaviour out of the table while it runs.
    pub(crate) fn take_behavior(&mut self, entity: Entity) -> Option<Box<dyn Behavior>> {
        self.behaviors.remove(&entity)
    }

    /// Put a behaviour back after it ran, unless the entity is gone or the
    /// behaviour installed a replacement for itself.
    pub(crate) fn restore_behavior(&mut self, entity: Entity, behavior: Box<dyn Behavior>) {
        if self.can_access(entity) {
            self.behaviors.entry(entity).or_insert(behavior);
        }
    }

    // -- Deferred removal --

    /// Queue `entity` for removal at the end of the current tick.
    pub fn queue_removal(&mut self, entity: Entity, removal: Removal) {
        debug!(%entity, ?removal, "removal queued");
        self.removals.push(PendingRemoval { entity, removal });
    }

    /// Returns `true` if `entity` has a removal waiting to be drained.
    #[must_use]
    pub fn is_removal_pending(&self, entity: Entity) -> bool {
        self.removals.iter().any(|r| r.entity == entity)
    }

    #[must_use]
    pub fn pending_removals(&self) -> &[PendingRemoval] {
        &self.removals
    }

    pub(crate) fn take_removals(&mut self) -> Vec<PendingRemoval> {
        std::mem::take(&mut self.removals)
    }

    /// Re-queue entries that were not ready, ahead of any queued meanwhile.
    pub(crate) fn requeue_removals(&mut self, mut waiting: Vec<PendingRemoval>) {
        waiting.append(&mut self.removals);
        self.removals = waiting;
    }

    // -- Spawn requests --

    pub(crate) fn push_spawn_request(&mut self, request: SpawnRequest) {
        self.spawn_requests.push(request);
    }

    /// Hand the spawn requests raised since the last call to content.
    pub fn take_spawn_requests(&mut self) -> Vec<SpawnRequest> {
        std::mem::take(&mut self.spawn_requests)
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("allocator", &self.allocator)
            .field("store", &self.store)
            .field("behaviors", &self.behaviors.len())
            .field("removals", &self.removals)
            .field("spawn_requests", &self.spawn_requests)
            .field("now", &self.now)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

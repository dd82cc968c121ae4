//! Game loop: per-tick behaviour updates, deferred removal, and the frame
//! driver.

use platformer_component::{Animation, Entity};
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::frontend::{self, Frontend, InputState};
use crate::world::World;

/// When a queued entity may actually be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// At the next drain.
    Immediate,
    /// At the first drain after the entity's animation has finished.
    AfterAnimation,
}

/// An entry in the removal queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRemoval {
    pub entity: Entity,
    pub removal: Removal,
}

/// Run one simulation tick.
///
/// Samples the time source, runs the behaviour of every entity that had one
/// when the tick started (in id order), then drains the removal queue.
/// Entities created during the tick are first updated on the next one.
pub fn update_all(world: &mut World) {
    world.sample_time();
    let order = world.behavior_order();
    trace!(now = ?world.now(), behaviors = order.len(), "tick");

    for id in order {
        if !world.can_access(id) {
            continue;
        }
        let Some(mut behavior) = world.take_behavior(id) else {
            continue;
        };
        behavior.update(world, id);
        world.restore_behavior(id, behavior);
    }

    drain_removals(world);
}

/// Process the removal queue.
///
/// Entries for entities that are already gone are dropped. An
/// [`Removal::AfterAnimation`] entry stays queued until the animation has
/// finished; an entity without an animation counts as finished.
pub fn drain_removals(world: &mut World) {
    let mut waiting = Vec::new();

    for pending in world.take_removals() {
        if !world.can_access(pending.entity) {
            continue;
        }
        let ready = match pending.removal {
            Removal::Immediate => true,
            Removal::AfterAnimation => world
                .get::<Animation>(pending.entity)
                .is_none_or(|animation| animation.finished),
        };
        if ready {
            world.remove(pending.entity);
            debug!(entity = %pending.entity, removal = ?pending.removal, "removal drained");
        } else {
            waiting.push(pending);
        }
    }

    world.requeue_removals(waiting);
}

/// Drives a [`World`] through a [`Frontend`], one frame at a time.
#[derive(Debug)]
pub struct Game<F> {
    world: World,
    frontend: F,
    config: GameConfig,
    frames: u64,
}

impl<F: Frontend> Game<F> {
    #[must_use]
    pub fn new(world: World, frontend: F) -> Self {
        Self {
            world,
            frontend,
            config: GameConfig::default(),
            frames: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[must_use]
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Returns the number of frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns `true` while the frontend is open and the frame cap (if any)
    /// has not been reached.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frontend.is_open()
            && (self.config.max_frames == 0 || self.frames < self.config.max_frames)
    }

    /// Run one frame: poll events, capture input, clear, draw, update,
    /// display.
    pub fn frame(&mut self) {
        self.frontend.poll_events();
        self.world.set_input(InputState::capture(&self.frontend));
        self.frontend.clear();
        frontend::draw_all(&self.world, &mut self.frontend);
        update_all(&mut self.world);
        self.frontend.display();
        self.frames += 1;
        trace!(frame = self.frames, entities = self.world.entity_count(), "frame");
    }

    /// Run frames until the frontend closes or the frame cap is reached.
    /// Returns the number of frames run by this call.
    pub fn run(&mut self) -> u64 {
        let start = self.frames;
        info!(
            entities = self.world.entity_count(),
            max_frames = self.config.max_frames,
            "game loop starting"
        );
        while self.is_running() {
            self.frame();
        }
        info!(frames = self.frames - start, "game loop stopped");
        self.frames - start
    }
}

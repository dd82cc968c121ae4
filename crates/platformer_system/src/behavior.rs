//! Per-entity update behaviours.
//!
//! Every entity may carry one [`Behavior`], run once per tick by
//! [`update_all`](crate::game::update_all). Content defines its own
//! behaviours (player control, for instance); the ones here are the
//! reusable building blocks.

use std::time::Duration;

use platformer_component::{Animation, Base, Classification, Direction, Entity};

use crate::animation;
use crate::game::Removal;
use crate::movement::{self, Takeoff};
use crate::physics;
use crate::scratch;
use crate::world::World;

/// Walking speed of patrolling enemies, in pixels per tick.
pub const PATROL_SPEED: f32 = 0.6;

/// Horizontal speed of a fired projectile, in pixels per tick.
pub const PROJECTILE_SPEED: f32 = 4.0;

/// Length of the hop a projectile makes each time it touches the ground.
pub const PROJECTILE_HOP: Duration = Duration::from_millis(120);

/// Time after which an unobstructed projectile disappears.
pub const PROJECTILE_LIFETIME: Duration = Duration::from_millis(3000);

/// Per-tick update logic attached to one entity.
pub trait Behavior {
    /// Advance `id` by one tick.
    ///
    /// The behaviour may create, modify and remove any entity, including
    /// `id` itself.
    fn update(&mut self, world: &mut World, id: Entity);

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Only plays the entity's animation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Animate;

impl Behavior for Animate {
    fn update(&mut self, world: &mut World, id: Entity) {
        animation::play(world, id);
    }

    fn name(&self) -> &'static str {
        "animate"
    }
}

/// Walks back and forth, turning around at walls.
#[derive(Debug, Clone, Copy)]
pub struct Patrol {
    pub speed: f32,
    pub heading: Direction,
}

impl Patrol {
    #[must_use]
    pub const fn new(speed: f32) -> Self {
        Self {
            speed,
            heading: Direction::Left,
        }
    }

    #[must_use]
    pub const fn heading(mut self, heading: Direction) -> Self {
        self.heading = heading;
        self
    }
}

impl Default for Patrol {
    fn default() -> Self {
        Self::new(PATROL_SPEED)
    }
}

impl Behavior for Patrol {
    fn update(&mut self, world: &mut World, id: Entity) {
        physics::start(world, id);
        if !world.can_access(id) {
            return;
        }

        // A dead body only finishes its animation.
        if !world.get::<Base>(id).is_some_and(Base::is_dead) {
            match movement::blocked_direction(world, id) {
                Direction::Left => self.heading = Direction::Right,
                Direction::Right => self.heading = Direction::Left,
                _ => {}
            }
            match self.heading {
                Direction::Left => movement::move_left(world, id, self.speed),
                Direction::Right => movement::move_right(world, id, self.speed),
                _ => {}
            }
        }

        if world.has::<Animation>(id) {
            animation::play(world, id);
        }
    }

    fn name(&self) -> &'static str {
        "patrol"
    }
}

/// A hopping shot that travels in the direction its owner was facing.
///
/// The direction is taken from the owner on the first update and kept from
/// then on. The lifetime is measured on the entity's scratch clock, so
/// projectiles without [`Scratch`](platformer_component::Scratch) storage
/// only disappear when they hit something.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub speed: f32,
    pub hop: Duration,
    pub lifetime: Duration,
    heading: Option<Direction>,
}

impl Projectile {
    #[must_use]
    pub const fn new(speed: f32, hop: Duration, lifetime: Duration) -> Self {
        Self {
            speed,
            hop,
            lifetime,
            heading: None,
        }
    }

    fn resolve_heading(world: &World, id: Entity) -> Direction {
        let owner = match world.get::<Classification>(id) {
            Some(&Classification::Projectile { owner: Some(owner) }) => Some(owner),
            _ => None,
        };
        let heading = owner
            .filter(|&owner| world.can_access(owner))
            .map(|owner| movement::looking_direction(world, owner))
            .unwrap_or_else(|| movement::looking_direction(world, id));
        if heading == Direction::None {
            Direction::Right
        } else {
            heading
        }
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new(PROJECTILE_SPEED, PROJECTILE_HOP, PROJECTILE_LIFETIME)
    }
}

impl Behavior for Projectile {
    fn update(&mut self, world: &mut World, id: Entity) {
        physics::start(world, id);
        if !world.can_access(id) || world.is_removal_pending(id) {
            return;
        }

        let heading = match self.heading {
            Some(heading) => heading,
            None => *self.heading.insert(Self::resolve_heading(world, id)),
        };
        match heading {
            Direction::Left => movement::move_left(world, id, self.speed),
            Direction::Right => movement::move_right(world, id, self.speed),
            _ => {}
        }

        if movement::on_ground(world, id) {
            movement::jump(world, id, self.hop, Takeoff::FromGround);
        }

        let hit_something = matches!(
            movement::blocked_direction(world, id),
            Direction::Left | Direction::Right | Direction::Bottom
        );
        let expired = scratch::elapsed(world, id).is_some_and(|t| t >= self.lifetime);
        if hit_something || expired {
            world.queue_removal(id, Removal::Immediate);
        }
    }

    fn name(&self) -> &'static str {
        "projectile"
    }
}

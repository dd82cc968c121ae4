//! Keyboard control of the player entity.

use std::time::Duration;

use platformer_component::{AnimationKey, AnimationKind, Base, Classification, Direction, Entity, Maturity};
use platformer_math::Vec2;
use platformer_system::frontend::{InputSource, Key};
use platformer_system::movement::{self, Takeoff};
use platformer_system::{Behavior, World, animation, physics, scratch};
use tracing::{info, warn};

use crate::level;

pub const WALK_SPEED: f32 = 2.0;
pub const RUN_SPEED: f32 = WALK_SPEED + 1.0;
pub const JUMP: Duration = Duration::from_millis(400);
/// Minimum time between two shots.
pub const FIRE_COOLDOWN: Duration = Duration::from_millis(150);

/// Walk, run, jump and (at the fire tier) shoot, driven by the frame's
/// captured input.
#[derive(Debug, Default)]
pub struct PlayerControl {
    tier: Maturity,
}

impl PlayerControl {
    fn shoot(world: &mut World, id: Entity) {
        if scratch::elapsed(world, id).is_none_or(|t| t < FIRE_COOLDOWN) {
            return;
        }
        scratch::restart(world, id);

        let Some(bounds) = world.get::<Base>(id).map(Base::bounds) else {
            return;
        };
        let x = match movement::looking_direction(world, id) {
            Direction::Left => bounds.left() - 8.0,
            _ => bounds.right(),
        };
        let position = Vec2::new(x, bounds.top() + bounds.size.y / 2.0);
        if let Err(err) = level::fire(world, position, id) {
            warn!(error = %err, "could not fire");
        }
    }
}

impl Behavior for PlayerControl {
    fn update(&mut self, world: &mut World, id: Entity) {
        physics::start(world, id);
        if !world.can_access(id) {
            return;
        }

        let tier = world
            .get::<Classification>(id)
            .and_then(Classification::tier)
            .unwrap_or_default();
        if tier != self.tier {
            info!(entity = %id, from = ?self.tier, to = ?tier, "player grew");
            self.tier = tier;
        }

        let input = world.input();
        let left = input.is_key_down(Key::Left);
        let right = input.is_key_down(Key::Right);
        let running = input.is_key_down(Key::Run);
        let jumping = input.is_key_down(Key::Up);
        let firing = input.is_key_down(Key::Fire);

        movement::set_running(world, id, running);
        let speed = if running { RUN_SPEED } else { WALK_SPEED };
        let key = |kind| AnimationKey::tiered(kind, tier);

        if right && !left {
            movement::move_right_animated(world, id, speed, key(AnimationKind::WalkRight));
        } else if left && !right {
            movement::move_left_animated(world, id, speed, key(AnimationKind::WalkLeft));
        } else {
            movement::stop(world, id);
            let idle = match movement::looking_direction(world, id) {
                Direction::Left => AnimationKind::IdleLeft,
                _ => AnimationKind::IdleRight,
            };
            animation::set_current_animation(world, id, key(idle));
        }

        if jumping {
            movement::jump(world, id, JUMP, Takeoff::FromGround);
        }
        if firing && tier == Maturity::Fire {
            Self::shoot(world, id);
        }

        animation::play(world, id);
    }

    fn name(&self) -> &'static str {
        "player"
    }
}

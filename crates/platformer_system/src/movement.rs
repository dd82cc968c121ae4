//! Movement: horizontal motion, jump start, and the blocked-direction
//! report left by the last physics scan.

use std::time::Duration;

use platformer_component::{AnimationKey, Base, Direction, Entity, Movement, Physics};

use crate::animation;
use crate::world::World;

/// How a jump may begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Takeoff {
    /// Only while standing on something.
    FromGround,
    /// Regardless of ground contact, e.g. bouncing off a stomped enemy.
    Forced,
}

/// Move right by `speed` pixels and look right.
pub fn move_right(world: &mut World, id: Entity, speed: f32) {
    step(world, id, speed, Direction::Right);
}

/// Move left by `speed` pixels and look left.
pub fn move_left(world: &mut World, id: Entity, speed: f32) {
    step(world, id, -speed, Direction::Left);
}

/// [`move_right`], also switching to the frame set for `key`.
pub fn move_right_animated(world: &mut World, id: Entity, speed: f32, key: impl Into<AnimationKey>) {
    move_right(world, id, speed);
    animation::set_current_animation(world, id, key);
}

/// [`move_left`], also switching to the frame set for `key`.
pub fn move_left_animated(world: &mut World, id: Entity, speed: f32, key: impl Into<AnimationKey>) {
    move_left(world, id, speed);
    animation::set_current_animation(world, id, key);
}

fn step(world: &mut World, id: Entity, dx: f32, looking: Direction) {
    let accessible = world.can_access(id);
    let store = world.store_mut();
    let (Some(base), Some(movement)) = (store.bases.get_mut(&id), store.movements.get_mut(&id))
    else {
        debug_assert!(!accessible, "movement: {id} has no Movement component");
        return;
    };
    base.position.x += dx;
    movement.moving = true;
    movement.looking = looking;
}

/// Clear the moving flag.
pub fn stop(world: &mut World, id: Entity) {
    if let Some(movement) = world.required_mut::<Movement>(id, "movement::stop") {
        movement.moving = false;
    }
}

pub fn set_running(world: &mut World, id: Entity, running: bool) {
    if let Some(movement) = world.required_mut::<Movement>(id, "movement::set_running") {
        movement.running = running;
    }
}

/// Start a jump that rises for `duration`.
///
/// Nothing happens while a jump is already in progress, or when `takeoff`
/// is [`Takeoff::FromGround`] and the entity is airborne. Returns `true` if
/// a jump started.
pub fn jump(world: &mut World, id: Entity, duration: Duration, takeoff: Takeoff) -> bool {
    let now = world.now();
    let accessible = world.can_access(id);
    let store = world.store_mut();
    let (Some(movement), Some(physics)) = (store.movements.get_mut(&id), store.physics.get_mut(&id))
    else {
        debug_assert!(
            !accessible,
            "movement::jump: {id} needs both Movement and Physics components"
        );
        return false;
    };

    if movement.jumping || (takeoff == Takeoff::FromGround && !physics.on_ground) {
        return false;
    }

    movement.jumping = true;
    physics.jump_duration = duration;
    physics.jump_clock.restart(now);
    true
}

#[must_use]
pub fn is_jumping(world: &World, id: Entity) -> bool {
    world.get::<Movement>(id).is_some_and(|m| m.jumping)
}

#[must_use]
pub fn is_moving(world: &World, id: Entity) -> bool {
    world.get::<Movement>(id).is_some_and(|m| m.moving)
}

/// Where the entity is looking. Entities without movement look nowhere.
#[must_use]
pub fn looking_direction(world: &World, id: Entity) -> Direction {
    world
        .get::<Movement>(id)
        .map_or(Direction::None, |m| m.looking)
}

/// The side the last physics scan found blocked by a rigid body.
#[must_use]
pub fn blocked_direction(world: &World, id: Entity) -> Direction {
    world
        .get::<Movement>(id)
        .map_or(Direction::None, |m| m.blocked)
}

pub fn set_blocked_direction(world: &mut World, id: Entity, direction: Direction) {
    if let Some(movement) = world.required_mut::<Movement>(id, "movement::set_blocked_direction") {
        movement.blocked = direction;
    }
}

/// Current position, if the entity is accessible.
#[must_use]
pub fn position(world: &World, id: Entity) -> Option<platformer_math::Vec2> {
    world.get::<Base>(id).map(|b| b.position)
}

/// Whether the last physics scan found ground under the entity.
#[must_use]
pub fn on_ground(world: &World, id: Entity) -> bool {
    world.get::<Physics>(id).is_some_and(|p| p.on_ground)
}

//! Physics: collision scan, rigid-body blocking, and duration-based jumps.
//!
//! [`start`] is the per-tick entry point. It runs in three phases:
//!
//! 1. Scan every other accessible entity and classify the contact.
//! 2. For each contact, apply rigid-body blocking and dispatch the
//!    classification-specific reaction.
//! 3. Resolve vertical motion. Jumps are not parabolic: a jumping entity
//!    rises at its fall speed until the jump duration has elapsed, and
//!    gravity takes over from the next tick.

use platformer_component::{Base, Direction, Entity, Movement, Physics};
use platformer_math::Rect;
use tracing::trace;

use crate::collision;
use crate::reaction;
use crate::world::World;

/// Run one physics step for `id`.
///
/// The entity needs both [`Physics`] and [`Movement`]. Reactions dispatched
/// during the scan may remove other entities; every candidate is re-checked
/// for accessibility before it is touched.
pub fn start(world: &mut World, id: Entity) {
    let accessible = world.can_access(id);
    let store = world.store_mut();
    let (Some(physics), Some(movement)) = (store.physics.get_mut(&id), store.movements.get_mut(&id))
    else {
        debug_assert!(
            !accessible,
            "physics::start: {id} needs both Physics and Movement components"
        );
        return;
    };
    physics.on_ground = false;
    movement.blocked = Direction::None;

    scan(world, id);
    resolve_vertical(world, id);

    trace!(
        entity = %id,
        on_ground = world.get::<Physics>(id).is_some_and(|p| p.on_ground),
        blocked = ?world.get::<Movement>(id).map(|m| m.blocked),
        "physics step"
    );
}

fn bounds(world: &World, id: Entity) -> Option<Rect> {
    world.get::<Base>(id).map(Base::bounds)
}

fn scan(world: &mut World, id: Entity) {
    let candidates: Vec<Entity> = world.entities().filter(|&other| other != id).collect();

    for other in candidates {
        if !world.can_access(other) {
            continue;
        }
        let (Some(this_box), Some(other_box)) = (bounds(world, id), bounds(world, other)) else {
            return;
        };

        let side = collision::classify(&this_box, &other_box);
        if side == Direction::None {
            continue;
        }

        if world.get::<Physics>(other).is_some_and(|p| p.rigid) {
            block(world, id, side, &other_box);
        }
        reaction::dispatch(world, id, other, side);
    }
}

/// Record a contact with a rigid body.
///
/// Landing on top of a rigid body lifts the entity onto its top edge. A
/// wall or ceiling contact takes precedence over the floor in `blocked`.
fn block(world: &mut World, id: Entity, side: Direction, other: &Rect) {
    let store = world.store_mut();
    let (Some(base), Some(physics), Some(movement)) = (
        store.bases.get_mut(&id),
        store.physics.get_mut(&id),
        store.movements.get_mut(&id),
    ) else {
        return;
    };

    match side {
        Direction::Top => {
            physics.on_ground = true;
            base.position.y = other.top() - base.bounds().size.y;
            if movement.blocked == Direction::None {
                movement.blocked = Direction::Top;
            }
        }
        Direction::Bottom => {
            movement.jumping = false;
            movement.blocked = side;
        }
        Direction::Left | Direction::Right => movement.blocked = side,
        Direction::None => {}
    }
}

fn resolve_vertical(world: &mut World, id: Entity) {
    let now = world.now();
    let default_speed = world.config().fall_speed;
    let store = world.store_mut();
    let (Some(base), Some(physics), Some(movement)) = (
        store.bases.get_mut(&id),
        store.physics.get_mut(&id),
        store.movements.get_mut(&id),
    ) else {
        return;
    };

    let speed = physics.fall_speed.unwrap_or(default_speed);
    if movement.jumping {
        base.position.y -= speed;
        if physics.jump_clock.elapsed(now) >= physics.jump_duration {
            movement.jumping = false;
            physics.jump_clock.restart(now);
        }
    } else if !physics.on_ground {
        base.position.y += speed;
    }
}

//! Collision reactions keyed by the classification of both participants.
//!
//! [`dispatch`] is called by the physics scan for every non-empty contact,
//! after rigid-body blocking has been applied. Combinations not listed here
//! do nothing.
//!
//! | this       | other       | side   | effect                                   |
//! |------------|-------------|--------|------------------------------------------|
//! | player     | collectible | any    | other removed                            |
//! | player     | block       | bottom | bump animation released, item requested  |
//! | player     | hostile     | top    | other killed, this bounces               |
//! | projectile | hostile     | any    | other removed, projectile queued         |
//! | player     | growth item | any    | this grows one tier, other removed       |

use platformer_component::{
    Animation, AnimationKind, Base, Classification, Direction, Entity, Kind, Lifecycle, Movement,
    Physics,
};
use platformer_math::Vec2;
use tracing::debug;

use crate::animation;
use crate::game::Removal;
use crate::movement::{self, Takeoff};
use crate::world::World;

/// An entity a block asked content to create after being hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: Kind,
    /// Top-left corner of the spawned entity: directly above the block.
    pub position: Vec2,
    /// The block that was hit.
    pub source: Entity,
}

/// Apply the reaction for `this` touching `other` on `side` of `this`.
pub fn dispatch(world: &mut World, this: Entity, other: Entity, side: Direction) {
    let (Some(this_kind), Some(other_kind)) = (
        world.get::<Classification>(this).map(Classification::kind),
        world.get::<Classification>(other).map(Classification::kind),
    ) else {
        return;
    };

    match (this_kind, other_kind, side) {
        (Kind::Player, kind, _) if kind.is_collectible() => collect(world, other),
        (Kind::Player, Kind::Block, Direction::Bottom) => hit_block(world, other),
        (Kind::Player, kind, Direction::Top) if kind.is_hostile() => stomp(world, this, other),
        (Kind::Projectile, kind, _) if kind.is_hostile() => shoot(world, this, other),
        (kind, item, _) if kind.is_upgradeable() && item.is_growth_item() => {
            grow(world, this, other);
        }
        _ => {}
    }
}

fn collect(world: &mut World, item: Entity) {
    debug!(%item, "collected");
    world.remove(item);
}

fn hit_block(world: &mut World, block: Entity) {
    if world.has::<Animation>(block) {
        animation::set_allow_play(world, block, true);
    }

    let Some(&Classification::Block {
        block: block_kind,
        spawns: Some(kind),
    }) = world.get::<Classification>(block)
    else {
        return;
    };
    let Some(base) = world.get::<Base>(block) else {
        return;
    };
    let position = base.position - Vec2::new(0.0, base.bounds().size.y);

    world.insert(
        block,
        Classification::Block {
            block: block_kind,
            spawns: None,
        },
    );
    world.push_spawn_request(SpawnRequest {
        kind,
        position,
        source: block,
    });
    debug!(%block, ?kind, "block released item");
}

fn stomp(world: &mut World, attacker: Entity, hostile: Entity) {
    match world.get_mut::<Base>(hostile) {
        Some(base) if !base.is_dead() => base.lifecycle = Some(Lifecycle::Dead),
        _ => return,
    }

    if world.has::<Animation>(hostile) {
        animation::set_current_animation(world, hostile, AnimationKind::Dead);
        animation::set_stop_when_finished(world, hostile, true);
        animation::set_allow_play(world, hostile, true);
    }
    world.queue_removal(hostile, Removal::AfterAnimation);

    if world.has::<Movement>(attacker) && world.has::<Physics>(attacker) {
        let bounce = world.config().bounce_duration();
        movement::jump(world, attacker, bounce, Takeoff::Forced);
    }
    debug!(%attacker, %hostile, "stomped");
}

fn shoot(world: &mut World, projectile: Entity, hostile: Entity) {
    if world.is_removal_pending(projectile)
        || world.get::<Base>(hostile).is_some_and(Base::is_dead)
    {
        return;
    }
    world.remove(hostile);
    world.queue_removal(projectile, Removal::Immediate);
    debug!(%projectile, %hostile, "shot");
}

fn grow(world: &mut World, this: Entity, item: Entity) {
    let Some(&Classification::Player { tier }) = world.get::<Classification>(this) else {
        return;
    };
    let next = tier.next();
    world.insert(this, Classification::Player { tier: next });
    if world.has::<Animation>(this) {
        animation::set_tier(world, this, next);
    }
    world.remove(item);
    debug!(entity = %this, ?next, "grew");
}

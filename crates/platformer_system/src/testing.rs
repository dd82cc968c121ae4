//! Fixture worlds and entities shared by the unit tests.

use platformer_component::{
    AnimationKey, AnimationKind, Base, BlockKind, Classification, Entity, Lifecycle, Maturity,
    Movement, Physics, Scratch,
};
use platformer_math::{IntRect, Vec2};

use crate::animation;
use crate::frontend::AssetTable;
use crate::time::ManualTime;
use crate::world::World;

pub(crate) const BLOCK: &str = "assets/block.png";
pub(crate) const PLAYER: &str = "assets/player.png";
pub(crate) const COIN: &str = "assets/coin.png";
pub(crate) const CLOUD: &str = "assets/cloud.png";
pub(crate) const GOOMBA: &str = "assets/goomba.png";
pub(crate) const MUSHROOM: &str = "assets/mushroom.png";
pub(crate) const FLOWER: &str = "assets/flower.png";
pub(crate) const FIRE: &str = "assets/fire.png";

/// A world whose every known asset is 16x16, on a manual clock at zero.
pub(crate) fn world() -> (World, ManualTime) {
    let mut assets = AssetTable::new();
    for path in [BLOCK, PLAYER, COIN, CLOUD, GOOMBA, MUSHROOM, FLOWER, FIRE] {
        assets.insert(path, 16, 16);
    }
    let time = ManualTime::new();
    let world = World::new(assets).with_time_source(time.clone());
    (world, time)
}

fn tile(column: i32) -> IntRect {
    IntRect::new(column * 16, 0, 16, 16)
}

fn spawn(world: &mut World, path: &str, position: Vec2, classification: Classification) -> Entity {
    let e = world.create(path).unwrap();
    world.get_mut::<Base>(e).unwrap().position = position;
    world.insert(e, classification);
    e
}

/// A rigid brick whose bump animation waits to be released by a hit.
pub(crate) fn block(world: &mut World, position: Vec2) -> Entity {
    let e = spawn(
        world,
        BLOCK,
        position,
        Classification::Block {
            block: BlockKind::Brick,
            spawns: None,
        },
    );
    world.insert(e, Physics::rigid());
    animation::attach(world, e);
    animation::set_frames(world, e, AnimationKind::Bump, (0..4).map(tile).collect());
    animation::set_current_animation(world, e, AnimationKind::Bump);
    animation::set_allow_play(world, e, false);
    animation::set_stop_when_finished(world, e, true);
    e
}

/// A child-tier player with idle and walk frames at child and adult tiers.
/// Child frames are 16x16, adult frames 16x32.
pub(crate) fn player(world: &mut World, position: Vec2) -> Entity {
    let e = spawn(
        world,
        PLAYER,
        position,
        Classification::Player {
            tier: Maturity::Child,
        },
    );
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    animation::attach(world, e);
    for (tier, row, height) in [(Maturity::Child, 0, 16), (Maturity::Adult, 16, 32)] {
        let frames = |columns: &[i32]| -> Vec<IntRect> {
            columns.iter().map(|&c| IntRect::new(c * 16, row, 16, height)).collect()
        };
        animation::set_frames(world, e, AnimationKey::tiered(AnimationKind::IdleRight, tier), frames(&[0]));
        animation::set_frames(world, e, AnimationKey::tiered(AnimationKind::IdleLeft, tier), frames(&[1]));
        animation::set_frames(world, e, AnimationKey::tiered(AnimationKind::WalkRight, tier), frames(&[2, 3]));
        animation::set_frames(world, e, AnimationKey::tiered(AnimationKind::WalkLeft, tier), frames(&[4, 5]));
    }
    animation::set_current_animation(world, e, AnimationKind::IdleRight);
    e
}

/// A live goomba with a two-frame walk and a flattened death frame.
pub(crate) fn goomba(world: &mut World, position: Vec2) -> Entity {
    let e = spawn(world, GOOMBA, position, Classification::Goomba);
    world.get_mut::<Base>(e).unwrap().lifecycle = Some(Lifecycle::Alive);
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    animation::attach(world, e);
    animation::set_frames(world, e, AnimationKind::Walk, vec![tile(0), tile(1)]);
    animation::set_frame(world, e, AnimationKind::Dead, IntRect::new(32, 8, 16, 8));
    animation::set_current_animation(world, e, AnimationKind::Walk);
    e
}

pub(crate) fn coin(world: &mut World, position: Vec2) -> Entity {
    let e = spawn(world, COIN, position, Classification::Coin);
    animation::attach(world, e);
    animation::set_frames(world, e, AnimationKind::Idle, (0..3).map(tile).collect());
    animation::set_current_animation(world, e, AnimationKind::Idle);
    e
}

/// Scenery: classified, but with no physics and no animation.
pub(crate) fn cloud(world: &mut World, position: Vec2) -> Entity {
    spawn(world, CLOUD, position, Classification::Cloud)
}

pub(crate) fn mushroom(world: &mut World, position: Vec2) -> Entity {
    let e = spawn(world, MUSHROOM, position, Classification::Mushroom);
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    e
}

pub(crate) fn flower(world: &mut World, position: Vec2) -> Entity {
    spawn(world, FLOWER, position, Classification::Flower)
}

/// A projectile with scratch storage for its lifetime clock.
pub(crate) fn fire(world: &mut World, position: Vec2, owner: Option<Entity>) -> Entity {
    let e = spawn(world, FIRE, position, Classification::Projectile { owner });
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    world.add_component::<Scratch>(e);
    e
}

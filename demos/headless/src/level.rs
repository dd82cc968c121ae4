//! The demo level: asset catalogue, entity constructors, and layout.

use std::time::Duration;

use anyhow::Result;
use platformer_component::{
    AnimationKey, AnimationKind, Base, BlockKind, Classification, Direction, Entity, Kind,
    Lifecycle, Maturity, Movement, Physics, Scratch,
};
use platformer_math::{IntRect, Vec2};
use platformer_system::behavior::{Animate, Patrol, Projectile};
use platformer_system::{AssetTable, SpawnRequest, World, animation, scratch};
use tracing::debug;

use crate::player::PlayerControl;

const BLOCK: &str = "assets/block.png";
const PLAYER: &str = "assets/mario.png";
const COIN: &str = "assets/coin.png";
const CLOUD: &str = "assets/cloud.png";
const GOOMBA: &str = "assets/goomba.png";
const MUSHROOM: &str = "assets/mushroom.png";
const FLOWER: &str = "assets/flower.png";
const FIRE: &str = "assets/fire.png";

const TILE: f32 = 16.0;
const FLOOR_Y: f32 = 13.0 * TILE;

/// Sizes of every image the level uses.
pub fn assets() -> AssetTable {
    AssetTable::new()
        .with_asset(BLOCK, 80, 32)
        .with_asset(PLAYER, 240, 180)
        .with_asset(COIN, 64, 32)
        .with_asset(CLOUD, 32, 24)
        .with_asset(GOOMBA, 48, 16)
        .with_asset(MUSHROOM, 16, 16)
        .with_asset(FLOWER, 16, 16)
        .with_asset(FIRE, 8, 8)
}

fn place(world: &mut World, path: &str, position: Vec2, classification: Classification) -> Result<Entity> {
    let e = world.create(path)?;
    if let Some(base) = world.get_mut::<Base>(e) {
        base.position = position;
    }
    world.insert(e, classification);
    Ok(e)
}

pub fn block(world: &mut World, position: Vec2, kind: BlockKind, spawns: Option<Kind>) -> Result<Entity> {
    let e = place(world, BLOCK, position, Classification::Block { block: kind, spawns })?;
    world.insert(e, Physics::rigid());
    animation::attach(world, e);

    let bump = match kind {
        BlockKind::Empty => vec![IntRect::new(64, 0, 16, 16)],
        BlockKind::Brick => vec![
            IntRect::new(0, 16, 16, 16),
            IntRect::new(32, 0, 16, 16),
            IntRect::new(48, 0, 16, 16),
            IntRect::new(64, 0, 16, 16),
        ],
        BlockKind::QuestionMark => vec![
            IntRect::new(16, 0, 16, 16),
            IntRect::new(16, 16, 16, 16),
            IntRect::new(32, 16, 16, 16),
            IntRect::new(64, 0, 16, 16),
        ],
    };
    animation::set_frames(world, e, AnimationKind::Bump, bump);
    animation::set_current_animation(world, e, AnimationKind::Bump);
    animation::set_frame_delay(world, e, Duration::from_millis(60));
    animation::set_allow_play(world, e, false);
    animation::set_stop_when_finished(world, e, true);
    world.set_behavior(e, Animate);
    Ok(e)
}

pub fn player(world: &mut World, position: Vec2) -> Result<Entity> {
    let e = place(world, PLAYER, position, Classification::Player { tier: Maturity::Child })?;
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    world.add_component::<Scratch>(e);
    // Starts the shot cooldown.
    scratch::clock(world, e);
    animation::attach(world, e);

    // Small frames sit on one row of the sheet; the taller tiers below it.
    for (tier, top, bottom) in [
        (Maturity::Child, 99, 114),
        (Maturity::Adult, 120, 152),
        (Maturity::Fire, 154, 186),
    ] {
        let frame = |left: i32, right: i32| IntRect::from_corners(left, top, right, bottom);
        let key = |kind| AnimationKey::tiered(kind, tier);
        animation::set_frame(world, e, key(AnimationKind::IdleRight), frame(133, 145));
        animation::set_frame(world, e, key(AnimationKind::IdleLeft), frame(83, 95));
        animation::set_frames(world, e, key(AnimationKind::WalkRight), vec![frame(148, 160), frame(163, 177)]);
        animation::set_frames(world, e, key(AnimationKind::WalkLeft), vec![frame(68, 80), frame(50, 65)]);
    }
    animation::set_frame_delay(world, e, Duration::from_millis(120));
    animation::set_current_animation(world, e, AnimationKind::IdleRight);
    world.set_behavior(e, PlayerControl::default());
    Ok(e)
}

pub fn goomba(world: &mut World, position: Vec2) -> Result<Entity> {
    let e = place(world, GOOMBA, position, Classification::Goomba)?;
    if let Some(base) = world.get_mut::<Base>(e) {
        base.lifecycle = Some(Lifecycle::Alive);
    }
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    animation::attach(world, e);
    animation::set_frames(
        world,
        e,
        AnimationKind::Walk,
        vec![IntRect::from_corners(0, 0, 16, 16), IntRect::from_corners(16, 0, 32, 16)],
    );
    animation::set_frame(world, e, AnimationKind::Dead, IntRect::from_corners(32, 8, 48, 16));
    animation::set_current_animation(world, e, AnimationKind::Walk);
    world.set_behavior(e, Patrol::default());
    Ok(e)
}

pub fn coin(world: &mut World, position: Vec2) -> Result<Entity> {
    let e = place(world, COIN, position, Classification::Coin)?;
    animation::attach(world, e);
    animation::set_frames(
        world,
        e,
        AnimationKind::Idle,
        (0..4).map(|i| IntRect::new(i * 16, 0, 10, 14)).collect(),
    );
    animation::set_current_animation(world, e, AnimationKind::Idle);
    world.set_behavior(e, Animate);
    Ok(e)
}

pub fn cloud(world: &mut World, position: Vec2) -> Result<Entity> {
    place(world, CLOUD, position, Classification::Cloud)
}

pub fn mushroom(world: &mut World, position: Vec2) -> Result<Entity> {
    let e = place(world, MUSHROOM, position, Classification::Mushroom)?;
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    world.set_behavior(e, Patrol::new(1.0).heading(Direction::Right));
    Ok(e)
}

pub fn flower(world: &mut World, position: Vec2) -> Result<Entity> {
    place(world, FLOWER, position, Classification::Flower)
}

pub fn fire(world: &mut World, position: Vec2, owner: Entity) -> Result<Entity> {
    let e = place(world, FIRE, position, Classification::Projectile { owner: Some(owner) })?;
    world.add_component::<Movement>(e);
    world.add_component::<Physics>(e);
    world.add_component::<Scratch>(e);
    world.set_behavior(e, Projectile::default());
    Ok(e)
}

/// Create whatever a hit block asked for.
pub fn spawn(world: &mut World, request: &SpawnRequest) -> Result<Option<Entity>> {
    let entity = match request.kind {
        Kind::Mushroom => Some(mushroom(world, request.position)?),
        Kind::Flower => Some(flower(world, request.position)?),
        Kind::Coin => Some(coin(world, request.position)?),
        _ => None,
    };
    debug!(kind = ?request.kind, source = %request.source, ?entity, "spawn request handled");
    Ok(entity)
}

/// Lay out the level and return the player.
pub fn build(world: &mut World) -> Result<Entity> {
    for column in 0..40 {
        block(world, Vec2::new(column as f32 * TILE, FLOOR_Y), BlockKind::Empty, None)?;
    }
    block(world, Vec2::new(39.0 * TILE, FLOOR_Y - TILE), BlockKind::Empty, None)?;
    block(world, Vec2::new(6.0 * TILE, FLOOR_Y - 4.0 * TILE), BlockKind::QuestionMark, Some(Kind::Mushroom))?;
    block(world, Vec2::new(7.0 * TILE, FLOOR_Y - 4.0 * TILE), BlockKind::Brick, None)?;
    block(world, Vec2::new(8.0 * TILE, FLOOR_Y - 4.0 * TILE), BlockKind::QuestionMark, Some(Kind::Flower))?;

    for column in [11, 12, 13] {
        coin(world, Vec2::new(column as f32 * TILE, FLOOR_Y - 2.0 * TILE))?;
    }
    cloud(world, Vec2::new(4.0 * TILE, 2.0 * TILE))?;
    goomba(world, Vec2::new(24.0 * TILE, FLOOR_Y - TILE))?;

    player(world, Vec2::new(2.0 * TILE, FLOOR_Y - TILE))
}

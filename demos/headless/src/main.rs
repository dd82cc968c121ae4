//! # headless: scripted platformer run
//!
//! Builds the demo level, feeds it a fixed key script through the
//! [`Headless`] frontend, and steps it on simulated 60 Hz time. Everything
//! interesting (pickups, stomps, spawns, removals) shows up in the log.
//!
//! ```text
//! RUST_LOG=debug cargo run -p headless -- [world-config.json]
//! ```

mod level;
mod player;

use std::time::Duration;

use anyhow::{Context, Result};
use platformer_system::frontend::{Headless, Key, camera_target};
use platformer_system::{Game, GameConfig, InputState, ManualTime, World, WorldConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Simulated time per frame.
const FRAME: Duration = Duration::from_micros(16_667);

/// Frames to run before stopping.
const FRAMES: u64 = 900;

/// `(frame, key, pressed)` events, in frame order.
const SCRIPT: &[(u64, Key, bool)] = &[
    (30, Key::Right, true),
    (58, Key::Up, true),
    (60, Key::Up, false),
    (150, Key::Run, true),
    (200, Key::Up, true),
    (202, Key::Up, false),
    (320, Key::Run, false),
    (360, Key::Right, false),
    (380, Key::Left, true),
    (440, Key::Left, false),
    (450, Key::Fire, true),
    (452, Key::Fire, false),
    (500, Key::Right, true),
    (560, Key::Up, true),
    (562, Key::Up, false),
];

fn apply_script(frame: u64, input: &mut InputState) {
    for &(_, key, pressed) in SCRIPT.iter().filter(|(at, ..)| *at == frame) {
        if pressed {
            input.press(key);
        } else {
            input.release(key);
        }
    }
}

fn load_config() -> Result<WorldConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {path}"))?;
            Ok(WorldConfig::from_json_str(&json)?)
        }
        None => Ok(WorldConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("headless=info".parse()?))
        .init();

    let config = load_config()?;
    info!(?config, "world configuration");

    let time = ManualTime::new();
    let mut world = World::new(level::assets())
        .with_config(config)
        .with_time_source(time.clone());
    let player = level::build(&mut world)?;
    info!(entities = world.entity_count(), %player, "level built");

    let mut game = Game::new(world, Headless::new()).with_config(GameConfig { max_frames: FRAMES });
    while game.is_running() {
        apply_script(game.frames(), &mut game.frontend_mut().input);
        time.advance(FRAME);
        game.frame();

        for request in game.world_mut().take_spawn_requests() {
            level::spawn(game.world_mut(), &request)?;
        }
    }

    match camera_target(game.world(), player) {
        Some(target) => info!(
            x = target.position.x,
            y = target.position.y,
            looking = ?target.looking,
            "player finished"
        ),
        None => info!("player was removed"),
    }
    info!(
        frames = game.frames(),
        entities = game.world().entity_count(),
        drawn = game.frontend().drawn.len(),
        "headless run complete"
    );
    Ok(())
}

//! # platformer_system
//!
//! The "S" of the platformer ECS: the [`World`] context and the systems that
//! operate on it.
//!
//! This crate provides:
//!
//! - [`World`]: entity registry, component maps, behaviour table, removal
//!   queue, and the per-tick time sample.
//! - Systems as free functions taking `&mut World`: [`animation`],
//!   [`movement`], [`physics`] (which calls [`collision`] and [`reaction`]),
//!   and typed [`scratch`] access.
//! - [`game`]: the per-tick update, deferred removal, and the [`Game`]
//!   frame driver.
//! - [`frontend`]: the traits a windowing layer implements, plus a
//!   [`Headless`] frontend.
//!
//! Every operation tolerates entities that were removed earlier in the same
//! tick: it simply does nothing for them.

pub mod animation;
pub mod behavior;
pub mod collision;
pub mod config;
pub mod error;
pub mod frontend;
pub mod game;
pub mod movement;
pub mod physics;
pub mod reaction;
pub mod scratch;
pub mod time;
pub mod world;

#[cfg(test)]
mod testing;

pub use behavior::{Animate, Behavior, Patrol, Projectile};
pub use config::{GameConfig, WorldConfig};
pub use error::{AssetLoadError, WorldError};
pub use frontend::{
    AssetLoader, AssetTable, CameraTarget, Frontend, Headless, InputSource, InputState, Key,
    Renderer,
};
pub use game::{Game, PendingRemoval, Removal};
pub use movement::Takeoff;
pub use reaction::SpawnRequest;
pub use time::{ManualTime, MonotonicTime, TimeSource};
pub use world::World;

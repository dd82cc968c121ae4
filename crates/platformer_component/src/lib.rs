//! # platformer_component
//!
//! The "E" and "C" of the platformer ECS: entity handles, the sparse
//! per-kind component maps, and the plain data each component carries.
//!
//! This crate provides:
//!
//! - [`Entity`]: lightweight `u64` entity identifiers.
//! - [`EntityAllocator`]: monotonically increasing ID allocator.
//! - [`Component`] trait: typed access into the [`ComponentStore`].
//! - Component data: [`Base`], [`Classification`], [`Animation`],
//!   [`Movement`], [`Physics`], [`Scratch`].
//! - [`Clock`]: elapsed-time stamps driven by the world's time sample.
//!
//! Behaviour lives in `platformer_system`; everything here is data.

pub mod animation;
pub mod base;
pub mod classification;
pub mod clock;
pub mod component;
pub mod entity;
pub mod motion;
pub mod scratch;
pub mod store;

pub use animation::{Animation, AnimationKey, AnimationKind, DEFAULT_FRAME_DELAY};
pub use base::{Asset, AssetId, Base, Lifecycle};
pub use classification::{BlockKind, Classification, Kind, Maturity};
pub use clock::Clock;
pub use component::Component;
pub use entity::{Entity, EntityAllocator};
pub use motion::{Direction, Movement, Physics};
pub use scratch::{Scratch, Slot};
pub use store::ComponentStore;

//! Interfaces to the collaborators around the core: asset loading, input,
//! rendering, and the camera.
//!
//! The core never polls input or draws on its own. A [`Frontend`] is handed
//! to [`Game`](crate::game::Game), which calls into it in a fixed order each
//! frame.

use std::collections::{HashMap, HashSet};

use platformer_component::{Asset, AssetId, Base, Direction, Entity, Movement};
use platformer_math::{UVec2, Vec2};

use crate::error::AssetLoadError;
use crate::world::World;

/// Loads visual assets by path.
pub trait AssetLoader {
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] if the asset is missing or unreadable.
    fn load(&mut self, path: &str) -> Result<Asset, AssetLoadError>;
}

/// An in-memory asset catalogue: known paths and their pixel sizes.
///
/// Loading the same path twice returns the same handle.
#[derive(Debug, Default)]
pub struct AssetTable {
    entries: HashMap<String, Asset>,
    next_id: u64,
}

impl AssetTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset of the given size under `path`.
    pub fn insert(&mut self, path: impl Into<String>, width: u32, height: u32) -> AssetId {
        self.next_id += 1;
        let asset = Asset {
            id: AssetId(self.next_id),
            size: UVec2::new(width, height),
        };
        self.entries.insert(path.into(), asset);
        asset.id
    }

    #[must_use]
    pub fn with_asset(mut self, path: impl Into<String>, width: u32, height: u32) -> Self {
        self.insert(path, width, height);
        self
    }
}

impl AssetLoader for AssetTable {
    fn load(&mut self, path: &str) -> Result<Asset, AssetLoadError> {
        self.entries
            .get(path)
            .copied()
            .ok_or_else(|| AssetLoadError::NotFound(path.to_string()))
    }
}

/// Keys content behaviours may ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Run,
    Fire,
    Escape,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Run,
        Key::Fire,
        Key::Escape,
    ];
}

/// Current key-down state.
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// A snapshot of which keys were down when the frame started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    down: HashSet<Key>,
}

impl InputState {
    /// Record the state of every [`Key`] from `source`.
    #[must_use]
    pub fn capture(source: &dyn InputSource) -> Self {
        Self {
            down: Key::ALL
                .into_iter()
                .filter(|&key| source.is_key_down(key))
                .collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }
}

impl InputSource for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

/// Draws entity visuals.
pub trait Renderer {
    fn draw(&mut self, base: &Base);
}

/// Draw every entity that has a [`Base`], in id order.
pub fn draw_all(world: &World, renderer: &mut dyn Renderer) {
    for base in world.store().bases.values() {
        renderer.draw(base);
    }
}

/// What a scrolling camera needs to know about the entity it follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec2,
    pub looking: Direction,
    pub running: bool,
}

/// Snapshot the camera-relevant state of `entity`, if it is accessible.
///
/// Entities without [`Movement`] report looking right and not running.
#[must_use]
pub fn camera_target(world: &World, entity: Entity) -> Option<CameraTarget> {
    let base = world.get::<Base>(entity)?;
    let movement = world.get::<Movement>(entity).cloned().unwrap_or_default();
    Some(CameraTarget {
        position: base.position,
        looking: movement.looking,
        running: movement.running,
    })
}

/// The window side of the frame loop.
pub trait Frontend: InputSource + Renderer {
    /// Pump pending window events.
    fn poll_events(&mut self);
    /// Clear the back buffer.
    fn clear(&mut self);
    /// Present the back buffer.
    fn display(&mut self);
    fn is_open(&self) -> bool;
}

/// A frontend with no window. Records what would have been drawn.
#[derive(Debug, Default)]
pub struct Headless {
    pub input: InputState,
    /// Bases drawn since the last `clear`.
    pub drawn: Vec<Base>,
    pub frames_displayed: u64,
    /// Close after this many displayed frames (0 = stay open).
    pub close_after: u64,
    closed: bool,
}

impl Headless {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn closing_after(frames: u64) -> Self {
        Self {
            close_after: frames,
            ..Self::default()
        }
    }

    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl InputSource for Headless {
    fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }
}

impl Renderer for Headless {
    fn draw(&mut self, base: &Base) {
        self.drawn.push(base.clone());
    }
}

impl Frontend for Headless {
    fn poll_events(&mut self) {
        if self.input.is_key_down(Key::Escape) {
            self.closed = true;
        }
    }

    fn clear(&mut self) {
        self.drawn.clear();
    }

    fn display(&mut self) {
        self.frames_displayed += 1;
        if self.close_after > 0 && self.frames_displayed >= self.close_after {
            self.closed = true;
        }
    }

    fn is_open(&self) -> bool {
        !self.closed
    }
}

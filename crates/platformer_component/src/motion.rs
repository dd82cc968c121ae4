//! Movement and physics component data.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// A direction on screen.
///
/// Used both for where an entity is looking and for which side of it the
/// last collision scan found blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    None,
    Top,
    Right,
    Left,
    Bottom,
}

/// Directional, running, and jumping state.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    pub moving: bool,
    pub running: bool,
    pub jumping: bool,
    pub looking: Direction,
    /// The side the last physics scan found blocked by a rigid body.
    pub blocked: Direction,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            moving: false,
            running: false,
            jumping: false,
            looking: Direction::Right,
            blocked: Direction::None,
        }
    }
}

/// Gravity and jump state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Physics {
    pub on_ground: bool,
    /// Rigid bodies can be stood on and block motion.
    pub rigid: bool,
    /// Pixels per tick for both falling and rising. `None` uses the world's
    /// configured fall speed.
    pub fall_speed: Option<f32>,
    /// How long the current jump keeps rising.
    pub jump_duration: Duration,
    pub jump_clock: Clock,
}

impl Physics {
    /// Physics for an immovable body that others can stand on.
    #[must_use]
    pub fn rigid() -> Self {
        Self {
            rigid: true,
            ..Self::default()
        }
    }
}

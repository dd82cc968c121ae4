//! World and game loop configuration.
//!
//! Defaults reproduce the tuning the runtime was designed around. Every field
//! can be overridden from JSON; missing fields keep their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Pixels per tick an airborne entity falls (and a jumping entity rises).
pub const DEFAULT_FALL_SPEED: f32 = 4.0;

/// Length of the bounce jump forced on an entity that stomps an enemy.
/// Half of a regular 400 ms player jump.
pub const DEFAULT_BOUNCE_MS: u64 = 200;

/// Delay between animation frames for animations attached through
/// [`animation::attach`](crate::animation::attach).
pub const DEFAULT_FRAME_DELAY_MS: u64 = 500;

/// Tuning shared by every system operating on a world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Fall speed for entities whose physics does not override it.
    pub fall_speed: f32,
    /// Bounce jump duration after a stomp, in milliseconds.
    pub bounce_duration_ms: u64,
    /// Default frame delay of newly attached animations, in milliseconds.
    pub frame_delay_ms: u64,
}

impl WorldConfig {
    /// Parse a configuration from JSON, filling unspecified fields with
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] if the JSON is malformed or a
    /// field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, WorldError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn bounce_duration(&self) -> Duration {
        Duration::from_millis(self.bounce_duration_ms)
    }

    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    #[must_use]
    pub fn with_fall_speed(mut self, fall_speed: f32) -> Self {
        self.fall_speed = fall_speed;
        self
    }

    #[must_use]
    pub fn with_bounce_duration(mut self, duration: Duration) -> Self {
        self.bounce_duration_ms = duration.as_millis() as u64;
        self
    }

    #[must_use]
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay_ms = delay.as_millis() as u64;
        self
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            fall_speed: DEFAULT_FALL_SPEED,
            bounce_duration_ms: DEFAULT_BOUNCE_MS,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

/// Configuration for the frame driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum number of frames to run (0 = until the frontend closes).
    pub max_frames: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.fall_speed, 4.0);
        assert_eq!(config.bounce_duration(), Duration::from_millis(200));
        assert_eq!(config.frame_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_json_partial() {
        let config = WorldConfig::from_json_str(r#"{ "fall_speed": 2.5 }"#).unwrap();
        assert_eq!(config.fall_speed, 2.5);
        assert_eq!(config.bounce_duration_ms, DEFAULT_BOUNCE_MS);
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        let result = WorldConfig::from_json_str(r#"{ "fall_speed": "fast" }"#);
        assert!(matches!(result, Err(WorldError::InvalidConfig(_))));
    }

    #[test]
    fn test_builders() {
        let config = WorldConfig::default()
            .with_fall_speed(1.0)
            .with_bounce_duration(Duration::from_millis(150))
            .with_frame_delay(Duration::from_millis(80));
        assert_eq!(config.fall_speed, 1.0);
        assert_eq!(config.bounce_duration_ms, 150);
        assert_eq!(config.frame_delay_ms, 80);
    }

    #[test]
    fn test_game_config_default_is_unbounded() {
        assert_eq!(GameConfig::default().max_frames, 0);
    }
}

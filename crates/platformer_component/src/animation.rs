//! Animation component data.
//!
//! Frame sets are keyed by [`AnimationKey`], a `(kind, tier)` pair, so an
//! entity that grows can hold one frame set per tier for every animation
//! kind without any index arithmetic.

use std::collections::HashMap;
use std::time::Duration;

use platformer_math::IntRect;
use serde::{Deserialize, Serialize};

use crate::classification::Maturity;
use crate::clock::Clock;

/// Delay between frame advances when none is configured.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(500);

/// The kinds of animation content registers frame sets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKind {
    Idle,
    IdleLeft,
    IdleRight,
    Walk,
    WalkLeft,
    WalkRight,
    RunLeft,
    RunRight,
    JumpLeft,
    JumpRight,
    Dead,
    /// A block reacting to being hit from below.
    Bump,
    Custom(u16),
}

/// Identifies one frame set: an animation kind at a maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationKey {
    pub kind: AnimationKind,
    pub tier: Maturity,
}

impl AnimationKey {
    /// A key at the base tier. Entities without tiers only ever use these.
    #[must_use]
    pub const fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            tier: Maturity::Child,
        }
    }

    /// A key for `kind` at `tier`.
    #[must_use]
    pub const fn tiered(kind: AnimationKind, tier: Maturity) -> Self {
        Self { kind, tier }
    }

    /// The same kind at another tier.
    #[must_use]
    pub const fn at_tier(self, tier: Maturity) -> Self {
        Self { tier, ..self }
    }
}

impl From<AnimationKind> for AnimationKey {
    fn from(kind: AnimationKind) -> Self {
        Self::new(kind)
    }
}

/// Per-entity frame sequencing state.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Registered frame sets.
    pub frames: HashMap<AnimationKey, Vec<IntRect>>,
    /// The frame set being played, if one has been selected.
    pub current: Option<AnimationKey>,
    /// Index of the next frame to commit.
    pub current_frame: usize,
    /// Minimum time between two frame advances.
    pub frame_delay: Duration,
    pub started: bool,
    pub finished: bool,
    /// `play` does nothing while this is `false`.
    pub allow_play: bool,
    /// Freeze once the sequence has wrapped instead of looping.
    pub stop_when_finished: bool,
    pub clock: Clock,
}

impl Animation {
    /// Number of frames in the current frame set (0 if none is selected).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.current
            .and_then(|key| self.frames.get(&key))
            .map_or(0, Vec::len)
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            frames: HashMap::new(),
            current: None,
            current_frame: 0,
            frame_delay: DEFAULT_FRAME_DELAY,
            started: false,
            finished: false,
            allow_play: true,
            stop_when_finished: false,
            clock: Clock::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let anim = Animation::default();
        assert!(anim.allow_play);
        assert!(!anim.started);
        assert!(!anim.finished);
        assert_eq!(anim.current, None);
        assert_eq!(anim.frame_delay, DEFAULT_FRAME_DELAY);
        assert_eq!(anim.frame_count(), 0);
    }

    #[test]
    fn test_keys_differ_by_tier() {
        let child = AnimationKey::new(AnimationKind::WalkRight);
        let adult = child.at_tier(Maturity::Adult);
        assert_ne!(child, adult);
        assert_eq!(adult, AnimationKey::tiered(AnimationKind::WalkRight, Maturity::Adult));
        assert_eq!(AnimationKey::from(AnimationKind::WalkRight), child);
    }

    #[test]
    fn test_frame_count_of_current() {
        let mut anim = Animation::default();
        let key = AnimationKey::new(AnimationKind::Walk);
        anim.frames.insert(key, vec![IntRect::default(); 3]);
        anim.current = Some(key);
        assert_eq!(anim.frame_count(), 3);
    }
}

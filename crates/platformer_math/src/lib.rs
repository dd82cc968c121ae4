//! # platformer_math
//!
//! Math types for the platformer runtime. Re-exports [`glam`] for vector
//! maths and defines the two rectangle types the runtime works with:
//!
//! - [`Rect`]: a floating-point axis-aligned bounding box in world space.
//! - [`IntRect`]: an integer source rectangle into a sprite sheet.
//!
//! World space follows screen conventions: `x` grows to the right and `y`
//! grows downwards, so a box's `top` is its smallest `y`.

pub mod rect;

// Re-export glam types for convenience.
pub use glam::{IVec2, UVec2, Vec2};

pub use rect::{IntRect, Rect};

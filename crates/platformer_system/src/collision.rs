//! AABB contact classification.
//!
//! [`classify`] reports which side of `this` box touches `other`, from the
//! point of view of `this`:
//!
//! | result   | meaning                                  |
//! |----------|------------------------------------------|
//! | `Top`    | `this` rests on top of `other`           |
//! | `Bottom` | `this` bumps `other` from underneath     |
//! | `Right`  | `other` is against the right of `this`   |
//! | `Left`   | `other` is against the left of `this`    |
//! | `None`   | the boxes do not touch                   |
//!
//! The test compares the boxes' midlines. A vertical contact (`Top` or
//! `Bottom`) fires when the shared region is no taller than it is wide; which
//! of the two is decided by which box's horizontal midline is higher.
//! Horizontal contacts mirror this with the vertical midlines. Several sides
//! can fire at once (square overlaps, coincident midlines); the first in
//! `Top`, `Bottom`, `Right`, `Left` order wins, so standing on something
//! beats bumping into it.

use platformer_component::Direction;
use platformer_math::Rect;

/// Classify the contact between `this` and `other`. See the module docs.
#[must_use]
pub fn classify(this: &Rect, other: &Rect) -> Direction {
    let Some(overlap) = this.overlap(other) else {
        return Direction::None;
    };

    let this_center = this.center();
    let other_center = other.center();
    let vertical = overlap.y <= overlap.x;
    let horizontal = overlap.x <= overlap.y;

    if vertical && this_center.y <= other_center.y {
        Direction::Top
    } else if vertical && this_center.y >= other_center.y {
        Direction::Bottom
    } else if horizontal && this_center.x <= other_center.x {
        Direction::Right
    } else if horizontal && this_center.x >= other_center.x {
        Direction::Left
    } else {
        Direction::None
    }
}

/// The side `other` reports when `this` reports `side`.
#[must_use]
pub const fn opposite(side: Direction) -> Direction {
    match side {
        Direction::Top => Direction::Bottom,
        Direction::Bottom => Direction::Top,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
        Direction::None => Direction::None,
    }
}

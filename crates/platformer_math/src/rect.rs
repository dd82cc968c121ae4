//! Axis-aligned rectangles.
//!
//! [`Rect`] is the bounding box used by collision classification.
//! [`IntRect`] selects a frame out of a sprite sheet.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in world space.
///
/// `position` is the top-left corner. Width and height are expected to be
/// non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its left/top corner and its extents.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    /// Create a rectangle from a corner position and a size.
    #[must_use]
    pub const fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// The intersection point of the vertical and horizontal midlines.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Returns `true` if the two boxes intersect.
    ///
    /// Boxes whose edges merely touch count as intersecting; any positive gap
    /// on either axis does not.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Extents of the shared region on each axis, or `None` if the boxes do
    /// not intersect. Touching boxes yield a zero extent on the touching axis.
    #[must_use]
    pub fn overlap(&self, other: &Rect) -> Option<Vec2> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.right().min(other.right()) - self.left().max(other.left());
        let y = self.bottom().min(other.bottom()) - self.top().max(other.top());
        Some(Vec2::new(x, y))
    }

    /// Translate the rectangle by the given offset.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.position += offset;
        self
    }
}

/// An integer rectangle selecting a region of a sprite sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rectangle from its top-left and bottom-right corners.
    ///
    /// Sprite sheets are often annotated with both corners rather than a
    /// corner and a size; the extents are the absolute corner differences.
    #[must_use]
    pub const fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            width: (left - right).abs(),
            height: (top - bottom).abs(),
        }
    }

    /// Width and height as a vector.
    #[must_use]
    pub const fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

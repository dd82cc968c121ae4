//! The [`Base`] component: what an entity looks like and where it is.
//!
//! Base is the only component every entity has. Its presence is the
//! definition of "this entity exists".

use platformer_math::{IntRect, Rect, UVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Handle to a loaded visual asset, issued by the asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub u64);

/// A loaded visual asset: its handle and its full pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub size: UVec2,
}

/// Lifecycle state of an entity that can die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    Alive,
    Dead,
}

/// Visual placement, bounding box source, and asset handle of an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    /// The asset frames are cut from.
    pub asset: AssetId,
    /// World-space top-left corner.
    pub position: Vec2,
    /// The region of the asset currently displayed. Its size is also the
    /// size of the entity's bounding box.
    pub source: IntRect,
    /// `None` for entities that never die (blocks, scenery).
    pub lifecycle: Option<Lifecycle>,
}

impl Base {
    /// A base at the origin displaying `source` of `asset`.
    #[must_use]
    pub fn new(asset: AssetId, source: IntRect) -> Self {
        Self {
            asset,
            position: Vec2::ZERO,
            source,
            lifecycle: None,
        }
    }

    /// A base displaying the whole of `asset`.
    #[must_use]
    pub fn from_asset(asset: &Asset) -> Self {
        let size = asset.size.as_ivec2();
        Self::new(asset.id, IntRect::new(0, 0, size.x, size.y))
    }

    /// The world-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_position_size(self.position, self.source.size().as_vec2())
    }

    /// Returns `true` if the entity has been marked [`Lifecycle::Dead`].
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.lifecycle == Some(Lifecycle::Dead)
    }
}

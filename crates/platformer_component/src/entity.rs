//! Entity handles and their allocator.
//!
//! Handles are never recycled. Once removed, an entity stays inaccessible for
//! the rest of the run, so a stale handle held by content can only ever
//! observe "gone".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle of a game object. Carries no data; components give it meaning.
///
/// Ordering follows creation order, which is also the order the world scans
/// and updates entities in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out entity ids `1, 2, 3, ...` with no free-list.
#[derive(Debug)]
pub struct EntityAllocator {
    last: u64,
}

impl EntityAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    pub fn allocate(&mut self) -> Entity {
        self.last += 1;
        Entity(self.last)
    }

    /// Number of ids handed out, including ones since removed.
    #[must_use]
    pub const fn allocated(&self) -> u64 {
        self.last
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

//! Scratch storage: per-entity heterogeneous slots.
//!
//! Content behaviours keep small amounts of transient state here (a patrol
//! direction, a cooldown timer) instead of minting a new component kind for
//! every behaviour. Typed access lives in `platformer_system::scratch`.

use std::any::{Any, TypeId};
use std::fmt;

use crate::clock::Clock;

/// One type-erased slot.
///
/// The slot remembers the type it was created for even while empty, so typed
/// reads of an empty slot can still be checked.
pub struct Slot {
    pub value: Option<Box<dyn Any>>,
    pub type_id: TypeId,
    pub type_name: &'static str,
}

impl Slot {
    pub fn new<T: Any>(value: Option<T>) -> Self {
        Self {
            value: value.map(|v| Box::new(v) as Box<dyn Any>),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns `true` if the slot was created for `T`.
    #[must_use]
    pub fn holds<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// Ordered, index-addressed slots plus a lazily created clock.
#[derive(Default)]
pub struct Scratch {
    pub slots: Vec<Slot>,
    pub clock: Option<Clock>,
}

impl fmt::Debug for Scratch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scratch")
            .field(
                "slots",
                &self.slots.iter().map(|s| s.type_name).collect::<Vec<_>>(),
            )
            .field("clock", &self.clock)
            .finish()
    }
}

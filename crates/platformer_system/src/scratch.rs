//! Typed access to an entity's [`Scratch`] slots.
//!
//! Slots are addressed by the index [`add_any`] returned, or by "last" for
//! the most recently added one. Every slot remembers the type it was created
//! for; reading or writing it as anything else is an error rather than a
//! silent `None`.

use std::any::{Any, type_name};
use std::time::Duration;

use platformer_component::{Clock, Component, Entity, Scratch, Slot};

use crate::error::WorldError;
use crate::world::World;

fn missing(entity: Entity) -> WorldError {
    WorldError::MissingComponent {
        entity,
        component: Scratch::type_name(),
    }
}

fn slot<T: Any>(scratch: &Scratch, entity: Entity, index: usize) -> Result<&Slot, WorldError> {
    let slot = scratch.slots.get(index).ok_or(WorldError::ScratchIndex {
        entity,
        index,
        len: scratch.slots.len(),
    })?;
    check::<T>(slot, entity, index)?;
    Ok(slot)
}

fn slot_mut<T: Any>(
    scratch: &mut Scratch,
    entity: Entity,
    index: usize,
) -> Result<&mut Slot, WorldError> {
    let len = scratch.slots.len();
    let slot = scratch
        .slots
        .get_mut(index)
        .ok_or(WorldError::ScratchIndex { entity, index, len })?;
    check::<T>(slot, entity, index)?;
    Ok(slot)
}

fn check<T: Any>(slot: &Slot, entity: Entity, index: usize) -> Result<(), WorldError> {
    if slot.holds::<T>() {
        Ok(())
    } else {
        Err(WorldError::ScratchTypeMismatch {
            entity,
            index,
            expected: type_name::<T>(),
            found: slot.type_name,
        })
    }
}

fn last_index(world: &World, entity: Entity) -> Result<usize, WorldError> {
    len(world, entity)
        .checked_sub(1)
        .ok_or(WorldError::ScratchIndex {
            entity,
            index: 0,
            len: 0,
        })
}

/// Append a slot typed as `T`, returning its index.
///
/// # Errors
///
/// Returns [`WorldError::MissingComponent`] if the entity has no scratch
/// storage.
pub fn add_any<T: Any>(world: &mut World, id: Entity, value: Option<T>) -> Result<usize, WorldError> {
    let scratch = world.get_mut::<Scratch>(id).ok_or_else(|| missing(id))?;
    scratch.slots.push(Slot::new(value));
    Ok(scratch.slots.len() - 1)
}

/// Read slot `index` as a `T`. An empty slot reads as `Ok(None)`.
///
/// # Errors
///
/// Fails if the entity has no scratch storage, the index is out of range,
/// or the slot was created for another type.
pub fn get<T: Any>(world: &World, id: Entity, index: usize) -> Result<Option<&T>, WorldError> {
    let scratch = world.get::<Scratch>(id).ok_or_else(|| missing(id))?;
    let slot = slot::<T>(scratch, id, index)?;
    Ok(slot.value.as_ref().and_then(|v| v.downcast_ref::<T>()))
}

/// Mutable counterpart of [`get`].
///
/// # Errors
///
/// Same as [`get`].
pub fn get_mut<T: Any>(
    world: &mut World,
    id: Entity,
    index: usize,
) -> Result<Option<&mut T>, WorldError> {
    let scratch = world.get_mut::<Scratch>(id).ok_or_else(|| missing(id))?;
    let slot = slot_mut::<T>(scratch, id, index)?;
    Ok(slot.value.as_mut().and_then(|v| v.downcast_mut::<T>()))
}

/// Read the most recently added slot.
///
/// # Errors
///
/// Same as [`get`]; an entity with no slots reports an out-of-range index.
pub fn get_last<T: Any>(world: &World, id: Entity) -> Result<Option<&T>, WorldError> {
    let index = last_index(world, id)?;
    get(world, id, index)
}

/// Overwrite slot `index`. The slot keeps its type.
///
/// # Errors
///
/// Same as [`get`].
pub fn set<T: Any>(world: &mut World, id: Entity, index: usize, value: Option<T>) -> Result<(), WorldError> {
    let scratch = world.get_mut::<Scratch>(id).ok_or_else(|| missing(id))?;
    let slot = slot_mut::<T>(scratch, id, index)?;
    slot.value = value.map(|v| Box::new(v) as Box<dyn Any>);
    Ok(())
}

/// Overwrite the most recently added slot.
///
/// # Errors
///
/// Same as [`get_last`].
pub fn set_last<T: Any>(world: &mut World, id: Entity, value: Option<T>) -> Result<(), WorldError> {
    let index = last_index(world, id)?;
    set(world, id, index, value)
}

/// Number of slots; zero without scratch storage.
#[must_use]
pub fn len(world: &World, id: Entity) -> usize {
    world.get::<Scratch>(id).map_or(0, |s| s.slots.len())
}

/// The entity's scratch clock, started at the current tick on first use.
///
/// Returns `None` if the entity has no scratch storage.
pub fn clock(world: &mut World, id: Entity) -> Option<&mut Clock> {
    let now = world.now();
    let scratch = world.get_mut::<Scratch>(id)?;
    Some(scratch.clock.get_or_insert_with(|| Clock::started_at(now)))
}

/// Time on the scratch clock, creating it if needed.
pub fn elapsed(world: &mut World, id: Entity) -> Option<Duration> {
    let now = world.now();
    clock(world, id).map(|c| c.elapsed(now))
}

/// Restart the scratch clock, returning the time it had measured.
pub fn restart(world: &mut World, id: Entity) -> Option<Duration> {
    let now = world.now();
    clock(world, id).map(|c| c.restart(now))
}

#[cfg(test)]
mod tests {
    use platformer_math::Vec2;

    use super::*;
    use crate::testing;

    fn with_scratch(world: &mut World) -> Entity {
        let e = world.create(testing::BLOCK).unwrap();
        world.add_component::<Scratch>(e);
        e
    }

    #[test]
    fn test_add_and_read_slots() {
        let (mut world, _time) = testing::world();
        let e = with_scratch(&mut world);

        assert_eq!(add_any(&mut world, e, Some(3_u32)).unwrap(), 0);
        assert_eq!(add_any::<bool>(&mut world, e, None).unwrap(), 1);
        assert_eq!(len(&world, e), 2);

        assert_eq!(get::<u32>(&world, e, 0).unwrap(), Some(&3));
        assert_eq!(get::<bool>(&world, e, 1).unwrap(), None);
        assert_eq!(get_last::<bool>(&world, e).unwrap(), None);
    }

    #[test]
    fn test_set_and_set_last() {
        let (mut world, _time) = testing::world();
        let e = with_scratch(&mut world);
        add_any(&mut world, e, Some(1_i32)).unwrap();
        add_any::<String>(&mut world, e, None).unwrap();

        set(&mut world, e, 0, Some(7_i32)).unwrap();
        set_last(&mut world, e, Some("left".to_string())).unwrap();
        assert_eq!(get::<i32>(&world, e, 0).unwrap(), Some(&7));
        assert_eq!(get_last::<String>(&world, e).unwrap().map(String::as_str), Some("left"));

        *get_mut::<i32>(&mut world, e, 0).unwrap().unwrap() += 1;
        assert_eq!(get::<i32>(&world, e, 0).unwrap(), Some(&8));

        set::<i32>(&mut world, e, 0, None).unwrap();
        assert_eq!(get::<i32>(&world, e, 0).unwrap(), None);
    }

    #[test]
    fn test_type_mismatch() {
        let (mut world, _time) = testing::world();
        let e = with_scratch(&mut world);
        add_any(&mut world, e, Some(1_u8)).unwrap();

        let err = get::<u16>(&world, e, 0).unwrap_err();
        assert!(matches!(
            err,
            WorldError::ScratchTypeMismatch {
                index: 0,
                expected: "u16",
                found: "u8",
                ..
            }
        ));
        assert!(set(&mut world, e, 0, Some(false)).is_err());
        assert_eq!(get::<u8>(&world, e, 0).unwrap(), Some(&1));
    }

    #[test]
    fn test_out_of_range() {
        let (mut world, _time) = testing::world();
        let e = with_scratch(&mut world);
        assert!(matches!(
            get_last::<u8>(&world, e),
            Err(WorldError::ScratchIndex { len: 0, .. })
        ));
        add_any(&mut world, e, Some(1_u8)).unwrap();
        assert!(matches!(
            get::<u8>(&world, e, 4),
            Err(WorldError::ScratchIndex { index: 4, len: 1, .. })
        ));
    }

    #[test]
    fn test_missing_scratch_component() {
        let (mut world, _time) = testing::world();
        let e = testing::player(&mut world, Vec2::ZERO);
        assert!(matches!(
            add_any(&mut world, e, Some(1_u8)),
            Err(WorldError::MissingComponent { component: "Scratch", .. })
        ));
        assert_eq!(len(&world, e), 0);
        assert!(clock(&mut world, e).is_none());
    }

    #[test]
    fn test_clock_is_created_lazily_at_current_tick() {
        let (mut world, time) = testing::world();
        let e = with_scratch(&mut world);
        time.advance(Duration::from_millis(300));
        world.sample_time();
        assert!(world.get::<Scratch>(e).unwrap().clock.is_none());

        assert_eq!(elapsed(&mut world, e), Some(Duration::ZERO));
        time.advance(Duration::from_millis(120));
        world.sample_time();
        assert_eq!(elapsed(&mut world, e), Some(Duration::from_millis(120)));
        assert_eq!(restart(&mut world, e), Some(Duration::from_millis(120)));
        assert_eq!(elapsed(&mut world, e), Some(Duration::ZERO));
    }
}

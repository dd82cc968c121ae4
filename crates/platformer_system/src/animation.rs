//! Animation engine: per-entity frame sequencing.
//!
//! An entity's [`Animation`] moves through three states. It is *idle* until
//! the first [`play`] call, *playing* while frames advance, and *finished*
//! once the current frame set has wrapped around at least once.
//!
//! Frames are committed to the entity's [`Base`] source rect, so the
//! renderer never needs to look at the animation component. Once a first
//! frame has been committed, later commits keep the bottom edge in place: a
//! frame of another height grows or shrinks the entity upwards.

use std::time::Duration;

use platformer_component::{Animation, AnimationKey, Base, Clock, Entity, Maturity};
use platformer_math::IntRect;
use tracing::{trace, warn};

use crate::error::WorldError;
use crate::world::World;

/// Attach an empty [`Animation`] using the world's configured frame delay.
/// Its clock starts at the current tick.
///
/// Does nothing if the entity is not accessible.
pub fn attach(world: &mut World, id: Entity) {
    let animation = Animation {
        frame_delay: world.config().frame_delay(),
        clock: Clock::started_at(world.now()),
        ..Animation::default()
    };
    world.insert(id, animation);
}

/// Register (or replace) the frame set for `key`.
pub fn set_frames(world: &mut World, id: Entity, key: impl Into<AnimationKey>, frames: Vec<IntRect>) {
    if let Some(animation) = world.required_mut::<Animation>(id, "animation::set_frames") {
        animation.frames.insert(key.into(), frames);
    }
}

/// Register (or replace) a single-frame set for `key`.
pub fn set_frame(world: &mut World, id: Entity, key: impl Into<AnimationKey>, frame: IntRect) {
    set_frames(world, id, key, vec![frame]);
}

/// Append a frame to the set for `key`, creating the set if needed.
pub fn add_frame(world: &mut World, id: Entity, key: impl Into<AnimationKey>, frame: IntRect) {
    if let Some(animation) = world.required_mut::<Animation>(id, "animation::add_frame") {
        animation.frames.entry(key.into()).or_default().push(frame);
    }
}

/// Switch to the frame set for `key` and show its first frame.
///
/// Selecting the animation that is already current changes nothing, so
/// content may call this every tick. Selecting a key with no registered
/// frames is ignored (and reported in debug builds).
pub fn set_current_animation(world: &mut World, id: Entity, key: impl Into<AnimationKey>) {
    let key = key.into();
    let accessible = world.can_access(id);
    let store = world.store_mut();
    let (Some(animation), Some(base)) = (store.animations.get_mut(&id), store.bases.get_mut(&id))
    else {
        debug_assert!(
            !accessible,
            "animation::set_current_animation: {id} has no Animation component"
        );
        return;
    };

    if animation.current == Some(key) {
        return;
    }

    let Some(first) = animation.frames.get(&key).and_then(|frames| frames.first()) else {
        if cfg!(debug_assertions) {
            warn!(entity = %id, ?key, "ignoring switch to an undefined animation");
        }
        return;
    };

    let first = *first;
    if animation.current.is_some() {
        commit(base, first);
    } else {
        base.source = first;
    }
    animation.current = Some(key);
    animation.current_frame = 0;
    animation.started = false;
    animation.finished = false;
}

/// Show `frame`, keeping the bottom edge where it was.
fn commit(base: &mut Base, frame: IntRect) {
    let grown = frame.height - base.source.height;
    if grown != 0 {
        base.position.y -= grown as f32;
    }
    base.source = frame;
}

/// Re-select the current animation kind at another maturity tier.
///
/// Does nothing if no animation is current or the tier has no frame set for
/// that kind.
pub fn set_tier(world: &mut World, id: Entity, tier: Maturity) {
    let Some(current) = world.get::<Animation>(id).and_then(|a| a.current) else {
        return;
    };
    let key = current.at_tier(tier);
    if world
        .get::<Animation>(id)
        .is_some_and(|a| a.frames.contains_key(&key))
    {
        set_current_animation(world, id, key);
    }
}

/// Minimum time between two frame advances.
pub fn set_frame_delay(world: &mut World, id: Entity, delay: Duration) {
    if let Some(animation) = world.required_mut::<Animation>(id, "animation::set_frame_delay") {
        animation.frame_delay = delay;
    }
}

/// Freeze after the sequence wraps instead of looping.
pub fn set_stop_when_finished(world: &mut World, id: Entity, stop: bool) {
    if let Some(animation) =
        world.required_mut::<Animation>(id, "animation::set_stop_when_finished")
    {
        animation.stop_when_finished = stop;
    }
}

/// Allow or suspend [`play`].
pub fn set_allow_play(world: &mut World, id: Entity, allow: bool) {
    if let Some(animation) = world.required_mut::<Animation>(id, "animation::set_allow_play") {
        animation.allow_play = allow;
    }
}

/// Advance the animation if its frame delay has elapsed.
///
/// Call once per tick. An advance first wraps the index to 0 (marking the
/// animation finished) if the last frame was already shown, then commits the
/// frame at the index and moves past it. With `stop_when_finished` set the
/// wrapping advance commits nothing, so the last frame stays on screen for a
/// full frame delay before the animation reports finished.
pub fn play(world: &mut World, id: Entity) {
    let now = world.now();
    let accessible = world.can_access(id);
    let store = world.store_mut();
    let (Some(animation), Some(base)) = (store.animations.get_mut(&id), store.bases.get_mut(&id))
    else {
        debug_assert!(!accessible, "animation::play: {id} has no Animation component");
        return;
    };

    if !animation.allow_play {
        return;
    }
    animation.started = true;

    if animation.clock.elapsed(now) < animation.frame_delay {
        return;
    }

    let Some(key) = animation.current else {
        return;
    };
    let Some(frames) = animation.frames.get(&key) else {
        return;
    };

    if animation.current_frame >= frames.len() {
        animation.current_frame = 0;
        animation.finished = true;
    }
    if animation.finished && animation.stop_when_finished {
        return;
    }
    let Some(&frame) = frames.get(animation.current_frame) else {
        return;
    };

    commit(base, frame);
    animation.current_frame += 1;
    animation.clock.restart(now);

    trace!(entity = %id, frame = animation.current_frame, "animation advanced");
}

#[must_use]
pub fn is_finished(world: &World, id: Entity) -> bool {
    world.get::<Animation>(id).is_some_and(|a| a.finished)
}

#[must_use]
pub fn is_started(world: &World, id: Entity) -> bool {
    world.get::<Animation>(id).is_some_and(|a| a.started)
}

#[must_use]
pub fn current_animation(world: &World, id: Entity) -> Option<AnimationKey> {
    world.get::<Animation>(id).and_then(|a| a.current)
}

#[must_use]
pub fn current_frame(world: &World, id: Entity) -> Option<usize> {
    world.get::<Animation>(id).map(|a| a.current_frame)
}

/// The registered frames for `key`.
///
/// # Errors
///
/// Returns [`WorldError::MissingComponent`] if the entity has no animation,
/// or [`WorldError::UndefinedAnimation`] if `key` was never registered.
pub fn frames(world: &World, id: Entity, key: impl Into<AnimationKey>) -> Result<&[IntRect], WorldError> {
    let key = key.into();
    world
        .try_get::<Animation>(id)?
        .frames
        .get(&key)
        .map(Vec::as_slice)
        .ok_or(WorldError::UndefinedAnimation { entity: id, key })
}

/// The rect currently shown by `id`.
#[must_use]
pub fn displayed_frame(world: &World, id: Entity) -> Option<IntRect> {
    world.get::<Base>(id).map(|b| b.source)
}

#[cfg(test)]
mod tests {
    use platformer_component::AnimationKind;
    use platformer_math::Vec2;

    use super::*;
    use crate::testing;
    use crate::time::ManualTime;

    const DELAY: Duration = Duration::from_millis(100);

    fn frame(i: i32) -> IntRect {
        IntRect::new(i * 16, 0, 16, 16)
    }

    /// An entity with a three-frame walk and a one-frame dead animation.
    fn animated(world: &mut World) -> Entity {
        let e = world.create(testing::GOOMBA).unwrap();
        world.add_component::<Animation>(e);
        set_frames(world, e, AnimationKind::Walk, vec![frame(0), frame(1), frame(2)]);
        set_frame(world, e, AnimationKind::Dead, frame(9));
        set_frame_delay(world, e, DELAY);
        set_current_animation(world, e, AnimationKind::Walk);
        e
    }

    fn tick(world: &mut World, time: &ManualTime, e: Entity) {
        time.advance(DELAY);
        world.sample_time();
        play(world, e);
    }

    #[test]
    fn test_set_current_animation_commits_first_frame() {
        let (mut world, _time) = testing::world();
        let e = animated(&mut world);
        assert_eq!(displayed_frame(&world, e), Some(frame(0)));
        assert_eq!(current_animation(&world, e), Some(AnimationKind::Walk.into()));
        assert!(!is_started(&world, e));
    }

    #[test]
    fn test_play_waits_for_frame_delay() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);
        // Restart the clock at t=0 by committing one frame.
        time.advance(DELAY);
        world.sample_time();
        play(&mut world, e);
        assert_eq!(current_frame(&world, e), Some(1));

        time.advance(DELAY / 2);
        world.sample_time();
        play(&mut world, e);
        assert!(is_started(&world, e));
        assert_eq!(current_frame(&world, e), Some(1));
    }

    #[test]
    fn test_wraps_and_finishes_on_advance_after_last_frame() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);

        for expected in [1, 2, 3] {
            tick(&mut world, &time, e);
            assert_eq!(current_frame(&world, e), Some(expected));
            assert!(!is_finished(&world, e));
        }
        assert_eq!(displayed_frame(&world, e), Some(frame(2)));

        tick(&mut world, &time, e);
        assert!(is_finished(&world, e));
        assert_eq!(displayed_frame(&world, e), Some(frame(0)));
        assert_eq!(current_frame(&world, e), Some(1));
    }

    #[test]
    fn test_committed_frame_always_in_range() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);
        let walk = [frame(0), frame(1), frame(2)];
        for _ in 0..20 {
            tick(&mut world, &time, e);
            let anim = world.get::<Animation>(e).unwrap();
            assert!((1..=anim.frame_count()).contains(&anim.current_frame));
            assert_eq!(
                displayed_frame(&world, e),
                Some(walk[anim.current_frame - 1])
            );
        }
    }

    #[test]
    fn test_looping_keeps_cycling() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);
        for _ in 0..4 {
            tick(&mut world, &time, e);
        }
        assert!(is_finished(&world, e));
        assert_eq!(displayed_frame(&world, e), Some(frame(0)));
    }

    #[test]
    fn test_stop_when_finished_freezes_display() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);
        set_stop_when_finished(&mut world, e, true);
        for _ in 0..3 {
            tick(&mut world, &time, e);
        }
        assert!(!is_finished(&world, e));
        assert_eq!(displayed_frame(&world, e), Some(frame(2)));

        tick(&mut world, &time, e);
        assert!(is_finished(&world, e));
        for _ in 0..5 {
            tick(&mut world, &time, e);
        }
        assert_eq!(displayed_frame(&world, e), Some(frame(2)));
        assert_eq!(current_frame(&world, e), Some(0));
    }

    #[test]
    fn test_allow_play_false_suspends_everything() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);
        set_allow_play(&mut world, e, false);
        tick(&mut world, &time, e);
        assert!(!is_started(&world, e));
        assert_eq!(current_frame(&world, e), Some(0));

        set_allow_play(&mut world, e, true);
        tick(&mut world, &time, e);
        assert!(is_started(&world, e));
        assert_eq!(current_frame(&world, e), Some(1));
    }

    #[test]
    fn test_same_key_preserves_state() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);
        tick(&mut world, &time, e);
        let before = world.get::<Animation>(e).unwrap().clone();

        set_current_animation(&mut world, e, AnimationKind::Walk);
        let after = world.get::<Animation>(e).unwrap();
        assert_eq!(after.current_frame, before.current_frame);
        assert_eq!(after.clock, before.clock);
        assert_eq!(after.started, before.started);
        assert_eq!(displayed_frame(&world, e), Some(frame(0)));
    }

    #[test]
    fn test_new_key_resets_started_and_finished() {
        let (mut world, time) = testing::world();
        let e = animated(&mut world);
        for _ in 0..4 {
            tick(&mut world, &time, e);
        }
        assert!(is_started(&world, e));
        assert!(is_finished(&world, e));

        set_current_animation(&mut world, e, AnimationKind::Dead);
        assert!(!is_started(&world, e));
        assert!(!is_finished(&world, e));
        assert_eq!(current_frame(&world, e), Some(0));
        assert_eq!(displayed_frame(&world, e), Some(frame(9)));
    }

    #[test]
    fn test_undefined_key_is_ignored() {
        let (mut world, _time) = testing::world();
        let e = animated(&mut world);
        set_current_animation(&mut world, e, AnimationKind::RunLeft);
        assert_eq!(current_animation(&world, e), Some(AnimationKind::Walk.into()));
        assert_eq!(displayed_frame(&world, e), Some(frame(0)));
    }

    #[test]
    fn test_frames_accessor() {
        let (mut world, _time) = testing::world();
        let e = animated(&mut world);
        assert_eq!(frames(&world, e, AnimationKind::Walk).unwrap().len(), 3);
        assert!(matches!(
            frames(&world, e, AnimationKind::Bump),
            Err(WorldError::UndefinedAnimation { .. })
        ));

        let plain = world.create(testing::BLOCK).unwrap();
        assert!(matches!(
            frames(&world, plain, AnimationKind::Walk),
            Err(WorldError::MissingComponent { .. })
        ));
    }

    #[test]
    fn test_attach_uses_configured_delay() {
        let (world, _time) = testing::world();
        let mut world = world.with_config(
            crate::config::WorldConfig::default().with_frame_delay(Duration::from_millis(40)),
        );
        let e = world.create(testing::COIN).unwrap();
        attach(&mut world, e);
        assert_eq!(
            world.get::<Animation>(e).unwrap().frame_delay,
            Duration::from_millis(40)
        );
    }

    #[test]
    fn test_attach_starts_clock_at_current_tick() {
        let (mut world, time) = testing::world();
        time.advance(Duration::from_secs(3));
        world.sample_time();
        let e = world.create(testing::COIN).unwrap();
        attach(&mut world, e);
        set_frames(&mut world, e, AnimationKind::Idle, vec![frame(0), frame(1)]);
        set_current_animation(&mut world, e, AnimationKind::Idle);

        play(&mut world, e);
        assert_eq!(current_frame(&world, e), Some(0));

        time.advance(world.config().frame_delay());
        world.sample_time();
        play(&mut world, e);
        assert_eq!(current_frame(&world, e), Some(1));
    }

    #[test]
    fn test_switching_keeps_bottom_edge() {
        let (mut world, _time) = testing::world();
        let e = animated(&mut world);
        world.get_mut::<Base>(e).unwrap().position = Vec2::new(5.0, 40.0);
        set_frame(&mut world, e, AnimationKind::Bump, IntRect::new(0, 0, 16, 32));

        set_current_animation(&mut world, e, AnimationKind::Bump);
        let base = world.get::<Base>(e).unwrap();
        assert_eq!(base.position, Vec2::new(5.0, 24.0));
        assert_eq!(base.bounds().bottom(), 56.0);

        set_current_animation(&mut world, e, AnimationKind::Walk);
        assert_eq!(world.get::<Base>(e).unwrap().position, Vec2::new(5.0, 40.0));
    }

    #[test]
    fn test_first_frame_replaces_full_asset_in_place() {
        let (mut world, _time) = testing::world();
        let e = world.create(testing::GOOMBA).unwrap();
        world.get_mut::<Base>(e).unwrap().position = Vec2::new(0.0, 30.0);
        world.add_component::<Animation>(e);
        set_frame(&mut world, e, AnimationKind::Idle, IntRect::new(0, 0, 8, 4));
        set_current_animation(&mut world, e, AnimationKind::Idle);
        assert_eq!(world.get::<Base>(e).unwrap().position, Vec2::new(0.0, 30.0));
    }

    #[test]
    fn test_add_frame_appends() {
        let (mut world, _time) = testing::world();
        let e = animated(&mut world);
        add_frame(&mut world, e, AnimationKind::Walk, frame(3));
        add_frame(&mut world, e, AnimationKind::Bump, frame(4));
        assert_eq!(frames(&world, e, AnimationKind::Walk).unwrap().len(), 4);
        assert_eq!(frames(&world, e, AnimationKind::Bump).unwrap(), &[frame(4)]);
    }

    #[test]
    fn test_set_tier_switches_frame_set() {
        let (mut world, _time) = testing::world();
        let e = testing::player(&mut world, Vec2::ZERO);
        let child = AnimationKey::new(AnimationKind::IdleRight);
        assert_eq!(current_animation(&world, e), Some(child));

        set_tier(&mut world, e, Maturity::Adult);
        assert_eq!(current_animation(&world, e), Some(child.at_tier(Maturity::Adult)));

        // No frames registered for the fire tier: stays put.
        set_tier(&mut world, e, Maturity::Fire);
        assert_eq!(current_animation(&world, e), Some(child.at_tier(Maturity::Adult)));
    }

    #[test]
    fn test_operations_on_removed_entity_are_no_ops() {
        let (mut world, _time) = testing::world();
        let e = animated(&mut world);
        world.remove(e);
        play(&mut world, e);
        set_current_animation(&mut world, e, AnimationKind::Dead);
        set_allow_play(&mut world, e, true);
        assert!(!is_finished(&world, e));
        assert_eq!(current_animation(&world, e), None);
    }
}

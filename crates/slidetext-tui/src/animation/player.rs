//! L3 Molecular Layer: Motion player
//!
//! Executes the linear motions scheduled by the marquee core. Each instance
//! carries at most one motion anchored at the `Instant` it was scheduled;
//! offsets are sampled by the renderer once per frame.

use std::collections::HashMap;
use std::time::Instant;

use slidetext_core::marquee::{Instance, Motion};

/// Motion scheduled on one instance
#[derive(Debug, Clone, Copy)]
struct ActiveMotion {
    /// When the motion was handed to the player
    start: Instant,
    motion: Motion,
}

impl ActiveMotion {
    #[inline]
    fn elapsed(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.start).as_secs_f64()
    }
}

/// Frame-driven executor for marquee motions
#[derive(Debug, Clone, Default)]
pub struct MotionPlayer {
    /// Offsets held without animation
    resting: HashMap<Instance, f64>,
    /// Motions in flight
    active: HashMap<Instance, ActiveMotion>,
}

impl MotionPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `instance` at `offset`
    pub fn hold(&mut self, instance: Instance, offset: f64) {
        self.resting.insert(instance, offset);
    }

    /// Start `motion` on `instance`, replacing any motion already there
    pub fn play(&mut self, instance: Instance, motion: Motion, start: Instant) {
        self.active.insert(instance, ActiveMotion { start, motion });
    }

    /// Remove the motion on `instance` and reset it to offset zero
    pub fn cancel(&mut self, instance: Instance) {
        self.active.remove(&instance);
        self.resting.remove(&instance);
    }

    /// Cancel everything
    pub fn reset(&mut self) {
        self.active.clear();
        self.resting.clear();
    }

    /// Current horizontal offset of `instance`
    pub fn offset_at(&self, instance: Instance, now: Instant) -> f64 {
        match self.active.get(&instance) {
            Some(active) => active.motion.offset_at(active.elapsed(now)),
            None => self.resting.get(&instance).copied().unwrap_or(0.0),
        }
    }

    /// When the motion on `instance` was scheduled
    pub fn started_at(&self, instance: Instance) -> Option<Instant> {
        self.active.get(&instance).map(|a| a.start)
    }

    /// Check if any motion has frames left to show
    /// Use this to determine if we need high frame rate
    pub fn needs_update(&self, now: Instant) -> bool {
        self.active
            .values()
            .any(|a| !a.motion.is_finished(a.elapsed(now)))
    }

    #[inline]
    pub fn motion_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn one_shot() -> Motion {
        Motion {
            from: 0.0,
            to: -20.0,
            duration: 2.0,
            delay: 1.0,
            period: None,
        }
    }

    #[test]
    fn test_idle_instances_rest_at_zero() {
        let player = MotionPlayer::new();
        assert_eq!(player.offset_at(Instance::Primary, Instant::now()), 0.0);
        assert!(!player.needs_update(Instant::now()));
    }

    #[test]
    fn test_motion_is_sampled_from_its_anchor() {
        let mut player = MotionPlayer::new();
        let start = Instant::now();
        player.play(Instance::Primary, one_shot(), start);

        assert_eq!(player.offset_at(Instance::Primary, start), 0.0);
        let mid = start + Duration::from_secs(2);
        assert!((player.offset_at(Instance::Primary, mid) + 10.0).abs() < 1e-9);
        assert!(player.needs_update(mid));

        let end = start + Duration::from_secs(5);
        assert_eq!(player.offset_at(Instance::Primary, end), -20.0);
        assert!(!player.needs_update(end));
    }

    #[test]
    fn test_hold_and_cancel() {
        let mut player = MotionPlayer::new();
        let now = Instant::now();
        player.hold(Instance::Copy(0), 40.0);
        assert_eq!(player.offset_at(Instance::Copy(0), now), 40.0);

        player.play(Instance::Copy(0), one_shot(), now);
        player.cancel(Instance::Copy(0));
        assert_eq!(player.offset_at(Instance::Copy(0), now), 0.0);
        assert_eq!(player.motion_count(), 0);
        assert!(player.started_at(Instance::Copy(0)).is_none());
    }

    #[test]
    fn test_repeating_motion_always_needs_frames() {
        let mut player = MotionPlayer::new();
        let now = Instant::now();
        player.play(
            Instance::Copy(1),
            Motion {
                period: Some(6.0),
                ..one_shot()
            },
            now,
        );
        assert!(player.needs_update(now + Duration::from_secs(3600)));
        player.reset();
        assert!(!player.needs_update(now));
    }
}

//! Inactivity detection
//!
//! The host reports every user interaction (pointer moves, key presses,
//! scrolls) as activity; after `timeout_ms` without any, the idle flag goes
//! up. At most one timeout timer is armed at a time - each activity cancels
//! and re-arms it.

use tactile_core::{State, TimerId, Timers};

/// Flags the user as idle after a period without activity
pub struct IdleDetector {
    timeout_ms: u64,
    idle: State<bool>,
    timer: Option<TimerId>,
}

impl IdleDetector {
    /// Create the detector and arm the first timeout
    pub fn new(timeout_ms: u64, timers: &mut Timers) -> Self {
        let mut detector = Self {
            timeout_ms,
            idle: State::new(false),
            timer: None,
        };
        detector.activity(timers);
        detector
    }

    /// Report user activity: clears the idle flag and restarts the timeout
    pub fn activity(&mut self, timers: &mut Timers) {
        if self.idle.get() {
            self.idle.set(false);
        }
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
        }
        self.timer = Some(timers.schedule(self.timeout_ms));
    }

    /// Route a fired timer id; returns true if this detector consumed it
    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.timer = None;
        self.idle.set(true);
        tracing::debug!(timeout_ms = self.timeout_ms, "user went idle");
        true
    }

    pub fn is_idle(&self) -> bool {
        self.idle.get()
    }

    pub fn state(&self) -> State<bool> {
        self.idle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(timers: &mut Timers, detector: &mut IdleDetector, now: u64) {
        for id in timers.advance(now) {
            detector.timer_fired(id);
        }
    }

    #[test]
    fn test_goes_idle_after_timeout() {
        let mut timers = Timers::new();
        let mut detector = IdleDetector::new(1000, &mut timers);

        pump(&mut timers, &mut detector, 999);
        assert!(!detector.is_idle());
        pump(&mut timers, &mut detector, 1000);
        assert!(detector.is_idle());
    }

    #[test]
    fn test_activity_resets_timeout() {
        let mut timers = Timers::new();
        let mut detector = IdleDetector::new(1000, &mut timers);

        pump(&mut timers, &mut detector, 900);
        detector.activity(&mut timers);

        // Old deadline passes without firing
        pump(&mut timers, &mut detector, 1100);
        assert!(!detector.is_idle());

        pump(&mut timers, &mut detector, 1900);
        assert!(detector.is_idle());
    }

    #[test]
    fn test_activity_clears_idle_flag() {
        let mut timers = Timers::new();
        let mut detector = IdleDetector::new(100, &mut timers);

        pump(&mut timers, &mut detector, 100);
        assert!(detector.is_idle());

        detector.activity(&mut timers);
        assert!(!detector.is_idle());

        pump(&mut timers, &mut detector, 200);
        assert!(detector.is_idle());
    }
}

//! Viewport width and mobile-breakpoint detection
//!
//! Resize events arrive in bursts, so the width runs through a 100 ms
//! debounce before the mobile classification updates.

use tactile_core::{State, TimerId, Timers};

use crate::debounce::Debounced;

const RESIZE_DEBOUNCE_MS: u64 = 100;
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Debounced viewport width with a mobile breakpoint
pub struct Viewport {
    width: Debounced<f32>,
    breakpoint: f32,
}

impl Viewport {
    pub fn new(initial_width: f32) -> Self {
        Self {
            width: Debounced::new(initial_width, RESIZE_DEBOUNCE_MS),
            breakpoint: MOBILE_BREAKPOINT,
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: f32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn on_resize(&mut self, timers: &mut Timers, width: f32) {
        self.width.set(timers, width);
    }

    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        self.width.timer_fired(id)
    }

    /// Settled viewport width
    pub fn width(&self) -> f32 {
        self.width.get()
    }

    pub fn width_state(&self) -> State<f32> {
        self.width.state()
    }

    pub fn is_mobile(&self) -> bool {
        self.width.get() < self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(timers: &mut Timers, viewport: &mut Viewport, now: u64) {
        for id in timers.advance(now) {
            viewport.timer_fired(id);
        }
    }

    #[test]
    fn test_resize_burst_settles_once() {
        let mut timers = Timers::new();
        let mut viewport = Viewport::new(1024.0);
        assert!(!viewport.is_mobile());

        viewport.on_resize(&mut timers, 900.0);
        viewport.on_resize(&mut timers, 700.0);
        viewport.on_resize(&mut timers, 500.0);
        assert_eq!(viewport.width(), 1024.0);

        pump(&mut timers, &mut viewport, 100);
        assert_eq!(viewport.width(), 500.0);
        assert!(viewport.is_mobile());
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let mut viewport = Viewport::new(MOBILE_BREAKPOINT);
        assert!(!viewport.is_mobile());

        let mut timers = Timers::new();
        viewport.on_resize(&mut timers, MOBILE_BREAKPOINT - 1.0);
        pump(&mut timers, &mut viewport, 100);
        assert!(viewport.is_mobile());
    }

    #[test]
    fn test_custom_breakpoint() {
        let viewport = Viewport::new(900.0).with_breakpoint(1000.0);
        assert!(viewport.is_mobile());
    }
}

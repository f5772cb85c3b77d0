//! Frame-throttled scroll position
//!
//! Scroll events can arrive far faster than a display refresh. The tracker
//! only latches the newest offset on each scroll event; the host commits it
//! once per frame with [`ScrollTracker::on_frame`], so subscribers see at
//! most one update per frame.

use tactile_core::State;

/// Tracks the vertical scroll offset, throttled to the frame rate
pub struct ScrollTracker {
    position: State<f32>,
    pending: Option<f32>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            position: State::new(0.0),
            pending: None,
        }
    }

    /// Latch the newest scroll offset; cheap, called per scroll event
    pub fn on_scroll(&mut self, offset: f32) {
        self.pending = Some(offset);
    }

    /// Commit the latched offset, if any; called once per frame
    pub fn on_frame(&mut self) {
        if let Some(offset) = self.pending.take() {
            self.position.set(offset);
        }
    }

    pub fn position(&self) -> f32 {
        self.position.get()
    }

    pub fn state(&self) -> State<f32> {
        self.position.clone()
    }
}

//! Debounced values
//!
//! A debounced cell delays committing writes until the input has been quiet
//! for a configured window. Rapid writes collapse to the last one.

use tactile_core::{State, TimerId, Timers};

/// A value that settles only after `delay_ms` of quiet
pub struct Debounced<T: Clone> {
    settled: State<T>,
    pending: Option<T>,
    delay_ms: u64,
    timer: Option<TimerId>,
}

impl<T: Clone> Debounced<T> {
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            settled: State::new(initial),
            pending: None,
            delay_ms,
            timer: None,
        }
    }

    /// Stage a new value. Any previously staged value is discarded and the
    /// quiet window restarts.
    pub fn set(&mut self, timers: &mut Timers, value: T) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
        }
        self.pending = Some(value);
        self.timer = Some(timers.schedule(self.delay_ms));
    }

    /// Route a fired timer here. Returns true if the timer belonged to this
    /// cell and the staged value was committed.
    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.timer = None;
        if let Some(value) = self.pending.take() {
            self.settled.set(value);
        }
        true
    }

    /// The last settled value
    pub fn get(&self) -> T {
        self.settled.get()
    }

    pub fn state(&self) -> State<T> {
        self.settled.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }
}

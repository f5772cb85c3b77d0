//! Hover detection

use tactile_core::State;

/// Tracks whether the pointer is over an element
///
/// The host wires the element's enter/leave events; consumers read or
/// subscribe to the [`State<bool>`].
pub struct Hover {
    hovered: State<bool>,
}

impl Default for Hover {
    fn default() -> Self {
        Self::new()
    }
}

impl Hover {
    pub fn new() -> Self {
        Self {
            hovered: State::new(false),
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered.set(true);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered.set(false);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    /// The underlying reactive cell, for subscriptions
    pub fn state(&self) -> State<bool> {
        self.hovered.clone()
    }
}

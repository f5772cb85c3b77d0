//! Mouse position tracking
//!
//! Global cursor position, plus element-relative coordinates when an element
//! rect is attached.

use serde::{Deserialize, Serialize};
use tactile_core::{Rect, State};

use crate::event::PointerEvent;

/// Snapshot of the cursor position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MousePosition {
    /// Global X in window coordinates
    pub x: f32,
    /// Global Y in window coordinates
    pub y: f32,
    /// Cursor X relative to the attached element, if any
    pub element_x: Option<f32>,
    /// Cursor Y relative to the attached element, if any
    pub element_y: Option<f32>,
    /// Attached element's own X position
    pub element_position_x: Option<f32>,
    /// Attached element's own Y position
    pub element_position_y: Option<f32>,
}

/// Tracks the cursor through mouse-move events
pub struct MouseTracker {
    position: State<MousePosition>,
    element: Option<Rect>,
}

impl Default for MouseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseTracker {
    pub fn new() -> Self {
        Self {
            position: State::new(MousePosition::default()),
            element: None,
        }
    }

    /// Attach an element rect; subsequent snapshots include relative fields
    pub fn attach_element(&mut self, bounds: Rect) {
        self.element = Some(bounds);
    }

    pub fn detach_element(&mut self) {
        self.element = None;
    }

    pub fn mouse_move(&mut self, event: &PointerEvent) {
        let mut snapshot = MousePosition {
            x: event.x,
            y: event.y,
            ..Default::default()
        };
        if let Some(bounds) = self.element {
            snapshot.element_position_x = Some(bounds.x);
            snapshot.element_position_y = Some(bounds.y);
            snapshot.element_x = Some(event.x - bounds.x);
            snapshot.element_y = Some(event.y - bounds.y);
        }
        self.position.set(snapshot);
    }

    pub fn position(&self) -> MousePosition {
        self.position.get()
    }

    pub fn state(&self) -> State<MousePosition> {
        self.position.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_only() {
        let mut tracker = MouseTracker::new();
        tracker.mouse_move(&PointerEvent::mouse(12.0, 34.0, 0));

        let pos = tracker.position();
        assert_eq!((pos.x, pos.y), (12.0, 34.0));
        assert_eq!(pos.element_x, None);
        assert_eq!(pos.element_position_x, None);
    }

    #[test]
    fn test_element_relative() {
        let mut tracker = MouseTracker::new();
        tracker.attach_element(Rect::new(100.0, 50.0, 300.0, 300.0));
        tracker.mouse_move(&PointerEvent::mouse(150.0, 80.0, 0));

        let pos = tracker.position();
        assert_eq!(pos.element_x, Some(50.0));
        assert_eq!(pos.element_y, Some(30.0));
        assert_eq!(pos.element_position_x, Some(100.0));
        assert_eq!(pos.element_position_y, Some(50.0));

        tracker.detach_element();
        tracker.mouse_move(&PointerEvent::mouse(150.0, 80.0, 16));
        assert_eq!(tracker.position().element_x, None);
    }
}

//! Click-outside detection
//!
//! Dismissal helper for modals and popovers: any pointer-down outside the
//! watched element's bounds invokes the callback. The host feeds it every
//! pointer-down it sees, not just ones targeting the element.

use tactile_core::Rect;

use crate::event::PointerEvent;

type OutsideCallback = Box<dyn FnMut(&PointerEvent)>;

/// Invokes a callback on pointer-down outside a rectangle
pub struct ClickOutside {
    bounds: Rect,
    callback: OutsideCallback,
}

impl ClickOutside {
    pub fn new<F>(bounds: Rect, callback: F) -> Self
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        Self {
            bounds,
            callback: Box::new(callback),
        }
    }

    /// Update the watched bounds after a relayout
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Feed a pointer-down event; fires the callback when it lands outside
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if !self.bounds.contains(event.position()) {
            (self.callback)(event);
        }
    }
}

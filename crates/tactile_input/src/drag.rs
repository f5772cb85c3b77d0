//! Mouse-driven drag tracking
//!
//! Tracks the absolute position of an element while the user drags it: a
//! mouse-down inside the element grabs it (remembering the offset between
//! the cursor and the element origin), moves reposition it, mouse-up
//! releases it.

use tactile_core::{Point, Rect, State};

use crate::event::PointerEvent;

/// Tracks an element's position through a mouse drag
pub struct DragTracker {
    bounds: Rect,
    position: State<Point>,
    dragging: State<bool>,
    /// Cursor offset from the element origin at grab time
    grab_offset: Option<Point>,
}

impl DragTracker {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            position: State::new(bounds.origin()),
            dragging: State::new(false),
            grab_offset: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.get()
    }

    /// Current element origin
    pub fn position(&self) -> Point {
        self.position.get()
    }

    /// Reactive cell with the element origin, for subscriptions
    pub fn position_state(&self) -> State<Point> {
        self.position.clone()
    }

    pub fn dragging_state(&self) -> State<bool> {
        self.dragging.clone()
    }

    /// Grab the element if the press landed inside it
    pub fn mouse_down(&mut self, event: &PointerEvent) {
        let cursor = event.position();
        if self.bounds.contains(cursor) {
            self.grab_offset = Some(Point::new(cursor.x - self.bounds.x, cursor.y - self.bounds.y));
            self.dragging.set(true);
        }
    }

    /// Reposition the element while dragging
    pub fn mouse_move(&mut self, event: &PointerEvent) {
        let Some(offset) = self.grab_offset else {
            return;
        };
        let cursor = event.position();
        self.bounds.x = cursor.x - offset.x;
        self.bounds.y = cursor.y - offset.y;
        self.position.set(self.bounds.origin());
    }

    /// Release the element
    pub fn mouse_up(&mut self) {
        if self.grab_offset.take().is_some() {
            self.dragging.set(false);
        }
    }
}

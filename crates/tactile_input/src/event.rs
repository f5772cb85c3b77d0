//! Pointer event types
//!
//! A flattened event shape shared by mouse and touch input. Hosts translate
//! their platform events (winit, SDL, a test harness) into [`PointerEvent`]s
//! and feed them to the hooks; the hooks never talk to a windowing layer
//! directly.

use serde::{Deserialize, Serialize};
use tactile_core::Point;
use thiserror::Error;

/// Input-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Event carried NaN or infinite coordinates
    #[error("pointer event has non-finite position ({x}, {y})")]
    NonFinitePosition { x: f32, y: f32 },
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Back side button
    Back,
    /// Forward side button
    Forward,
    Other(u16),
}

/// Which device family produced a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse(MouseButton),
    Touch {
        /// Unique identifier for this touch
        id: u64,
    },
}

/// A pointer event (mouse or touch) in window coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// X position in window coordinates
    pub x: f32,
    /// Y position in window coordinates
    pub y: f32,
    /// Wall-clock milliseconds; must share the timeline the host pumps
    /// `Timers` with
    pub timestamp: u64,
    /// Set when a hook claimed the event's platform default handling
    pub default_prevented: bool,
}

impl PointerEvent {
    /// Left-button mouse event
    pub fn mouse(x: f32, y: f32, timestamp: u64) -> Self {
        Self {
            kind: PointerKind::Mouse(MouseButton::Left),
            x,
            y,
            timestamp,
            default_prevented: false,
        }
    }

    /// Touch event for a given touch id
    pub fn touch(id: u64, x: f32, y: f32, timestamp: u64) -> Self {
        Self {
            kind: PointerKind::Touch { id },
            x,
            y,
            timestamp,
            default_prevented: false,
        }
    }

    /// Position as a point, without validation
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Position, rejecting NaN/infinite coordinates with a descriptive error
    pub fn position_checked(&self) -> Result<Point> {
        let position = self.position();
        if !position.is_finite() {
            return Err(InputError::NonFinitePosition {
                x: self.x,
                y: self.y,
            });
        }
        Ok(position)
    }

    /// Mark the event as consumed for platform default handling
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_checked_accepts_finite() {
        let event = PointerEvent::mouse(3.0, 4.0, 0);
        assert_eq!(event.position_checked(), Ok(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_position_checked_rejects_nan() {
        let event = PointerEvent::mouse(f32::NAN, 4.0, 0);
        assert!(matches!(
            event.position_checked(),
            Err(InputError::NonFinitePosition { .. })
        ));
    }

    #[test]
    fn test_position_checked_rejects_infinite() {
        let event = PointerEvent::touch(1, 0.0, f32::NEG_INFINITY, 0);
        assert!(event.position_checked().is_err());
    }

    #[test]
    fn test_prevent_default() {
        let mut event = PointerEvent::mouse(0.0, 0.0, 0);
        assert!(!event.default_prevented);
        event.prevent_default();
        assert!(event.default_prevented);
    }
}

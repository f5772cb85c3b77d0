//! Pointer input recognition: press gestures, hover, drag, and related
//! interaction primitives.
//!
//! The centerpiece is [`LongPressRecognizer`], a small state machine that
//! distinguishes taps from held presses. Hosts feed it raw
//! [`PointerEvent`]s and pump a [`tactile_core::Timers`] clock; it reports
//! lifecycle through caller-supplied callbacks.
//!
//! ```
//! use tactile_core::Timers;
//! use tactile_input::{LongPressConfig, LongPressRecognizer, PointerEvent};
//!
//! let mut timers = Timers::new();
//! let mut recognizer = LongPressRecognizer::new(LongPressConfig::default(), |_event, pos| {
//!     println!("long press at {:?}", pos);
//! });
//!
//! let mut down = PointerEvent::mouse(10.0, 10.0, 0);
//! recognizer.pointer_down(&mut timers, &mut down).unwrap();
//! for id in timers.advance(400) {
//!     recognizer.timer_fired(id);
//! }
//! ```

pub mod click_outside;
pub mod drag;
pub mod event;
pub mod hover;
pub mod idle;
pub mod long_press;
pub mod mouse;
pub mod scroll;

pub use click_outside::ClickOutside;
pub use drag::DragTracker;
pub use event::{InputError, MouseButton, PointerEvent, PointerKind, Result};
pub use hover::Hover;
pub use idle::IdleDetector;
pub use long_press::{LongPressConfig, LongPressRecognizer, PressState};
pub use mouse::{MousePosition, MouseTracker};
pub use scroll::ScrollTracker;

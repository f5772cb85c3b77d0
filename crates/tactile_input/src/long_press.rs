//! Long-press gesture recognition
//!
//! A small interaction state machine that classifies a press as a short tap,
//! a cancelled press (moved too far, treated as a drag), or a qualifying long
//! press:
//!
//! ```text
//! Idle --(pointer down)--> Pressed --(threshold timer)--> LongPressActive
//!   ^                         |                                |
//!   |      up / leave / moved past move_threshold       up / leave
//!   +-------------------------+--------------------------------+
//! ```
//!
//! The host wires pointer events and fired timer ids to one recognizer per
//! pressable element. Both the up AND leave handlers must be wired so that a
//! pointer escaping the element's bounds while pressed terminates the session
//! the same way lifting does.
//!
//! # Example
//!
//! ```rust
//! use tactile_core::Timers;
//! use tactile_input::{LongPressConfig, LongPressRecognizer, PointerEvent};
//!
//! let mut timers = Timers::new();
//! let mut recognizer = LongPressRecognizer::new(
//!     LongPressConfig::default(),
//!     |_event, position| println!("long press at {position:?}"),
//! );
//!
//! let mut down = PointerEvent::mouse(10.0, 10.0, 0);
//! recognizer.pointer_down(&mut timers, &mut down).unwrap();
//! for id in timers.advance(400) {
//!     recognizer.timer_fired(id);
//! }
//! recognizer.pointer_up(&mut timers, &PointerEvent::mouse(10.0, 10.0, 600));
//! ```

use tactile_core::{Point, TimerId, Timers};

use crate::event::{PointerEvent, Result};

/// Long-press recognizer configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPressConfig {
    /// How long the pointer must stay down before the press counts as a
    /// long press, in milliseconds
    pub threshold_ms: u64,
    /// Maximum pointer travel (Euclidean pixels) before the press is treated
    /// as a drag and cancelled
    pub move_threshold: f32,
    /// Mark the press-start event as consumed for platform default handling
    pub prevent_default: bool,
    /// Ignore all input
    pub disabled: bool,
}

impl Default for LongPressConfig {
    fn default() -> Self {
        Self {
            threshold_ms: 400,
            move_threshold: 10.0,
            prevent_default: true,
            disabled: false,
        }
    }
}

impl LongPressConfig {
    pub fn threshold_ms(mut self, threshold_ms: u64) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }

    pub fn move_threshold(mut self, move_threshold: f32) -> Self {
        self.move_threshold = move_threshold;
        self
    }

    pub fn prevent_default(mut self, prevent_default: bool) -> Self {
        self.prevent_default = prevent_default;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Observable recognizer state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressed,
    LongPressActive,
}

type PressCallback = Box<dyn FnMut(&PointerEvent, Point)>;
type FinishCallback = Box<dyn FnMut(&PointerEvent, Point, u64)>;

/// The one stateful record of a press gesture, alive from pointer-down until
/// up/leave/cancellation. `Some` is the pressed flag.
struct PressSession {
    /// Event that started the press; the primary callback replays it
    start_event: PointerEvent,
    start_position: Point,
    current_position: Point,
    /// Wall-clock milliseconds at press start
    start_time: u64,
    long_press_active: bool,
    /// Pending threshold timer; `Some` iff pressed and not yet promoted
    timer: Option<TimerId>,
}

/// Recognizes long presses from a raw pointer event stream
///
/// One recognizer owns at most one [`PressSession`] at a time; a second
/// pointer-down while a session is live is ignored until the session ends.
pub struct LongPressRecognizer {
    config: LongPressConfig,
    on_long_press: PressCallback,
    on_start: Option<PressCallback>,
    on_finish: Option<FinishCallback>,
    on_cancel: Option<PressCallback>,
    on_move: Option<PressCallback>,
    session: Option<PressSession>,
}

impl LongPressRecognizer {
    /// Create a recognizer with the primary long-press callback
    ///
    /// The primary callback fires exactly once per qualifying session, with
    /// the press-start event and press-start position.
    pub fn new<F>(config: LongPressConfig, on_long_press: F) -> Self
    where
        F: FnMut(&PointerEvent, Point) + 'static,
    {
        Self {
            config,
            on_long_press: Box::new(on_long_press),
            on_start: None,
            on_finish: None,
            on_cancel: None,
            on_move: None,
            session: None,
        }
    }

    /// Called when a press begins, before the threshold timer is armed
    pub fn on_start<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PointerEvent, Point) + 'static,
    {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Called on up/leave after the long press activated; receives the
    /// press duration in milliseconds
    pub fn on_finish<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PointerEvent, Point, u64) + 'static,
    {
        self.on_finish = Some(Box::new(f));
        self
    }

    /// Called when the press ends before the long press activated
    /// (released early or moved past the move threshold)
    pub fn on_cancel<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PointerEvent, Point) + 'static,
    {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// Called on every qualifying move while pressed
    pub fn on_move<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PointerEvent, Point) + 'static,
    {
        self.on_move = Some(Box::new(f));
        self
    }

    pub fn state(&self) -> PressState {
        match &self.session {
            None => PressState::Idle,
            Some(session) if session.long_press_active => PressState::LongPressActive,
            Some(_) => PressState::Pressed,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    /// Handle pointer-down: open a session and arm the threshold timer
    ///
    /// Ignored while disabled or while a session is already active (a stray
    /// second down neither aborts nor forks the current session).
    pub fn pointer_down(&mut self, timers: &mut Timers, event: &mut PointerEvent) -> Result<()> {
        if self.config.disabled {
            return Ok(());
        }
        if self.session.is_some() {
            tracing::trace!("pointer down during active session ignored");
            return Ok(());
        }

        let position = event.position_checked()?;
        if self.config.prevent_default {
            event.prevent_default();
        }

        self.session = Some(PressSession {
            start_event: event.clone(),
            start_position: position,
            current_position: position,
            start_time: event.timestamp,
            long_press_active: false,
            timer: None,
        });
        tracing::debug!(?position, "press started");

        if let Some(on_start) = &mut self.on_start {
            on_start(event, position);
        }

        // Armed after on_start so the callback observes a Pressed session
        // with no timer yet.
        let timer = timers.schedule(self.config.threshold_ms);
        if let Some(session) = &mut self.session {
            session.timer = Some(timer);
        }
        Ok(())
    }

    /// Handle pointer-move: update position, cancel on excess travel
    ///
    /// While `Pressed`, travel beyond `move_threshold` runs the cancel path
    /// and suppresses `on_move` for that event. Once `LongPressActive`,
    /// distance is no longer re-checked; moves only update the position and
    /// fire `on_move`.
    pub fn pointer_move(&mut self, timers: &mut Timers, event: &PointerEvent) -> Result<()> {
        if self.config.disabled || self.session.is_none() {
            return Ok(());
        }
        let position = event.position_checked()?;
        let exceeded = match &mut self.session {
            Some(session) => {
                session.current_position = position;
                !session.long_press_active
                    && session.start_position.distance(position) > self.config.move_threshold
            }
            None => return Ok(()),
        };

        if exceeded {
            tracing::debug!(?position, "press cancelled by movement");
            self.cancel(timers, event);
            return Ok(());
        }

        if let Some(on_move) = &mut self.on_move {
            on_move(event, position);
        }
        Ok(())
    }

    /// Handle pointer-up; terminates the session
    pub fn pointer_up(&mut self, timers: &mut Timers, event: &PointerEvent) {
        self.cancel(timers, event);
    }

    /// Handle the pointer leaving the element's bounds; terminates the
    /// session exactly like pointer-up
    pub fn pointer_leave(&mut self, timers: &mut Timers, event: &PointerEvent) {
        self.cancel(timers, event);
    }

    /// Route a fired timer id; returns true if this recognizer consumed it
    ///
    /// Promotes the live session to `LongPressActive` and fires the primary
    /// callback with the position captured at press start.
    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        if session.timer != Some(id) {
            return false;
        }

        session.timer = None;
        session.long_press_active = true;
        let start_event = session.start_event.clone();
        let start_position = session.start_position;
        tracing::debug!(?start_position, "long press activated");

        (self.on_long_press)(&start_event, start_position);
        true
    }

    /// Shared termination path for up, leave, and move-cancellation
    ///
    /// No-op without a session, so duplicate up/leave pairs can't double-fire
    /// the finish/cancel callbacks. Exactly one of `on_finish`/`on_cancel`
    /// fires per started session.
    fn cancel(&mut self, timers: &mut Timers, event: &PointerEvent) {
        if self.config.disabled {
            return;
        }
        let Some(mut session) = self.session.take() else {
            return;
        };

        // Disarm before running callbacks; the timer must never outlive its
        // session.
        if let Some(timer) = session.timer.take() {
            timers.cancel(timer);
        }

        let position = session.current_position;
        let duration = event.timestamp.saturating_sub(session.start_time);

        if session.long_press_active {
            tracing::debug!(duration, "press finished");
            if let Some(on_finish) = &mut self.on_finish {
                on_finish(event, position, duration);
            }
        } else {
            tracing::debug!(duration, "press cancelled");
            if let Some(on_cancel) = &mut self.on_cancel {
                on_cancel(event, position);
            }
        }
    }
}

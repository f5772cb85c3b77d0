//! Clipboard writing with fallback
//!
//! Hosts supply the actual clipboard integration through
//! [`ClipboardBackend`]. The writer tries a primary backend first and falls
//! through to an optional fallback, mirroring the async-API-then-execCommand
//! dance browsers force on web hosts. A `copied` flag tracks recent success
//! and auto-resets after two seconds.

use tactile_core::{State, TimerId, Timers};

/// How long the `copied` flag stays set after a successful write
const COPIED_RESET_MS: u64 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard backend unavailable")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Host-supplied clipboard integration
pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<F> ClipboardBackend for F
where
    F: FnMut(&str) -> Result<(), ClipboardError>,
{
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self(text)
    }
}

/// Writes text through a primary backend, falling back on failure
pub struct ClipboardWriter {
    primary: Box<dyn ClipboardBackend>,
    fallback: Option<Box<dyn ClipboardBackend>>,
    copied: State<bool>,
    reset_timer: Option<TimerId>,
}

impl ClipboardWriter {
    pub fn new(primary: impl ClipboardBackend + 'static) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: None,
            copied: State::new(false),
            reset_timer: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl ClipboardBackend + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Copy `text`, trying the fallback backend if the primary fails.
    ///
    /// On success the `copied` flag is set and scheduled to reset after
    /// 2000 ms. The error surfaces only when every backend failed.
    pub fn copy(&mut self, timers: &mut Timers, text: &str) -> Result<(), ClipboardError> {
        let result = match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(primary_err) => match &mut self.fallback {
                Some(fallback) => {
                    tracing::warn!(error = %primary_err, "primary clipboard failed, trying fallback");
                    fallback.write_text(text)
                }
                None => Err(primary_err),
            },
        };
        if result.is_ok() {
            self.copied.set(true);
            if let Some(id) = self.reset_timer.take() {
                timers.cancel(id);
            }
            self.reset_timer = Some(timers.schedule(COPIED_RESET_MS));
        }
        result
    }

    /// Route a fired timer here. Returns true if it was the copied-flag
    /// reset.
    pub fn timer_fired(&mut self, id: TimerId) -> bool {
        if self.reset_timer != Some(id) {
            return false;
        }
        self.reset_timer = None;
        self.copied.set(false);
        true
    }

    pub fn copied(&self) -> bool {
        self.copied.get()
    }

    pub fn copied_state(&self) -> State<bool> {
        self.copied.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pump(timers: &mut Timers, writer: &mut ClipboardWriter, now: u64) {
        for id in timers.advance(now) {
            writer.timer_fired(id);
        }
    }

    #[test]
    fn test_copy_sets_flag_then_resets() {
        let written = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&written);
        let mut writer = ClipboardWriter::new(move |text: &str| {
            sink.borrow_mut().push(text.to_string());
            Ok(())
        });
        let mut timers = Timers::new();

        writer.copy(&mut timers, "hello").unwrap();
        assert!(writer.copied());
        assert_eq!(*written.borrow(), vec!["hello"]);

        pump(&mut timers, &mut writer, 1_999);
        assert!(writer.copied());

        pump(&mut timers, &mut writer, 2_000);
        assert!(!writer.copied());
    }

    #[test]
    fn test_primary_failure_uses_fallback() {
        let written = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&written);
        let mut writer = ClipboardWriter::new(|_: &str| {
            Err(ClipboardError::Unavailable)
        })
        .with_fallback(move |text: &str| {
            sink.borrow_mut().push(text.to_string());
            Ok(())
        });
        let mut timers = Timers::new();

        writer.copy(&mut timers, "fallback me").unwrap();
        assert!(writer.copied());
        assert_eq!(*written.borrow(), vec!["fallback me"]);
    }

    #[test]
    fn test_both_backends_fail_surfaces_error() {
        let mut writer = ClipboardWriter::new(|_: &str| Err(ClipboardError::Unavailable))
            .with_fallback(|_: &str| {
                Err(ClipboardError::WriteFailed("denied".into()))
            });
        let mut timers = Timers::new();

        let err = writer.copy(&mut timers, "nope").unwrap_err();
        assert_eq!(err, ClipboardError::WriteFailed("denied".into()));
        assert!(!writer.copied());
    }

    #[test]
    fn test_second_copy_extends_reset_window() {
        let mut writer = ClipboardWriter::new(|_: &str| Ok(()));
        let mut timers = Timers::new();

        writer.copy(&mut timers, "a").unwrap();
        pump(&mut timers, &mut writer, 1_500);
        writer.copy(&mut timers, "b").unwrap();

        // Original reset at t=2000 was cancelled
        pump(&mut timers, &mut writer, 2_500);
        assert!(writer.copied());

        pump(&mut timers, &mut writer, 3_500);
        assert!(!writer.copied());
    }
}

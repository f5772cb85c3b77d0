//! Countdown timer with unit-aware formatting
//!
//! Counts down from an initial duration in 100 ms ticks driven by the shared
//! timer service, floors at zero, and can render the remaining time as a
//! compact string like `"1h 4m 10s 500ms"`.

use std::fmt::Write as _;

use tactile_core::{State, TimerId, Timers};

const TICK_MS: u64 = 100;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Unit of the initial duration passed to [`Countdown::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn to_millis(self, amount: u64) -> u64 {
        match self {
            TimeUnit::Millis => amount,
            TimeUnit::Seconds => amount * MS_PER_SECOND,
            TimeUnit::Minutes => amount * MS_PER_MINUTE,
            TimeUnit::Hours => amount * MS_PER_HOUR,
            TimeUnit::Days => amount * MS_PER_DAY,
        }
    }
}

/// Which units [`Countdown::formatted`] may emit. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownFormat {
    pub days: bool,
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
    pub millis: bool,
}

impl Default for CountdownFormat {
    fn default() -> Self {
        Self {
            days: true,
            hours: true,
            minutes: true,
            seconds: true,
            millis: true,
        }
    }
}

/// Remaining time split into calendar-style components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl TimeBreakdown {
    fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
            millis: ms % MS_PER_SECOND,
        }
    }
}

/// A countdown driven by a 100 ms repeating timer
pub struct Countdown {
    remaining_ms: State<u64>,
    initial_ms: u64,
    format: CountdownFormat,
    auto_start: bool,
    timer: Option<TimerId>,
}

impl Countdown {
    pub fn new(
        initial: u64,
        unit: TimeUnit,
        format: CountdownFormat,
        auto_start: bool,
        timers: &mut Timers,
    ) -> Self {
        let initial_ms = unit.to_millis(initial);
        let mut countdown = Self {
            remaining_ms: State::new(initial_ms),
            initial_ms,
            format,
            auto_start,
            timer: None,
        };
        if auto_start {
            countdown.start(timers);
        }
        countdown
    }

    /// Begin ticking. No-op while already running or when already at zero.
    pub fn start(&mut self, timers: &mut Timers) {
        if self.timer.is_some() || self.remaining_ms.get() == 0 {
            return;
        }
        self.timer = Some(timers.schedule_repeating(TICK_MS));
        tracing::debug!(remaining_ms = self.remaining_ms.get(), "countdown started");
    }

    /// Stop ticking, keeping the remaining time
    pub fn pause(&mut self, timers: &mut Timers) {
        if let Some(id) = self.timer.take() {
            timers.cancel(id);
            tracing::debug!(remaining_ms = self.remaining_ms.get(), "countdown paused");
        }
    }

    /// Restore the initial duration. Resumes ticking when the countdown was
    /// created with `auto_start`, otherwise leaves it paused.
    pub fn reset(&mut self, timers: &mut Timers) {
        self.pause(timers);
        self.remaining_ms.set(self.initial_ms);
        if self.auto_start {
            self.start(timers);
        }
    }

    /// Route a fired timer here. Returns true if it was this countdown's
    /// tick.
    pub fn timer_fired(&mut self, timers: &mut Timers, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        let remaining = self.remaining_ms.get();
        if remaining <= TICK_MS {
            self.remaining_ms.set(0);
            self.pause(timers);
        } else {
            self.remaining_ms.set(remaining - TICK_MS);
        }
        true
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.timer.is_none() && self.remaining_ms.get() > 0
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms.get()
    }

    pub fn remaining(&self) -> TimeBreakdown {
        TimeBreakdown::from_millis(self.remaining_ms.get())
    }

    pub fn state(&self) -> State<u64> {
        self.remaining_ms.clone()
    }

    /// Render the remaining time using the enabled units.
    ///
    /// Starts at the leading non-zero enabled unit and includes every enabled
    /// unit after it, so `"1m 0s 500ms"` keeps its zero seconds. Falls back
    /// to `"0ms"` when no unit qualifies.
    pub fn formatted(&self) -> String {
        let t = self.remaining();
        let mut out = String::new();
        let units: [(bool, u64, &str); 5] = [
            (self.format.days, t.days, "d"),
            (self.format.hours, t.hours, "h"),
            (self.format.minutes, t.minutes, "m"),
            (self.format.seconds, t.seconds, "s"),
            (self.format.millis, t.millis, "ms"),
        ];
        for (enabled, value, suffix) in units {
            if enabled && (value > 0 || !out.is_empty()) {
                if !out.is_empty() {
                    out.push(' ');
                }
                let _ = write!(out, "{value}{suffix}");
            }
        }
        if out.is_empty() {
            out.push_str("0ms");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(timers: &mut Timers, countdown: &mut Countdown, now: u64) {
        for id in timers.advance(now) {
            countdown.timer_fired(timers, id);
        }
    }

    #[test]
    fn test_ticks_down_and_floors_at_zero() {
        let mut timers = Timers::new();
        let mut countdown = Countdown::new(
            500,
            TimeUnit::Millis,
            CountdownFormat::default(),
            true,
            &mut timers,
        );
        assert!(countdown.is_running());

        pump(&mut timers, &mut countdown, 100);
        assert_eq!(countdown.remaining_ms(), 400);

        pump(&mut timers, &mut countdown, 400);
        assert_eq!(countdown.remaining_ms(), 100);
        assert!(countdown.is_running());

        // Final tick floors at zero and stops
        pump(&mut timers, &mut countdown, 500);
        assert_eq!(countdown.remaining_ms(), 0);
        assert!(!countdown.is_running());
        assert!(!countdown.is_paused());

        // No further ticks are scheduled
        assert!(timers.advance(2_000).is_empty());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut timers = Timers::new();
        let mut countdown = Countdown::new(
            1,
            TimeUnit::Seconds,
            CountdownFormat::default(),
            true,
            &mut timers,
        );

        pump(&mut timers, &mut countdown, 300);
        assert_eq!(countdown.remaining_ms(), 700);

        countdown.pause(&mut timers);
        assert!(countdown.is_paused());
        pump(&mut timers, &mut countdown, 900);
        assert_eq!(countdown.remaining_ms(), 700);

        countdown.start(&mut timers);
        pump(&mut timers, &mut countdown, 1_100);
        assert_eq!(countdown.remaining_ms(), 500);
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut timers = Timers::new();
        let mut countdown = Countdown::new(
            2,
            TimeUnit::Seconds,
            CountdownFormat::default(),
            false,
            &mut timers,
        );
        countdown.start(&mut timers);

        pump(&mut timers, &mut countdown, 600);
        assert_eq!(countdown.remaining_ms(), 1_400);

        // Without auto_start, reset stops the clock at the full duration
        countdown.reset(&mut timers);
        assert_eq!(countdown.remaining_ms(), 2_000);
        assert!(countdown.is_paused());
        assert!(timers.advance(1_600).is_empty());
    }

    #[test]
    fn test_auto_start_false_waits() {
        let mut timers = Timers::new();
        let countdown = Countdown::new(
            1,
            TimeUnit::Seconds,
            CountdownFormat::default(),
            false,
            &mut timers,
        );
        assert!(countdown.is_paused());
        assert!(timers.advance(1_000).is_empty());
    }

    #[test]
    fn test_breakdown() {
        let ms = TimeUnit::Days.to_millis(1)
            + TimeUnit::Hours.to_millis(2)
            + TimeUnit::Minutes.to_millis(3)
            + TimeUnit::Seconds.to_millis(4)
            + 500;
        let t = TimeBreakdown::from_millis(ms);
        assert_eq!(
            t,
            TimeBreakdown {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4,
                millis: 500
            }
        );
    }

    #[test]
    fn test_formatted_skips_leading_zero_units() {
        let mut timers = Timers::new();
        let countdown = Countdown::new(
            90_500,
            TimeUnit::Millis,
            CountdownFormat::default(),
            false,
            &mut timers,
        );
        // 1m 30s 500ms with zero days and hours suppressed
        assert_eq!(countdown.formatted(), "1m 30s 500ms");
    }

    #[test]
    fn test_formatted_keeps_inner_zeroes() {
        let mut timers = Timers::new();
        let countdown = Countdown::new(
            60_500,
            TimeUnit::Millis,
            CountdownFormat::default(),
            false,
            &mut timers,
        );
        assert_eq!(countdown.formatted(), "1m 0s 500ms");
    }

    #[test]
    fn test_formatted_zero_is_0ms() {
        let mut timers = Timers::new();
        let countdown = Countdown::new(
            0,
            TimeUnit::Millis,
            CountdownFormat::default(),
            false,
            &mut timers,
        );
        assert_eq!(countdown.formatted(), "0ms");
    }

    #[test]
    fn test_formatted_skips_disabled_units() {
        let mut timers = Timers::new();
        let format = CountdownFormat {
            minutes: false,
            ..CountdownFormat::default()
        };
        let countdown = Countdown::new(90, TimeUnit::Seconds, format, false, &mut timers);
        assert_eq!(countdown.formatted(), "30s 0ms");
    }

    #[test]
    fn test_reset_with_auto_start_resumes() {
        let mut timers = Timers::new();
        let mut countdown = Countdown::new(
            1,
            TimeUnit::Seconds,
            CountdownFormat::default(),
            true,
            &mut timers,
        );
        pump(&mut timers, &mut countdown, 300);
        countdown.reset(&mut timers);
        assert!(countdown.is_running());
        pump(&mut timers, &mut countdown, 500);
        assert_eq!(countdown.remaining_ms(), 800);
    }
}

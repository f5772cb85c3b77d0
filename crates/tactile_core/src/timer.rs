//! Deterministic timer service
//!
//! Hooks that defer work (the long-press threshold, debounce delays, idle
//! timeouts, countdown ticks) schedule entries here instead of owning their
//! own clocks. The host pumps the queue with [`Timers::advance`] using its
//! own millisecond timeline, then routes each fired [`TimerId`] to the hook
//! that owns it. Pumping from the event loop keeps every hook single-threaded
//! and makes timing tests exact.
//!
//! Cancellation removes the entry outright: a cancelled timer can never
//! appear in an `advance` result, so hooks don't need fired-side guards
//! against stale timers.

use slotmap::{new_key_type, SlotMap};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

new_key_type! {
    /// Generation-checked handle to a scheduled timer
    pub struct TimerId;
}

struct TimerEntry {
    deadline: u64,
    /// Re-arm interval for repeating timers
    interval: Option<u64>,
    /// Disambiguates re-armed entries from stale heap nodes
    seq: u64,
}

/// Host-pumped timer queue over a millisecond clock
pub struct Timers {
    entries: SlotMap<TimerId, TimerEntry>,
    /// Min-heap of (deadline, seq, id); stale nodes are skipped on pop
    queue: BinaryHeap<Reverse<(u64, u64, TimerId)>>,
    now: u64,
    next_seq: u64,
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            queue: BinaryHeap::new(),
            now: 0,
            next_seq: 0,
        }
    }

    /// Current clock in milliseconds (the last `advance` value)
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule a one-shot timer `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64) -> TimerId {
        let deadline = self.now + delay_ms;
        self.insert(deadline, None)
    }

    /// Schedule a repeating timer; fires every `interval_ms` until cancelled
    ///
    /// A zero interval is clamped to 1 ms.
    pub fn schedule_repeating(&mut self, interval_ms: u64) -> TimerId {
        let interval = interval_ms.max(1);
        let deadline = self.now + interval;
        self.insert(deadline, Some(interval))
    }

    fn insert(&mut self, deadline: u64, interval: Option<u64>) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.entries.insert(TimerEntry {
            deadline,
            interval,
            seq,
        });
        self.queue.push(Reverse((deadline, seq, id)));
        id
    }

    /// Cancel a timer; returns false if it was already fired or cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Whether a timer is still armed
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.contains_key(id)
    }

    /// Advance the clock and collect every timer due at or before `now_ms`
    ///
    /// Fired ids are returned in deadline order (ties in scheduling order).
    /// Repeating timers re-arm and may fire several times in one call if the
    /// clock jumped past multiple intervals. A backwards `now_ms` is clamped
    /// to the current clock.
    pub fn advance(&mut self, now_ms: u64) -> Vec<TimerId> {
        if now_ms > self.now {
            self.now = now_ms;
        }

        let mut fired = Vec::new();
        while let Some(&Reverse((deadline, seq, id))) = self.queue.peek() {
            if deadline > self.now {
                break;
            }
            self.queue.pop();

            // Skip nodes whose entry was cancelled or re-armed since push
            let live = match self.entries.get(id) {
                Some(entry) => entry.seq == seq && entry.deadline == deadline,
                None => false,
            };
            if !live {
                continue;
            }

            fired.push(id);
            tracing::trace!(?id, deadline, "timer fired");

            match self.entries[id].interval {
                Some(interval) => {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    let entry = &mut self.entries[id];
                    entry.deadline += interval;
                    entry.seq = seq;
                    self.queue.push(Reverse((entry.deadline, seq, id)));
                }
                None => {
                    self.entries.remove(id);
                }
            }
        }
        fired
    }
}

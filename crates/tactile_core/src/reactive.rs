//! Reactive state cells
//!
//! [`State<T>`] is the value type every hook exposes its output through: a
//! shared cell whose subscribers run synchronously on each write. There is no
//! dependency graph or batching here - hooks are leaves, and a leaf cell with
//! a version counter is all their consumers need.
//!
//! # Example
//!
//! ```rust
//! use tactile_core::State;
//!
//! let name = State::new(String::from("a"));
//! let sub = name.subscribe(|v| assert!(!v.is_empty()));
//! name.set("b".into());
//! name.unsubscribe(sub);
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, RwLock};

new_key_type! {
    /// Generation-checked handle for a subscription; a stale handle is a no-op
    pub struct SubscriptionId;
}

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

struct Versioned<T> {
    value: T,
    version: u64,
}

struct StateInner<T> {
    value: RwLock<Versioned<T>>,
    subscribers: RwLock<SlotMap<SubscriptionId, Subscriber<T>>>,
}

/// A shared reactive cell
///
/// Cheap to clone (all clones share the same cell). Thread-safe so async
/// hooks can write from worker tasks.
pub struct State<T> {
    inner: Arc<StateInner<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> State<T> {
    /// Create a new cell with an initial value
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(StateInner {
                value: RwLock::new(Versioned {
                    value: initial,
                    version: 0,
                }),
                subscribers: RwLock::new(SlotMap::with_key()),
            }),
        }
    }

    /// Get the current value
    pub fn get(&self) -> T {
        self.inner.value.read().unwrap().value.clone()
    }

    /// Version counter; bumps on every set/update
    pub fn version(&self) -> u64 {
        self.inner.value.read().unwrap().version
    }

    /// Set a new value and notify subscribers
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.write().unwrap();
            guard.value = value;
            guard.version += 1;
        }
        self.notify();
    }

    /// Update the value in place and notify subscribers
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        {
            let mut guard = self.inner.value.write().unwrap();
            f(&mut guard.value);
            guard.version += 1;
        }
        self.notify();
    }

    /// Subscribe to changes; the callback runs synchronously on every write
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.inner
            .subscribers
            .write()
            .unwrap()
            .insert(Box::new(callback))
    }

    /// Remove a subscription; returns false if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.write().unwrap().remove(id).is_some()
    }

    fn notify(&self) {
        let value = self.get();
        // Snapshot ids first so a subscriber reading this cell can't deadlock
        // against the subscriber map.
        let ids: SmallVec<[SubscriptionId; 4]> = self
            .inner
            .subscribers
            .read()
            .unwrap()
            .keys()
            .collect();
        for id in ids {
            let subscribers = self.inner.subscribers.read().unwrap();
            if let Some(callback) = subscribers.get(id) {
                callback(&value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_get_set() {
        let cell = State::new(0i32);
        assert_eq!(cell.get(), 0);
        cell.set(42);
        assert_eq!(cell.get(), 42);
    }

    #[test]
    fn test_update() {
        let cell = State::new(10i32);
        cell.update(|v| *v += 5);
        assert_eq!(cell.get(), 15);
    }

    #[test]
    fn test_version_bumps() {
        let cell = State::new(0u8);
        let v0 = cell.version();
        cell.set(1);
        cell.update(|_| {});
        assert_eq!(cell.version(), v0 + 2);
    }

    #[test]
    fn test_clones_share_cell() {
        let a = State::new(1i32);
        let b = a.clone();
        b.set(2);
        assert_eq!(a.get(), 2);
    }

    #[test]
    fn test_subscribe_unsubscribe() {
        let cell = State::new(0i32);
        let calls = Arc::new(AtomicU32::new(0));

        let calls_clone = Arc::clone(&calls);
        let sub = cell.subscribe(move |v| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            assert!(*v > 0);
        });

        cell.set(1);
        cell.set(2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(cell.unsubscribe(sub));
        cell.set(3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // Stale handle is a no-op
        assert!(!cell.unsubscribe(sub));
    }

    #[test]
    fn test_subscriber_can_read_cell() {
        let cell = State::new(5i32);
        let seen = Arc::new(AtomicU32::new(0));

        let cell_clone = cell.clone();
        let seen_clone = Arc::clone(&seen);
        let _sub = cell.subscribe(move |_| {
            seen_clone.store(cell_clone.get() as u32, Ordering::SeqCst);
        });

        cell.set(9);
        assert_eq!(seen.load(Ordering::SeqCst), 9);
    }
}

//! Update-only effects and drop guards
//!
//! [`UpdateEffect`] runs a side effect when its dependencies change, but
//! skips the very first observation so mount-time state never triggers it.
//! Each run may return a cleanup that executes before the next run and once
//! more when the effect is dropped.

/// Runs an effect on dependency changes, skipping the first observation
pub struct UpdateEffect<T: PartialEq> {
    last_deps: Option<T>,
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl<T: PartialEq> UpdateEffect<T> {
    pub fn new() -> Self {
        Self {
            last_deps: None,
            cleanup: None,
        }
    }

    /// Observe `deps`. The effect runs only when they differ from the last
    /// observation, never on the first call. Returns true if it ran.
    pub fn run<F, C>(&mut self, deps: T, effect: F) -> bool
    where
        F: FnOnce() -> Option<C>,
        C: FnOnce() + 'static,
    {
        match &self.last_deps {
            None => {
                self.last_deps = Some(deps);
                false
            }
            Some(last) if *last == deps => false,
            Some(_) => {
                if let Some(cleanup) = self.cleanup.take() {
                    cleanup();
                }
                self.cleanup = effect().map(|c| Box::new(c) as Box<dyn FnOnce()>);
                self.last_deps = Some(deps);
                true
            }
        }
    }
}

impl<T: PartialEq> Default for UpdateEffect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> Drop for UpdateEffect<T> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

/// Runs a closure when dropped
pub struct OnDrop<F: FnOnce()> {
    f: Option<F>,
}

impl<F: FnOnce()> OnDrop<F> {
    pub fn new(f: F) -> Self {
        Self { f: Some(f) }
    }
}

impl<F: FnOnce()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        if let Some(f) = self.f.take() {
            f();
        }
    }
}

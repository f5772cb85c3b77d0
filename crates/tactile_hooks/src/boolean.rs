//! Boolean flag with toggle semantics

use tactile_core::{State, SubscriptionId};

/// A reactive boolean flag
///
/// Thin wrapper over [`State<bool>`] with the usual flag operations.
#[derive(Clone)]
pub struct BooleanState {
    value: State<bool>,
}

impl BooleanState {
    pub fn new(initial: bool) -> Self {
        Self {
            value: State::new(initial),
        }
    }

    pub fn value(&self) -> bool {
        self.value.get()
    }

    pub fn set(&self, value: bool) {
        self.value.set(value);
    }

    pub fn set_true(&self) {
        self.value.set(true);
    }

    pub fn set_false(&self) {
        self.value.set(false);
    }

    pub fn toggle(&self) {
        self.value.update(|v| *v = !*v);
    }

    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.value.subscribe(f)
    }

    pub fn state(&self) -> State<bool> {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_toggle() {
        let flag = BooleanState::new(false);
        assert!(!flag.value());

        flag.set_true();
        assert!(flag.value());

        flag.toggle();
        assert!(!flag.value());

        flag.toggle();
        assert!(flag.value());

        flag.set_false();
        assert!(!flag.value());

        flag.set(true);
        assert!(flag.value());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let a = BooleanState::new(false);
        let b = a.clone();
        b.toggle();
        assert!(a.value());
    }
}

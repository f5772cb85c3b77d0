//! Network connectivity status

use tactile_core::State;

/// Connectivity change reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkEvent {
    Online,
    Offline,
}

/// Tracks whether the host currently has network connectivity
#[derive(Clone)]
pub struct OnlineStatus {
    online: State<bool>,
}

impl OnlineStatus {
    pub fn new(initially_online: bool) -> Self {
        Self {
            online: State::new(initially_online),
        }
    }

    pub fn handle(&self, event: NetworkEvent) {
        let online = matches!(event, NetworkEvent::Online);
        if online != self.online.get() {
            tracing::debug!(online, "connectivity changed");
        }
        self.online.set(online);
    }

    pub fn is_online(&self) -> bool {
        self.online.get()
    }

    pub fn state(&self) -> State<bool> {
        self.online.clone()
    }
}

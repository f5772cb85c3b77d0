//! Stateful interaction hooks for event-driven hosts.
//!
//! Each hook is a plain struct the host owns: it feeds events and pumps the
//! shared [`tactile_core::Timers`] clock, and reads results back through
//! [`tactile_core::State`] cells. Nothing here spins its own threads except
//! the fetch wrapper, which runs requests on tokio.

pub mod boolean;
pub mod clipboard;
pub mod countdown;
pub mod debounce;
pub mod effect;
pub mod fetch;
pub mod online;
pub mod truncate;
pub mod viewport;

pub use boolean::BooleanState;
pub use clipboard::{ClipboardBackend, ClipboardError, ClipboardWriter};
pub use countdown::{Countdown, CountdownFormat, TimeBreakdown, TimeUnit};
pub use debounce::Debounced;
pub use effect::{OnDrop, UpdateEffect};
pub use fetch::{FetchError, FetchState, Fetcher, Method, Request, Response, Transport};
pub use online::{NetworkEvent, OnlineStatus};
pub use truncate::truncate;
pub use viewport::{Viewport, MOBILE_BREAKPOINT};

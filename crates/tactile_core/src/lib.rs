//! Tactile Core
//!
//! Foundational primitives shared by every Tactile hook:
//!
//! - **Reactive state**: [`State<T>`] cells with synchronous subscribers
//! - **Timer service**: [`Timers`], a host-pumped deterministic timer queue
//! - **Geometry**: [`Point`] and [`Rect`] for pointer math
//!
//! # Example
//!
//! ```rust
//! use tactile_core::{State, Timers};
//!
//! let count = State::new(0i32);
//! let _sub = count.subscribe(|v| println!("count is now {v}"));
//! count.set(5);
//! assert_eq!(count.get(), 5);
//!
//! // Timers are driven by the host's clock, in milliseconds.
//! let mut timers = Timers::new();
//! let id = timers.schedule(400);
//! assert!(timers.advance(399).is_empty());
//! assert_eq!(timers.advance(400), vec![id]);
//! ```

pub mod geometry;
pub mod reactive;
pub mod timer;

pub use geometry::{Point, Rect};
pub use reactive::{State, SubscriptionId};
pub use timer::{TimerId, Timers};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::geometry::{Point, Rect};
    pub use crate::reactive::{State, SubscriptionId};
    pub use crate::timer::{TimerId, Timers};
}

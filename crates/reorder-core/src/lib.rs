//! # Core primitives for drag-to-reorder
//!
//! `reorder-core` holds the toolkit-independent building blocks that the
//! engine in `reorder-ui` is assembled from:
//!
//! - `Rect` / `Vec2`: geometry in one shared screen coordinate space.
//! - `PointerEvent`: a single pointer stream (down, move, up, cancel).
//! - `AnimatedValue<T>`: explicit-time transitions with completion.
//! - `Signal<T>`: observable value the host can subscribe to.
//! - `RepeatingTimer`: polled timer for cooperative, single-threaded loops.
//!
//! ## Time
//!
//! Nothing in this crate reads the wall clock on its own. Every call that
//! depends on time takes an `Instant`, so a host drives the whole engine
//! from its frame loop and tests drive it with fixed instants:
//!
//! ```rust
//! use reorder_core::*;
//! use web_time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut scale = AnimatedValue::new(1.0f32, AnimationSpec::smooth(Duration::from_millis(250)));
//! scale.set_target(1.05, t0);
//! assert!(scale.update(t0 + Duration::from_millis(100)));
//! assert!(!scale.update(t0 + Duration::from_millis(250)));
//! assert_eq!(*scale.get(), 1.05);
//! ```
//!
//! ## Signals
//!
//! ```rust
//! use reorder_core::*;
//!
//! let pulses = signal(0u64);
//! pulses.subscribe(|n| assert!(*n > 0));
//! pulses.update(|n| *n += 1);
//! assert_eq!(pulses.get(), 1);
//! ```

pub mod animation;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod signal;
pub mod timer;

pub use animation::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use input::*;
pub use signal::*;
pub use timer::*;

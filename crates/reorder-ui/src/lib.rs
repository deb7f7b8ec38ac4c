//! Long-press drag-to-reorder for lists and grids.
//!
//! The engine is toolkit-agnostic: a host feeds it pointer input, layout
//! frames and the current time, and renders whatever [`DragVisual`] and
//! item order it reports back. [`ReorderableList`] is a ready-made harness
//! that computes slot frames with taffy and drives the engine the way a
//! scrolling view would.

pub mod autoscroll;
pub mod config;
pub mod drag;
pub mod engine;
pub mod gestures;
pub mod item;
pub mod layout;
pub mod list;
pub mod reorder;
pub mod scroll;
pub mod tracker;

pub use autoscroll::{AutoScroll, Pointer};
pub use config::ReorderConfig;
pub use drag::{DragMachine, DragSession, DragVisual, Phase, Release};
pub use engine::{EngineEvent, EngineEvents, ReorderEngine};
pub use gestures::{GestureEvent, GestureEvents, LongPressDrag};
pub use item::{Item, ItemId};
pub use layout::{LayoutConfig, LayoutMode, SlotLayout};
pub use list::ReorderableList;
pub use reorder::{Swap, check_and_swap, swap_target};
pub use scroll::{ScrollController, ScrollMetrics, ScrollState};
pub use tracker::{Edge, GeometryTracker, HotRegions};

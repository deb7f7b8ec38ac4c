//! # Scroll model
//!
//! The engine never touches a scroll view directly. It talks to a
//! [`ScrollController`], which reports the current offset and the largest
//! legal offset and accepts `scroll_to` commands. Hosts either implement the
//! trait over their own viewport or use [`ScrollState`], a signal-backed
//! single-axis (Y) state that keeps its offset clamped whenever the viewport
//! or content size changes.
//!
//! ```rust
//! use reorder_ui::scroll::{ScrollController, ScrollState};
//!
//! let state = ScrollState::new();
//! state.set_viewport_height(400.0);
//! state.set_content_height(1000.0);
//! state.scroll_to(900.0);
//! assert_eq!(state.offset(), 600.0);
//! ```

use reorder_core::{Signal, signal};

/// Offset and maximum offset along the scroll axis, both `f32`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub max_offset: f32,
}

impl ScrollMetrics {
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset.max(0.0))
    }
}

pub trait ScrollController {
    fn offset(&self) -> f32;
    /// Content extent minus viewport extent; may be negative when the
    /// content fits.
    fn max_offset(&self) -> f32;
    fn scroll_to(&self, offset: f32);

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset(),
            max_offset: self.max_offset(),
        }
    }
}

/// Vertical scroll state.
pub struct ScrollState {
    scroll_offset: Signal<f32>,
    viewport_height: Signal<f32>,
    content_height: Signal<f32>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_height: signal(0.0),
            content_height: signal(0.0),
        }
    }

    pub fn set_viewport_height(&self, h: f32) {
        self.viewport_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_content_height(&self, h: f32) {
        self.content_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height.get()
    }

    pub fn content_height(&self) -> f32 {
        self.content_height.get()
    }

    /// Subscribe to offset changes (layout reflow hook).
    pub fn on_scroll(&self, f: impl Fn(&f32) + 'static) {
        self.scroll_offset.subscribe(f);
    }

    fn clamp_offset(&self) {
        let max_off = self.max_offset().max(0.0);
        let o = self.scroll_offset.get();
        let clamped = o.clamp(0.0, max_off);
        if clamped != o {
            self.scroll_offset.set(clamped);
        }
    }
}

impl ScrollController for ScrollState {
    fn offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    fn max_offset(&self) -> f32 {
        self.content_height.get() - self.viewport_height.get()
    }

    fn scroll_to(&self, offset: f32) {
        let max_off = self.max_offset().max(0.0);
        let next = offset.clamp(0.0, max_off);
        if next != self.scroll_offset.get() {
            self.scroll_offset.set(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn offset_stays_within_bounds() {
        let s = ScrollState::new();
        s.set_viewport_height(300.0);
        s.set_content_height(500.0);

        s.scroll_to(-50.0);
        assert_eq!(s.offset(), 0.0);
        s.scroll_to(1_000.0);
        assert_eq!(s.offset(), 200.0);
        assert_eq!(s.metrics().max_offset, 200.0);
    }

    #[test]
    fn shrinking_content_reclamps() {
        let s = ScrollState::new();
        s.set_viewport_height(300.0);
        s.set_content_height(500.0);
        s.scroll_to(200.0);

        s.set_content_height(350.0);
        assert_eq!(s.offset(), 50.0);

        s.set_content_height(100.0);
        assert_eq!(s.offset(), 0.0);
        assert!(s.max_offset() < 0.0);
        assert_eq!(s.metrics().clamp(40.0), 0.0);
    }

    #[test]
    fn notifies_only_on_change() {
        let s = ScrollState::new();
        s.set_viewport_height(100.0);
        s.set_content_height(400.0);
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        s.on_scroll(move |_| h.set(h.get() + 1));

        s.scroll_to(10.0);
        s.scroll_to(10.0);
        s.scroll_to(-5.0);
        assert_eq!(hits.get(), 2);
    }
}

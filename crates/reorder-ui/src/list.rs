//! `ReorderableList`: engine, scroll state, slot layout and hot regions
//! wired together the way a host view would wire them.
//!
//! After every input and every `advance` the harness pushes fresh screen
//! frames (slot frame, shifted by viewport origin and scroll offset) back
//! into the engine, which is the layout-callback half of the contract.
//! During `advance` the engine also asks the harness for slot frames after
//! each auto-scroll step, so swaps track the content as it scrolls.
//!
//! ```rust
//! use reorder_core::{EdgeInsets, PointerEvent, Rect, Vec2};
//! use reorder_ui::{Item, LayoutConfig, ReorderConfig, ReorderableList};
//! use web_time::{Duration, Instant};
//!
//! let items = (0..5).map(|i| Item::new(i, format!("row {i}"))).collect();
//! let viewport = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let t0 = Instant::now();
//! let mut list = ReorderableList::new(
//!     items,
//!     viewport,
//!     EdgeInsets::default(),
//!     ReorderConfig::default(),
//!     LayoutConfig::default(),
//!     t0,
//! )
//! .unwrap();
//!
//! let ms = Duration::from_millis;
//! list.handle_pointer(&PointerEvent::down(Vec2::new(50.0, 50.0)), t0);
//! list.advance(t0 + ms(300));
//! list.handle_pointer(&PointerEvent::moved(Vec2::new(50.0, 140.0)), t0 + ms(320));
//! list.handle_pointer(&PointerEvent::up(Vec2::new(50.0, 140.0)), t0 + ms(340));
//! assert_eq!(list.payloads(), ["row 1", "row 0", "row 2", "row 3", "row 4"]);
//! ```

use std::rc::Rc;

use reorder_core::{EdgeInsets, PointerEvent, Rect, Result};
use web_time::Instant;

use crate::config::ReorderConfig;
use crate::engine::{EngineEvent, EngineEvents, ReorderEngine};
use crate::item::Item;
use crate::layout::{LayoutConfig, LayoutMode, SlotLayout};
use crate::scroll::{ScrollController, ScrollState};
use crate::tracker::HotRegions;

pub struct ReorderableList<T> {
    engine: ReorderEngine<T>,
    scroll: Rc<ScrollState>,
    layout_config: LayoutConfig,
    layout: SlotLayout,
    viewport: Rect,
    insets: EdgeInsets,
}

impl<T> ReorderableList<T> {
    pub fn new(
        items: Vec<Item<T>>,
        viewport: Rect,
        insets: EdgeInsets,
        config: ReorderConfig,
        layout_config: LayoutConfig,
        now: Instant,
    ) -> Result<Self> {
        let scroll = Rc::new(ScrollState::new());
        let count = items.len();
        let engine = ReorderEngine::new(items, scroll.clone(), config)?;
        let layout = SlotLayout::compute(&layout_config, LayoutMode::List, viewport.w, count)?;
        let mut list = Self {
            engine,
            scroll,
            layout_config,
            layout,
            viewport,
            insets,
        };
        list.refresh_regions();
        list.sync_frames(now);
        Ok(list)
    }

    pub fn engine(&self) -> &ReorderEngine<T> {
        &self.engine
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn mode(&self) -> LayoutMode {
        self.layout.mode
    }

    pub fn items(&self) -> &[Item<T>] {
        self.engine.items()
    }

    pub fn payloads(&self) -> Vec<&T> {
        self.engine.items().iter().map(|it| &it.payload).collect()
    }

    /// Switch list/grid presentation. Order is untouched.
    pub fn set_mode(&mut self, mode: LayoutMode, now: Instant) -> Result<()> {
        self.relayout(mode, now)
    }

    pub fn toggle_mode(&mut self, now: Instant) -> Result<()> {
        self.relayout(self.layout.mode.toggled(), now)
    }

    /// Viewport size or safe-area insets changed.
    pub fn resize(&mut self, viewport: Rect, insets: EdgeInsets, now: Instant) -> Result<()> {
        self.viewport = viewport;
        self.insets = insets;
        self.refresh_regions();
        self.relayout(self.layout.mode, now)
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> EngineEvents {
        let events = self.engine.handle_pointer(event, now);
        self.after(&events, now);
        events
    }

    pub fn advance(&mut self, now: Instant) -> EngineEvents {
        let (layout, viewport) = (&self.layout, self.viewport);
        let events = self
            .engine
            .advance_with(now, |i, offset| layout.screen_frame(i, viewport, offset));
        self.after(&events, now);
        events
    }

    fn after(&mut self, events: &EngineEvents, now: Instant) {
        let moved = events
            .iter()
            .any(|e| matches!(e, EngineEvent::Swapped(_) | EngineEvent::Scrolled(_)));
        if moved {
            self.sync_frames(now);
        }
    }

    fn relayout(&mut self, mode: LayoutMode, now: Instant) -> Result<()> {
        self.layout = SlotLayout::compute(
            &self.layout_config,
            mode,
            self.viewport.w,
            self.engine.items().len(),
        )?;
        self.sync_frames(now);
        Ok(())
    }

    fn refresh_regions(&mut self) {
        let strip = self.engine.config().hot_region_height;
        self.engine
            .set_hot_regions(HotRegions::for_viewport(self.viewport, self.insets, strip));
    }

    fn sync_frames(&mut self, now: Instant) {
        self.scroll.set_viewport_height(self.viewport.h);
        self.scroll.set_content_height(self.layout.content_height);

        let offset = self.scroll.offset();
        let updates: Vec<_> = self
            .engine
            .items()
            .iter()
            .enumerate()
            .map(|(i, it)| {
                let frame = self
                    .layout
                    .screen_frame(i, self.viewport, offset)
                    .unwrap_or(Rect::ZERO);
                (it.id, frame)
            })
            .collect();

        for (id, frame) in updates {
            self.engine.item_frame_changed(id, frame, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reorder_core::Vec2;
    use web_time::Duration;

    const MS: Duration = Duration::from_millis(1);

    fn list(n: u64, height: f32) -> ReorderableList<u64> {
        let items = (0..n).map(|i| Item::new(i, i)).collect();
        ReorderableList::new(
            items,
            Rect::new(0.0, 0.0, 400.0, height),
            EdgeInsets::default(),
            ReorderConfig::default(),
            LayoutConfig::default(),
            Instant::now(),
        )
        .unwrap()
    }

    #[test]
    fn frames_are_pushed_on_construction() {
        let l = list(3, 800.0);
        assert_eq!(l.items()[1].frame, Rect::new(25.0, 105.0, 350.0, 60.0));
        assert_eq!(l.scroll().content_height(), 270.0);
    }

    #[test]
    fn auto_scroll_moves_frames_and_clamps() {
        let t0 = Instant::now();
        // 20 rows: content 25 + 20*60 + 19*20 + 25 = 1630, viewport 400.
        let mut l = list(20, 400.0);
        l.handle_pointer(&PointerEvent::down(Vec2::new(50.0, 50.0)), t0);
        l.advance(t0 + 250 * MS);
        l.handle_pointer(&PointerEvent::moved(Vec2::new(50.0, 390.0)), t0 + 260 * MS);
        assert!(l.engine().is_auto_scrolling());

        l.advance(t0 + 560 * MS);
        assert_eq!(l.scroll().offset(), 30.0);
        assert_eq!(l.items()[0].frame.y, 25.0 - 30.0);

        l.advance(t0 + 60_000 * MS);
        assert_eq!(l.scroll().offset(), 1230.0);
        assert!(l.scroll().offset() <= l.scroll().max_offset());
    }

    #[test]
    fn grid_toggle_keeps_order() {
        let t0 = Instant::now();
        let mut l = list(6, 800.0);
        l.toggle_mode(t0).unwrap();
        assert_eq!(l.mode(), LayoutMode::Grid { columns: 4 });
        assert_eq!(l.payloads(), vec![&0u64, &1, &2, &3, &4, &5]);
        assert_eq!(l.items()[4].frame.y, 105.0);
    }

    #[test]
    fn resize_moves_hot_regions() {
        let t0 = Instant::now();
        let mut l = list(3, 800.0);
        let insets = EdgeInsets {
            top: 10.0,
            bottom: 5.0,
            ..Default::default()
        };
        l.resize(Rect::new(0.0, 0.0, 400.0, 600.0), insets, t0).unwrap();
        let r = l.engine().hot_regions();
        assert_eq!(r.top, Rect::new(0.0, -10.0, 400.0, 30.0));
        assert_eq!(r.bottom, Rect::new(0.0, 580.0, 400.0, 25.0));
    }
}

//! # Reorder engine
//!
//! `ReorderEngine` owns the ordered sequence and wires the pieces together:
//!
//! ```text
//! pointer ─► LongPressDrag ─► DragMachine ─┬─► AutoScroll ─tick─► ScrollController
//!                                          │        │
//!                                          └────────┴─► check_and_swap ─► items
//! layout  ─► item_frame_changed / hot_region_changed ─► GeometryTracker
//! ```
//!
//! Everything runs on the caller's thread. Input handlers and
//! [`ReorderEngine::advance`] are the only entry points that mutate state,
//! and each takes the current `Instant`, so timer ticks are serialized with
//! pointer events by construction.
//!
//! Hosts with their own gesture recognizer call `long_press`,
//! `pointer_moved` and `release` directly; others feed raw
//! [`PointerEvent`]s to `handle_pointer`.

use std::rc::Rc;

use reorder_core::{PointerEvent, PointerEventKind, Rect, Result, Signal, Vec2, signal};
use smallvec::SmallVec;
use web_time::Instant;

use crate::autoscroll::{AutoScroll, Pointer};
use crate::config::ReorderConfig;
use crate::drag::{DragMachine, DragSession, DragVisual, Phase, Release};
use crate::gestures::{GestureEvent, LongPressDrag};
use crate::item::{Item, ItemId, ensure_unique, index_of};
use crate::reorder::{Swap, check_and_swap};
use crate::scroll::{ScrollController, ScrollMetrics};
use crate::tracker::{Edge, GeometryTracker, HotRegions};

/// Things the host may want to react to (feedback, animations, redraw).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineEvent {
    Lifted(ItemId),
    Swapped(Swap),
    Scrolled(f32),
    Released(Release),
    Settled(ItemId),
}

pub type EngineEvents = SmallVec<[EngineEvent; 4]>;

pub struct ReorderEngine<T> {
    config: ReorderConfig,
    items: Vec<Item<T>>,
    tracker: GeometryTracker,
    scroll: Rc<dyn ScrollController>,
    drag: DragMachine,
    auto_scroll: AutoScroll,
    gesture: LongPressDrag,
    pressed: Option<ItemId>,
    feedback: Signal<u64>,
}

impl<T> ReorderEngine<T> {
    pub fn new(
        items: Vec<Item<T>>,
        scroll: Rc<dyn ScrollController>,
        config: ReorderConfig,
    ) -> Result<Self> {
        config.validate()?;
        ensure_unique(&items)?;
        Ok(Self {
            tracker: GeometryTracker::new(),
            drag: DragMachine::new(&config),
            auto_scroll: AutoScroll::new(config.auto_scroll_interval, config.auto_scroll_step),
            gesture: LongPressDrag::new(config.long_press, config.touch_slop),
            pressed: None,
            feedback: signal(0),
            items,
            scroll,
            config,
        })
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn order(&self) -> Vec<ItemId> {
        self.items.iter().map(|it| it.id).collect()
    }

    pub fn into_items(self) -> Vec<Item<T>> {
        self.items
    }

    /// Replace the sequence. A drag whose item is gone is dropped.
    pub fn set_items(&mut self, items: Vec<Item<T>>) -> Result<()> {
        ensure_unique(&items)?;
        self.items = items;
        if let Some(id) = self.drag.selected()
            && index_of(&self.items, id).is_none()
        {
            log::warn!("dragged item {id} removed; aborting drag");
            self.abort();
        }
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.drag.phase()
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.drag.selected()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Overlay geometry for the lifted item while dragging or settling.
    pub fn visual(&self) -> Option<DragVisual> {
        self.drag.visual()
    }

    /// Bumped once per drag start; subscribe for haptics.
    pub fn feedback(&self) -> Signal<u64> {
        self.feedback.clone()
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_running()
    }

    pub fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll.metrics()
    }

    pub fn hot_regions(&self) -> HotRegions {
        self.tracker.regions()
    }

    // Layout callbacks

    pub fn item_frame_changed(&mut self, id: ItemId, frame: Rect, now: Instant) {
        if self.tracker.set_item_frame(&mut self.items, id, frame) {
            self.drag.retarget(id, frame, now);
        }
    }

    pub fn hot_region_changed(&mut self, edge: Edge, frame: Rect) {
        self.tracker.set_region(edge, frame);
    }

    pub fn set_hot_regions(&mut self, regions: HotRegions) {
        self.tracker.set_regions(regions);
    }

    // Gesture entry points

    /// Hold confirmed on `id` with the pointer at `origin`.
    pub fn long_press(&mut self, id: ItemId, origin: Vec2) -> bool {
        if index_of(&self.items, id).is_none() {
            log::warn!("long press on unknown item {id}");
            return false;
        }
        self.drag.press(id, origin)
    }

    pub fn pointer_moved(&mut self, location: Vec2, now: Instant) -> EngineEvents {
        let mut events = EngineEvents::new();
        if self.drag.phase() == Phase::Pressing {
            self.lift(now, &mut events);
        }
        if self.drag.drag_to(location).is_some() {
            self.check_and_scroll(location, now, &mut events);
        }
        events
    }

    pub fn release(&mut self, now: Instant) -> EngineEvents {
        let mut events = EngineEvents::new();
        self.auto_scroll.cancel();
        let slot = self
            .drag
            .selected()
            .and_then(|id| self.tracker.frame_of(&self.items, id));
        match self.drag.release(slot, now) {
            Release::Ignored => {}
            Release::Cancelled(id) => {
                self.auto_scroll.reset();
                events.push(EngineEvent::Released(Release::Cancelled(id)));
            }
            r @ Release::Settling { .. } => events.push(EngineEvent::Released(r)),
        }
        events
    }

    /// Raw pointer stream through the built-in long-press recognizer.
    /// Presses only arm on an item, and only while no drag is active.
    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> EngineEvents {
        if event.event == PointerEventKind::Down {
            if !self.drag.is_idle() || self.gesture.is_tracking() {
                return EngineEvents::new();
            }
            let Some(i) = self.tracker.item_at(&self.items, event.position) else {
                return EngineEvents::new();
            };
            self.pressed = Some(self.items[i].id);
        }

        let mut events = EngineEvents::new();
        for g in self.gesture.handle_pointer(event, now) {
            events.extend(self.apply_gesture(g, now));
        }
        if !self.gesture.is_tracking() {
            self.pressed = None;
        }
        events
    }

    /// Step time: confirm pending holds, fire due auto-scroll ticks, run
    /// animations and finish a completed settle.
    ///
    /// Item frames are left as they are across auto-scroll ticks; hosts that
    /// know their slot geometry should use [`advance_with`](Self::advance_with).
    pub fn advance(&mut self, now: Instant) -> EngineEvents {
        self.advance_with(now, |_, _| None)
    }

    /// Like `advance`, with `slot_frame(index, scroll_offset)` reporting
    /// where slot `index` sits on screen at a given offset. After every
    /// auto-scroll step the item frames are refreshed from it, so the swap
    /// check of each tick runs against the scrolled layout. Slots it returns
    /// `None` for keep their frame.
    pub fn advance_with(
        &mut self,
        now: Instant,
        slot_frame: impl Fn(usize, f32) -> Option<Rect>,
    ) -> EngineEvents {
        let mut events = EngineEvents::new();

        if let Some(g) = self.gesture.poll(now) {
            events.extend(self.apply_gesture(g, now));
        }

        for _ in 0..self.auto_scroll.due_ticks(now) {
            self.auto_scroll_tick(&slot_frame, &mut events);
        }

        if let Some(id) = self.drag.advance(now) {
            self.auto_scroll.reset();
            events.push(EngineEvent::Settled(id));
        }
        events
    }

    /// Drop any drag immediately, without a settle animation.
    pub fn abort(&mut self) {
        self.drag.abort();
        self.gesture.reset();
        self.pressed = None;
        self.auto_scroll.reset();
    }

    fn apply_gesture(&mut self, g: GestureEvent, now: Instant) -> EngineEvents {
        match g {
            GestureEvent::Hold { origin } => {
                if let Some(id) = self.pressed {
                    self.long_press(id, origin);
                }
                EngineEvents::new()
            }
            GestureEvent::Move { location } => self.pointer_moved(location, now),
            GestureEvent::Release { .. } => self.release(now),
        }
    }

    fn lift(&mut self, now: Instant, events: &mut EngineEvents) {
        let Some(id) = self.drag.selected() else {
            return;
        };
        let anchor = self.tracker.frame_of(&self.items, id).unwrap_or(Rect::ZERO);
        let base = self.scroll.offset();
        if self.drag.begin(anchor, base, now) {
            self.auto_scroll.arm(base);
            self.feedback.update(|n| *n += 1);
            events.push(EngineEvent::Lifted(id));
        }
    }

    fn check_and_scroll(&mut self, location: Vec2, now: Instant, events: &mut EngineEvents) {
        let edge = self.tracker.hot_edge_at(location);
        if let Pointer::Outside { .. } = self.auto_scroll.on_pointer(edge, now) {
            self.swap_at(location, events);
        }
    }

    fn auto_scroll_tick(
        &mut self,
        slot_frame: &impl Fn(usize, f32) -> Option<Rect>,
        events: &mut EngineEvents,
    ) {
        let Some(target) = self.auto_scroll.step(self.scroll.metrics()) else {
            return;
        };
        self.scroll.scroll_to(target);
        events.push(EngineEvent::Scrolled(target));

        let offset = self.scroll.offset();
        for (i, item) in self.items.iter_mut().enumerate() {
            if let Some(frame) = slot_frame(i, offset) {
                item.frame = frame;
            }
        }

        if let Some(location) = self.drag.session().map(|s| s.location()) {
            self.swap_at(location, events);
        }
    }

    fn swap_at(&mut self, location: Vec2, events: &mut EngineEvents) {
        if self.drag.phase() != Phase::Dragging {
            return;
        }
        let Some(id) = self.drag.selected() else {
            return;
        };
        if let Some(swap) = check_and_swap(&mut self.items, id, location) {
            events.push(EngineEvent::Swapped(swap));
        }
    }
}

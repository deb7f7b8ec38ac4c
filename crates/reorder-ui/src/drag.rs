//! Drag lifecycle: `Idle → Pressing → Dragging → Settling → Idle`.
//!
//! The machine is a single enum, so there is never more than one session.
//! A press is only accepted from `Idle`; every other state ignores it.
//!
//! `Settling` ends on animation completion, not after a fixed delay. The
//! settle target is the dragged item's *current* slot, which can still move
//! while settling; [`DragMachine::retarget`] redirects the in-flight
//! animation and completion is reported once, for the latest target.

use reorder_core::{AnimatedValue, AnimationSpec, Rect, Transform, Vec2};
use web_time::Instant;

use crate::config::ReorderConfig;
use crate::item::ItemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pressing,
    Dragging,
    Settling,
}

/// The in-progress reorder gesture for one item.
#[derive(Clone, Debug)]
pub struct DragSession {
    pub id: ItemId,
    /// Frame of the item when the drag started.
    pub anchor_frame: Rect,
    /// Cumulative pointer translation since the press.
    pub drag_offset: Vec2,
    pub base_scroll_offset: f32,
    origin: Vec2,
    location: Vec2,
    scale: AnimatedValue<f32>,
}

impl DragSession {
    /// Latest absolute pointer location.
    pub fn location(&self) -> Vec2 {
        self.location
    }

    pub fn scale(&self) -> f32 {
        *self.scale.get()
    }
}

#[derive(Clone, Debug)]
struct Settle {
    frame: AnimatedValue<Rect>,
    offset: AnimatedValue<Vec2>,
}

#[derive(Clone, Debug)]
enum DragState {
    Idle,
    Pressing { id: ItemId, origin: Vec2 },
    Dragging(DragSession),
    Settling { session: DragSession, settle: Settle },
}

/// What the host should draw for the lifted item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragVisual {
    pub id: ItemId,
    /// Untransformed frame the overlay is positioned at.
    pub frame: Rect,
    pub offset: Vec2,
    pub scale: f32,
}

impl DragVisual {
    pub fn transform(&self) -> Transform {
        Transform::translate(self.offset.x, self.offset.y).with_scale(self.scale)
    }

    pub fn displayed_frame(&self) -> Rect {
        self.transform().apply_to_rect(self.frame)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Nothing was held.
    Ignored,
    /// Released during the hold, before any movement.
    Cancelled(ItemId),
    Settling { id: ItemId, target: Rect },
}

#[derive(Clone, Debug)]
pub struct DragMachine {
    state: DragState,
    lift_scale: f32,
    lift_animation: AnimationSpec,
    settle_animation: AnimationSpec,
}

impl DragMachine {
    pub fn new(config: &ReorderConfig) -> Self {
        Self {
            state: DragState::Idle,
            lift_scale: config.lift_scale,
            lift_animation: config.lift_animation,
            settle_animation: config.settle_animation,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            DragState::Idle => Phase::Idle,
            DragState::Pressing { .. } => Phase::Pressing,
            DragState::Dragging(_) => Phase::Dragging,
            DragState::Settling { .. } => Phase::Settling,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn selected(&self) -> Option<ItemId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Pressing { id, .. } => Some(*id),
            DragState::Dragging(s) | DragState::Settling { session: s, .. } => Some(s.id),
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(s) | DragState::Settling { session: s, .. } => Some(s),
            _ => None,
        }
    }

    /// Long press recognised on `id` at `origin`. Returns `false` (and
    /// changes nothing) unless idle.
    pub fn press(&mut self, id: ItemId, origin: Vec2) -> bool {
        if !self.is_idle() {
            log::warn!("press on {id} ignored: {:?} in progress", self.phase());
            return false;
        }
        log::debug!("pressing {id}");
        self.state = DragState::Pressing { id, origin };
        true
    }

    /// `Pressing → Dragging`. Creates the session and starts the lift.
    pub fn begin(&mut self, anchor_frame: Rect, base_scroll_offset: f32, now: Instant) -> bool {
        let DragState::Pressing { id, origin } = self.state else {
            return false;
        };
        let mut scale = AnimatedValue::new(1.0, self.lift_animation);
        scale.set_target(self.lift_scale, now);
        log::debug!("dragging {id} from {anchor_frame:?}, scroll {base_scroll_offset}");
        self.state = DragState::Dragging(DragSession {
            id,
            anchor_frame,
            drag_offset: Vec2::ZERO,
            base_scroll_offset,
            origin,
            location: origin,
            scale,
        });
        true
    }

    /// Record a pointer sample while dragging.
    pub fn drag_to(&mut self, location: Vec2) -> Option<Vec2> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        session.location = location;
        session.drag_offset = location - session.origin;
        Some(location)
    }

    /// Pointer released. While dragging, settles toward `slot_frame` (the
    /// dragged item's frame at its current index).
    pub fn release(&mut self, slot_frame: Option<Rect>, now: Instant) -> Release {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => Release::Ignored,
            DragState::Pressing { id, .. } => {
                log::debug!("press on {id} released before drag");
                Release::Cancelled(id)
            }
            DragState::Dragging(mut session) => {
                let target = slot_frame.unwrap_or(session.anchor_frame);
                let id = session.id;

                let mut frame = AnimatedValue::new(session.anchor_frame, self.settle_animation);
                frame.set_target(target, now);
                let mut offset = AnimatedValue::new(session.drag_offset, self.settle_animation);
                offset.set_target(Vec2::ZERO, now);
                let mut scale = AnimatedValue::new(session.scale(), self.settle_animation);
                scale.set_target(1.0, now);
                session.scale = scale;

                log::debug!("settling {id} into {target:?}");
                self.state = DragState::Settling {
                    session,
                    settle: Settle { frame, offset },
                };
                Release::Settling { id, target }
            }
            settling @ DragState::Settling { .. } => {
                self.state = settling;
                Release::Ignored
            }
        }
    }

    /// The settling item's slot moved; aim the settle at the new frame.
    pub fn retarget(&mut self, id: ItemId, frame: Rect, now: Instant) -> bool {
        match &mut self.state {
            DragState::Settling { session, settle } if session.id == id => {
                if *settle.frame.target() != frame {
                    settle.frame.set_target(frame, now);
                }
                true
            }
            _ => false,
        }
    }

    /// Step animations. Returns the item id once its settle has completed,
    /// at which point the machine is idle again.
    pub fn advance(&mut self, now: Instant) -> Option<ItemId> {
        match &mut self.state {
            DragState::Dragging(session) => {
                session.scale.update(now);
                None
            }
            DragState::Settling { session, settle } => {
                let running = settle.frame.update(now)
                    | settle.offset.update(now)
                    | session.scale.update(now);
                if running {
                    return None;
                }
                let id = session.id;
                log::debug!("settled {id}");
                self.state = DragState::Idle;
                Some(id)
            }
            _ => None,
        }
    }

    /// Drop everything without animating.
    pub fn abort(&mut self) -> Option<ItemId> {
        let id = self.selected();
        self.state = DragState::Idle;
        id
    }

    pub fn visual(&self) -> Option<DragVisual> {
        match &self.state {
            DragState::Dragging(s) => Some(DragVisual {
                id: s.id,
                frame: s.anchor_frame,
                offset: s.drag_offset,
                scale: s.scale(),
            }),
            DragState::Settling { session, settle } => Some(DragVisual {
                id: session.id,
                frame: *settle.frame.get(),
                offset: *settle.offset.get(),
                scale: session.scale(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    const MS: Duration = Duration::from_millis(1);

    fn machine() -> DragMachine {
        DragMachine::new(&ReorderConfig::default())
    }

    fn lifted(t0: Instant) -> DragMachine {
        let mut m = machine();
        assert!(m.press(ItemId(1), Vec2::new(50.0, 30.0)));
        assert!(m.begin(Rect::new(0.0, 0.0, 300.0, 60.0), 40.0, t0));
        m
    }

    #[test]
    fn walks_the_full_lifecycle() {
        let t0 = Instant::now();
        let mut m = machine();
        assert_eq!(m.phase(), Phase::Idle);

        m.press(ItemId(1), Vec2::new(50.0, 30.0));
        assert_eq!(m.phase(), Phase::Pressing);
        assert_eq!(m.selected(), Some(ItemId(1)));
        assert!(m.session().is_none());

        m.begin(Rect::new(0.0, 0.0, 300.0, 60.0), 40.0, t0);
        assert_eq!(m.phase(), Phase::Dragging);
        let s = m.session().unwrap();
        assert_eq!(s.base_scroll_offset, 40.0);
        assert_eq!(s.drag_offset, Vec2::ZERO);

        assert_eq!(m.drag_to(Vec2::new(60.0, 150.0)), Some(Vec2::new(60.0, 150.0)));
        assert_eq!(m.session().unwrap().drag_offset, Vec2::new(10.0, 120.0));

        let slot = Rect::new(0.0, 120.0, 300.0, 60.0);
        assert_eq!(
            m.release(Some(slot), t0 + 100 * MS),
            Release::Settling {
                id: ItemId(1),
                target: slot
            }
        );
        assert_eq!(m.phase(), Phase::Settling);
        assert_eq!(m.advance(t0 + 200 * MS), None);
        assert_eq!(m.advance(t0 + 350 * MS), Some(ItemId(1)));
        assert_eq!(m.phase(), Phase::Idle);
        assert!(m.session().is_none());
        assert!(m.visual().is_none());
    }

    #[test]
    fn second_press_is_ignored_in_every_active_phase() {
        let t0 = Instant::now();
        let mut m = machine();
        m.press(ItemId(1), Vec2::ZERO);
        assert!(!m.press(ItemId(2), Vec2::ZERO));
        assert_eq!(m.selected(), Some(ItemId(1)));

        m.begin(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, t0);
        assert!(!m.press(ItemId(2), Vec2::ZERO));

        m.release(None, t0);
        assert!(!m.press(ItemId(2), Vec2::ZERO));
        assert_eq!(m.selected(), Some(ItemId(1)));
    }

    #[test]
    fn lift_scales_up_then_settle_scales_back() {
        let t0 = Instant::now();
        let mut m = lifted(t0);
        m.advance(t0 + 300 * MS);
        assert_eq!(m.visual().unwrap().scale, 1.05);

        m.release(None, t0 + 300 * MS);
        m.advance(t0 + 1_000 * MS);
        assert!(m.is_idle());
    }

    #[test]
    fn settle_starts_at_live_position_and_ends_at_slot() {
        let t0 = Instant::now();
        let mut m = lifted(t0);
        m.drag_to(Vec2::new(50.0, 160.0));
        let live = m.visual().unwrap();
        assert_eq!(live.frame.translate(live.offset), Rect::new(0.0, 130.0, 300.0, 60.0));

        let slot = Rect::new(0.0, 120.0, 300.0, 60.0);
        m.release(Some(slot), t0);
        let v = m.visual().unwrap();
        assert_eq!(v.frame.translate(v.offset), Rect::new(0.0, 130.0, 300.0, 60.0));

        m.advance(t0 + 249 * MS);
        m.advance(t0 + 250 * MS);
        assert!(m.is_idle());
    }

    #[test]
    fn retarget_redirects_settle() {
        let t0 = Instant::now();
        let mut m = lifted(t0);
        m.release(Some(Rect::new(0.0, 60.0, 300.0, 60.0)), t0);

        let moved = Rect::new(0.0, 180.0, 300.0, 60.0);
        assert!(m.retarget(ItemId(1), moved, t0 + 100 * MS));
        assert!(!m.retarget(ItemId(2), moved, t0 + 100 * MS));

        // The first 250ms would have finished by now; the retargeted
        // animation has not.
        assert_eq!(m.advance(t0 + 300 * MS), None);
        assert!(m.visual().unwrap().frame.y < 180.0);
        assert_eq!(m.advance(t0 + 350 * MS), Some(ItemId(1)));
    }

    #[test]
    fn release_while_pressing_cancels() {
        let t0 = Instant::now();
        let mut m = machine();
        m.press(ItemId(3), Vec2::ZERO);
        assert_eq!(m.release(None, t0), Release::Cancelled(ItemId(3)));
        assert!(m.is_idle());
        assert_eq!(m.release(None, t0), Release::Ignored);
    }

    #[test]
    fn drag_to_outside_dragging_is_ignored() {
        let mut m = machine();
        assert_eq!(m.drag_to(Vec2::new(1.0, 1.0)), None);
        m.press(ItemId(1), Vec2::ZERO);
        assert_eq!(m.drag_to(Vec2::new(1.0, 1.0)), None);
    }
}

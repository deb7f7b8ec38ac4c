use reorder_core::{PointerEvent, PointerEventKind, PointerId, Vec2};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

/// Output of [`LongPressDrag`], in the order the engine should apply it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The hold lasted long enough without moving; `origin` is where the
    /// pointer went down.
    Hold { origin: Vec2 },
    Move { location: Vec2 },
    Release { location: Vec2 },
}

pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

#[derive(Clone, Copy, Debug)]
enum Tracking {
    Idle,
    Armed {
        pointer: PointerId,
        origin: Vec2,
        since: Instant,
    },
    Held {
        pointer: PointerId,
    },
}

/// Long-press-then-drag recognizer for one pointer.
///
/// A press that moves further than `slop` before `min_hold` has elapsed is
/// dropped (it belongs to scrolling). Once held, every move is forwarded
/// with no distance threshold. Samples from other pointers are ignored
/// while one is tracked.
#[derive(Clone, Debug)]
pub struct LongPressDrag {
    min_hold: Duration,
    slop: f32,
    tracking: Tracking,
}

impl LongPressDrag {
    pub fn new(min_hold: Duration, slop: f32) -> Self {
        Self {
            min_hold,
            slop,
            tracking: Tracking::Idle,
        }
    }

    pub fn is_tracking(&self) -> bool {
        !matches!(self.tracking, Tracking::Idle)
    }

    pub fn is_held(&self) -> bool {
        matches!(self.tracking, Tracking::Held { .. })
    }

    pub fn reset(&mut self) {
        self.tracking = Tracking::Idle;
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent, now: Instant) -> GestureEvents {
        let mut out = GestureEvents::new();
        match (event.event, self.tracking) {
            (PointerEventKind::Down, Tracking::Idle) => {
                self.tracking = Tracking::Armed {
                    pointer: event.id,
                    origin: event.position,
                    since: now,
                };
            }
            (PointerEventKind::Down, _) => {}

            (_, Tracking::Armed { pointer, .. }) | (_, Tracking::Held { pointer })
                if pointer != event.id => {}

            (PointerEventKind::Move, Tracking::Armed { origin, since, .. }) => {
                if now.saturating_duration_since(since) >= self.min_hold {
                    self.tracking = Tracking::Held { pointer: event.id };
                    out.push(GestureEvent::Hold { origin });
                    out.push(GestureEvent::Move {
                        location: event.position,
                    });
                } else if (event.position - origin).length() > self.slop {
                    log::trace!("long press abandoned: moved before hold");
                    self.tracking = Tracking::Idle;
                }
            }
            (PointerEventKind::Move, Tracking::Held { .. }) => {
                out.push(GestureEvent::Move {
                    location: event.position,
                });
            }
            (PointerEventKind::Up | PointerEventKind::Cancel, Tracking::Held { .. }) => {
                self.tracking = Tracking::Idle;
                out.push(GestureEvent::Release {
                    location: event.position,
                });
            }
            (PointerEventKind::Up | PointerEventKind::Cancel, Tracking::Armed { .. }) => {
                self.tracking = Tracking::Idle;
            }
            (_, Tracking::Idle) => {}
        }
        out
    }

    /// Confirms a stationary hold once `min_hold` has passed.
    pub fn poll(&mut self, now: Instant) -> Option<GestureEvent> {
        let Tracking::Armed {
            pointer,
            origin,
            since,
        } = self.tracking
        else {
            return None;
        };
        if now.saturating_duration_since(since) < self.min_hold {
            return None;
        }
        self.tracking = Tracking::Held { pointer };
        Some(GestureEvent::Hold { origin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn recognizer() -> LongPressDrag {
        LongPressDrag::new(250 * MS, 10.0)
    }

    #[test]
    fn hold_then_drag_then_release() {
        let t0 = Instant::now();
        let mut g = recognizer();
        assert!(g.handle_pointer(&PointerEvent::down(Vec2::new(5.0, 5.0)), t0).is_empty());
        assert!(g.poll(t0 + 100 * MS).is_none());
        assert_eq!(
            g.poll(t0 + 250 * MS),
            Some(GestureEvent::Hold {
                origin: Vec2::new(5.0, 5.0)
            })
        );
        assert!(g.is_held());

        let ev = g.handle_pointer(&PointerEvent::moved(Vec2::new(5.0, 80.0)), t0 + 300 * MS);
        assert_eq!(
            ev.as_slice(),
            &[GestureEvent::Move {
                location: Vec2::new(5.0, 80.0)
            }]
        );

        let ev = g.handle_pointer(&PointerEvent::up(Vec2::new(5.0, 80.0)), t0 + 400 * MS);
        assert_eq!(
            ev.as_slice(),
            &[GestureEvent::Release {
                location: Vec2::new(5.0, 80.0)
            }]
        );
        assert!(!g.is_tracking());
    }

    #[test]
    fn movement_after_hold_reports_hold_and_move_together() {
        let t0 = Instant::now();
        let mut g = recognizer();
        g.handle_pointer(&PointerEvent::down(Vec2::ZERO), t0);
        let ev = g.handle_pointer(&PointerEvent::moved(Vec2::new(0.0, 40.0)), t0 + 260 * MS);
        assert_eq!(
            ev.as_slice(),
            &[
                GestureEvent::Hold { origin: Vec2::ZERO },
                GestureEvent::Move {
                    location: Vec2::new(0.0, 40.0)
                }
            ]
        );
    }

    #[test]
    fn early_movement_abandons_the_press() {
        let t0 = Instant::now();
        let mut g = recognizer();
        g.handle_pointer(&PointerEvent::down(Vec2::ZERO), t0);
        // Jitter within slop is tolerated.
        g.handle_pointer(&PointerEvent::moved(Vec2::new(3.0, 4.0)), t0 + 50 * MS);
        assert!(g.is_tracking());

        g.handle_pointer(&PointerEvent::moved(Vec2::new(0.0, 30.0)), t0 + 100 * MS);
        assert!(!g.is_tracking());
        assert!(g.poll(t0 + 500 * MS).is_none());
    }

    #[test]
    fn quick_tap_emits_nothing() {
        let t0 = Instant::now();
        let mut g = recognizer();
        g.handle_pointer(&PointerEvent::down(Vec2::ZERO), t0);
        assert!(g.handle_pointer(&PointerEvent::up(Vec2::ZERO), t0 + 80 * MS).is_empty());
        assert!(!g.is_tracking());
    }

    #[test]
    fn cancel_while_held_releases() {
        let t0 = Instant::now();
        let mut g = recognizer();
        g.handle_pointer(&PointerEvent::down(Vec2::ZERO), t0);
        g.handle_pointer(&PointerEvent::moved(Vec2::new(0.0, 40.0)), t0 + 260 * MS);

        let ev = g.handle_pointer(&PointerEvent::cancel(Vec2::new(0.0, 45.0)), t0 + 300 * MS);
        assert_eq!(
            ev.as_slice(),
            &[GestureEvent::Release {
                location: Vec2::new(0.0, 45.0)
            }]
        );
        assert!(!g.is_tracking());
    }

    #[test]
    fn cancel_before_hold_emits_nothing() {
        let t0 = Instant::now();
        let mut g = recognizer();
        g.handle_pointer(&PointerEvent::down(Vec2::ZERO), t0);
        assert!(g.handle_pointer(&PointerEvent::cancel(Vec2::ZERO), t0 + 100 * MS).is_empty());
        assert!(!g.is_tracking());
        assert!(g.poll(t0 + 500 * MS).is_none());
    }

    #[test]
    fn other_pointers_are_ignored() {
        let t0 = Instant::now();
        let mut g = recognizer();
        g.handle_pointer(&PointerEvent::down(Vec2::ZERO), t0);
        g.poll(t0 + 300 * MS);

        let stray = PointerEvent::up(Vec2::ZERO).with_id(PointerId(7));
        assert!(g.handle_pointer(&stray, t0 + 310 * MS).is_empty());
        assert!(g.is_held());
    }
}

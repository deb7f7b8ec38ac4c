//! Edge auto-scroll.
//!
//! Whether the pointer is near an edge is decided on every move sample;
//! the scroll position itself only moves on timer ticks, one fixed step per
//! tick, so scroll speed does not depend on how often the pointer reports.

use reorder_core::RepeatingTimer;
use web_time::{Duration, Instant};

use crate::scroll::ScrollMetrics;
use crate::tracker::Edge;

/// What a pointer sample did to the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pointer {
    /// Outside both regions; caller runs the swap check itself.
    Outside { cancelled: bool },
    Started(Edge),
    /// Already running; the phase is untouched.
    Holding(Edge),
}

#[derive(Debug)]
struct Running {
    edge: Edge,
    timer: RepeatingTimer,
}

#[derive(Debug)]
pub struct AutoScroll {
    interval: Duration,
    step: f32,
    target: f32,
    running: Option<Running>,
}

impl AutoScroll {
    pub fn new(interval: Duration, step: f32) -> Self {
        Self {
            interval,
            step,
            target: 0.0,
            running: None,
        }
    }

    /// Seed the tracked scroll target for a new session.
    pub fn arm(&mut self, base_offset: f32) {
        self.target = base_offset;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn edge(&self) -> Option<Edge> {
        self.running.as_ref().map(|r| r.edge)
    }

    pub fn on_pointer(&mut self, edge: Option<Edge>, now: Instant) -> Pointer {
        let Some(edge) = edge else {
            return Pointer::Outside {
                cancelled: self.cancel(),
            };
        };
        if let Some(running) = self.running.as_mut() {
            running.edge = edge;
            return Pointer::Holding(edge);
        }
        log::debug!("auto-scroll start ({edge:?})");
        self.running = Some(Running {
            edge,
            timer: RepeatingTimer::start(self.interval, now),
        });
        Pointer::Started(edge)
    }

    /// Ticks that fell due by `now`.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        self.running
            .as_mut()
            .map_or(0, |r| r.timer.due_ticks(now))
    }

    /// Advance the tracked target by one step toward the running edge and
    /// return it, clamped to `[0, max_offset]`.
    pub fn step(&mut self, metrics: ScrollMetrics) -> Option<f32> {
        let edge = self.running.as_ref()?.edge;
        let next = match edge {
            Edge::Top => self.target - self.step,
            Edge::Bottom => self.target + self.step,
        };
        self.target = metrics.clamp(next);
        log::trace!("auto-scroll tick ({edge:?}) -> {}", self.target);
        Some(self.target)
    }

    /// Returns whether a timer was running.
    pub fn cancel(&mut self) -> bool {
        let was = self.running.take().is_some();
        if was {
            log::debug!("auto-scroll stop");
        }
        was
    }

    /// Cancel and forget the session's scroll target.
    pub fn reset(&mut self) {
        self.cancel();
        self.target = 0.0;
    }
}

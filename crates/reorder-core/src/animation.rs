use web_time::{Duration, Instant};

use crate::{Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Critically damped ease-out; `extra_bounce` > 0 overshoots slightly.
    Smooth { extra_bounce: f32 },
    /// Faster settle than `Smooth`, for swaps and drops.
    Snappy { extra_bounce: f32 },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth { extra_bounce } => ease_out_bounce(t, 3.0, *extra_bounce),
            Easing::Snappy { extra_bounce } => ease_out_bounce(t, 5.0, *extra_bounce),
        }
    }
}

// Exponential ease-out normalised so that f(1) == 1, with an optional
// sinusoidal overshoot that decays to zero at t == 1.
fn ease_out_bounce(t: f32, sharpness: f32, extra_bounce: f32) -> f32 {
    let base = (1.0 - (-sharpness * t).exp()) / (1.0 - (-sharpness).exp());
    if extra_bounce <= 0.0 {
        return base;
    }
    base + extra_bounce * (std::f32::consts::PI * t).sin() * (1.0 - t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn smooth(duration: Duration) -> Self {
        Self::tween(duration, Easing::Smooth { extra_bounce: 0.0 })
    }

    pub fn snappy(duration: Duration) -> Self {
        Self::tween(duration, Easing::Snappy { extra_bounce: 0.0 })
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec2 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Vec2 {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
        }
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Rect {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
            w: self.w.interpolate(&other.w, t),
            h: self.h.interpolate(&other.h, t),
        }
    }
}

/// Animated value that transitions smoothly.
///
/// Time is passed in explicitly so that the owner decides which clock
/// drives it. Retargeting mid-flight starts from the current value; the
/// animation completes exactly once, when `update` first reaches the latest
/// target.
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    /// Returns `true` while the animation is still running.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);
        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

//! Repeating timer driven by the owner's clock.
//!
//! There is no background thread: whoever owns the timer polls it with the
//! current instant from the same execution context that handles input, so a
//! tick can never interleave with an input handler. Dropping the timer
//! cancels it.

use web_time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct RepeatingTimer {
    interval: Duration,
    next_due: Instant,
}

impl RepeatingTimer {
    /// First tick fires one `interval` after `now`.
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Number of ticks that became due up to `now`; advances the phase past
    /// them. A zero interval never fires.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let mut ticks = 0;
        while self.next_due <= now {
            self.next_due += self.interval;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_interval_boundaries() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::start(Duration::from_millis(100), t0);

        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(99)), 0);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(100)), 1);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(150)), 0);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(420)), 3);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(499)), 0);
        assert_eq!(timer.due_ticks(t0 + Duration::from_millis(500)), 1);
    }

    #[test]
    fn zero_interval_is_inert() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::start(Duration::ZERO, t0);
        assert_eq!(timer.due_ticks(t0 + Duration::from_secs(1)), 0);
    }
}

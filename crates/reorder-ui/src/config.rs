//! Tunables for the reorder engine.
//!
//! Defaults reproduce the feel of a long-press reorderable control list:
//! a quarter-second hold, a 5% lift, and a slow constant-speed auto-scroll
//! near the edges.

use reorder_core::{AnimationSpec, Error, Result};
use web_time::Duration;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderConfig {
    /// Minimum hold before a press becomes a drag.
    pub long_press: Duration,
    /// Movement (logical px) tolerated during the hold; more cancels it.
    pub touch_slop: f32,
    /// Scale applied to the lifted item while dragging.
    pub lift_scale: f32,
    pub lift_animation: AnimationSpec,
    pub settle_animation: AnimationSpec,
    /// For the host to animate reflow after an `EngineEvent::Swapped`; read
    /// it back through `ReorderEngine::config()`.
    pub swap_animation: AnimationSpec,
    pub auto_scroll_interval: Duration,
    pub auto_scroll_step: f32,
    /// Height of the hot strips at the viewport edges, before insets.
    pub hot_region_height: f32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            long_press: Duration::from_millis(250),
            touch_slop: 10.0,
            lift_scale: 1.05,
            lift_animation: AnimationSpec::smooth(Duration::from_millis(250)),
            settle_animation: AnimationSpec::snappy(Duration::from_millis(250)),
            swap_animation: AnimationSpec::snappy(Duration::from_millis(250)),
            auto_scroll_interval: Duration::from_millis(100),
            auto_scroll_step: 10.0,
            hot_region_height: 20.0,
        }
    }
}

impl ReorderConfig {
    pub fn with_long_press(mut self, d: Duration) -> Self {
        self.long_press = d;
        self
    }

    pub fn with_lift_scale(mut self, scale: f32) -> Self {
        self.lift_scale = scale;
        self
    }

    pub fn with_settle_animation(mut self, spec: AnimationSpec) -> Self {
        self.settle_animation = spec;
        self
    }

    pub fn with_auto_scroll(mut self, interval: Duration, step: f32) -> Self {
        self.auto_scroll_interval = interval;
        self.auto_scroll_step = step;
        self
    }

    pub fn with_hot_region_height(mut self, h: f32) -> Self {
        self.hot_region_height = h;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.long_press.is_zero() {
            return Err(Error::invalid_config("long_press must be non-zero"));
        }
        if !(self.touch_slop >= 0.0) {
            return Err(Error::invalid_config("touch_slop must be >= 0"));
        }
        if !(self.lift_scale > 0.0) {
            return Err(Error::invalid_config("lift_scale must be > 0"));
        }
        if self.auto_scroll_interval.is_zero() {
            return Err(Error::invalid_config("auto_scroll_interval must be non-zero"));
        }
        if !(self.auto_scroll_step > 0.0) {
            return Err(Error::invalid_config("auto_scroll_step must be > 0"));
        }
        if !(self.hot_region_height >= 0.0) {
            return Err(Error::invalid_config("hot_region_height must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ReorderConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.long_press, Duration::from_millis(250));
        assert_eq!(cfg.auto_scroll_interval, Duration::from_millis(100));
        assert_eq!(cfg.auto_scroll_step, 10.0);
    }

    #[test]
    fn rejects_degenerate_values() {
        let cfg = ReorderConfig::default().with_auto_scroll(Duration::ZERO, 10.0);
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));

        let cfg = ReorderConfig::default().with_auto_scroll(Duration::from_millis(100), 0.0);
        assert!(cfg.validate().is_err());

        let cfg = ReorderConfig::default().with_lift_scale(f32::NAN);
        assert!(cfg.validate().is_err());

        let cfg = ReorderConfig::default().with_long_press(Duration::ZERO);
        assert!(cfg.validate().is_err());
    }
}

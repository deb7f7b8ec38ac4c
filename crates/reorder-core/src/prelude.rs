pub use crate::animation::{AnimatedValue, AnimationSpec, Easing, Interpolate};
pub use crate::error::{Error, Result};
pub use crate::geometry::{EdgeInsets, Rect, Transform, Vec2};
pub use crate::input::*;
pub use crate::signal::{Signal, signal};
pub use crate::timer::RepeatingTimer;

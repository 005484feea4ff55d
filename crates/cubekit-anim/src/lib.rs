//! CubeKit Animation Library
//!
//! Eased transitions for the cube: a tween-engine seam, a frame-driven
//! timeline implementation, and the reset/appear animations built on top.

pub mod animator;
pub mod easing;
pub mod tween;

pub use animator::{ResetAnimator, ResetOptions, APPEAR_DURATION, APPEAR_EASING, RESET_EASING};
pub use easing::Easing;
pub use tween::{CubeTween, ElementStyle, ElementTween, Timeline, TweenEngine};

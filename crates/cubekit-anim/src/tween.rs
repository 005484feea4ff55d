//! Tween engine seam and a frame-driven timeline implementation.
//!
//! [`TweenEngine`] is the capability the animations are issued against:
//! fire-and-forget commands, never inspected afterwards. [`Timeline`] is the
//! built-in engine - the caller drives it with `advance` once per frame and
//! it writes interpolated values back into the shared cube geometry.

use crate::easing::Easing;
use cubekit_core::CubeState;
use serde::{Deserialize, Serialize};

/// Command to interpolate the cube's geometry from its current values to a
/// target over a duration (in seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct CubeTween {
    pub target: CubeState,
    pub duration: f64,
    pub easing: Easing,
}

/// Opacity and scale of an externally resolved element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub opacity: f64,
    pub scale: f64,
}

/// Command to animate an element between two explicit style states.
///
/// `target` identifies the element in whatever scheme the caller uses
/// (e.g. a CSS selector); the engine never resolves it itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTween {
    pub target: String,
    pub from: ElementStyle,
    pub to: ElementStyle,
    pub duration: f64,
    pub easing: Easing,
}

/// The tweening capability animations are issued against.
///
/// Commands are fire-and-forget: completion is observed only through the
/// animated values converging.
pub trait TweenEngine {
    /// Animate the cube's properties from their current values to
    /// `tween.target`.
    fn animate_cube(&mut self, tween: CubeTween);

    /// Animate an element from `tween.from` to `tween.to`.
    fn animate_element(&mut self, tween: ElementTween);
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// An in-flight cube tween. The start geometry is sampled on the first
/// frame after the command, so "from current values" holds even if the
/// cube moved between command and first frame.
#[derive(Debug, Clone)]
struct ActiveCubeTween {
    tween: CubeTween,
    start: Option<CubeState>,
    elapsed: f64,
}

#[derive(Debug, Clone)]
struct ActiveElementTween {
    tween: ElementTween,
    elapsed: f64,
}

impl ActiveElementTween {
    fn progress(&self) -> f64 {
        if self.tween.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.tween.duration).min(1.0)
        }
    }

    fn style(&self) -> ElementStyle {
        let k = self.tween.easing.apply(self.progress());
        ElementStyle {
            opacity: lerp(self.tween.from.opacity, self.tween.to.opacity, k),
            scale: lerp(self.tween.from.scale, self.tween.to.scale, k),
        }
    }
}

/// Frame-driven tween engine.
///
/// Holds at most one cube tween - a new command replaces the in-flight one -
/// plus any number of element tweens. All interpolation happens inside
/// [`advance`](Timeline::advance), on the caller's thread.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    cube: Option<ActiveCubeTween>,
    elements: Vec<ActiveElementTween>,
}

impl Timeline {
    /// Create an idle timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all tweens by `dt` seconds, writing interpolated values into
    /// `cube`. Finished tweens are dropped; a finished cube tween leaves the
    /// cube exactly on its target.
    pub fn advance(&mut self, dt: f64, cube: &mut CubeState) {
        if let Some(active) = &mut self.cube {
            let start = *active.start.get_or_insert(*cube);
            active.elapsed += dt;

            let progress = if active.tween.duration <= 0.0 {
                1.0
            } else {
                (active.elapsed / active.tween.duration).min(1.0)
            };
            let k = active.tween.easing.apply(progress);

            cube.x = lerp(start.x, active.tween.target.x, k);
            cube.y = lerp(start.y, active.tween.target.y, k);
            cube.w = lerp(start.w, active.tween.target.w, k);
            cube.h = lerp(start.h, active.tween.target.h, k);

            if progress >= 1.0 {
                *cube = active.tween.target;
                self.cube = None;
            }
        }

        for active in &mut self.elements {
            active.elapsed += dt;
        }
        self.elements.retain(|active| active.progress() < 1.0);
    }

    /// Current interpolated style of an element tween, if one is in flight
    /// for `target`.
    pub fn element_style(&self, target: &str) -> Option<ElementStyle> {
        self.elements
            .iter()
            .find(|active| active.tween.target == target)
            .map(ActiveElementTween::style)
    }

    /// Whether no tween is in flight.
    pub fn is_idle(&self) -> bool {
        self.cube.is_none() && self.elements.is_empty()
    }
}

impl TweenEngine for Timeline {
    fn animate_cube(&mut self, tween: CubeTween) {
        log::debug!(
            "cube tween to ({:.1}, {:.1}) {}x{} over {:.2}s",
            tween.target.x,
            tween.target.y,
            tween.target.w,
            tween.target.h,
            tween.duration
        );
        self.cube = Some(ActiveCubeTween {
            tween,
            start: None,
            elapsed: 0.0,
        });
    }

    fn animate_element(&mut self, tween: ElementTween) {
        log::debug!("element tween on '{}' over {:.2}s", tween.target, tween.duration);
        // One tween per element: a new command replaces the in-flight one.
        self.elements.retain(|active| active.tween.target != tween.target);
        self.elements.push(ActiveElementTween { tween, elapsed: 0.0 });
    }
}

//! Eased reset and appear transitions for the cube.

use crate::easing::Easing;
use crate::tween::{CubeTween, ElementStyle, ElementTween, TweenEngine};
use cubekit_core::CubeState;
use serde::{Deserialize, Serialize};

/// Easing used when resetting the cube to its default geometry.
pub const RESET_EASING: Easing = Easing::ElasticOut {
    amplitude: 1.0,
    period: 0.3,
};

/// Duration of the appear transition, in seconds.
pub const APPEAR_DURATION: f64 = 1.0;

/// Easing used for the appear transition.
pub const APPEAR_EASING: Easing = Easing::PowerOut;

/// Configuration for reset animations, owned by the animator's caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResetOptions {
    /// Side length of the square container.
    pub container_size: f64,
    /// Width and height the cube resets to.
    pub initial_size: f64,
    /// Duration of the reset animation, in seconds.
    pub animation_duration: f64,
}

/// Issues reset and appear animation commands to a tween engine.
///
/// Fire-and-forget: both operations return immediately, and completion is
/// observed only through the animated values converging. The animator holds
/// no animation state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetAnimator {
    options: ResetOptions,
}

impl ResetAnimator {
    /// Create an animator with the given reset options.
    pub fn new(options: ResetOptions) -> Self {
        Self { options }
    }

    /// Ease the cube back to its centered default geometry with a springy
    /// elastic curve. The engine samples the cube's current values when the
    /// tween starts.
    pub fn animate_reset(&self, engine: &mut dyn TweenEngine) {
        engine.animate_cube(CubeTween {
            target: CubeState::centered(self.options.container_size, self.options.initial_size),
            duration: self.options.animation_duration,
            easing: RESET_EASING,
        });
    }

    /// Fade and scale in the element identified by `target`.
    pub fn animate_appear(&self, target: &str, engine: &mut dyn TweenEngine) {
        engine.animate_element(ElementTween {
            target: target.to_string(),
            from: ElementStyle {
                opacity: 0.0,
                scale: 0.8,
            },
            to: ElementStyle {
                opacity: 1.0,
                scale: 1.0,
            },
            duration: APPEAR_DURATION,
            easing: APPEAR_EASING,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::Timeline;

    /// Engine stub that records every command it receives.
    #[derive(Default)]
    struct RecordingEngine {
        cube_tweens: Vec<CubeTween>,
        element_tweens: Vec<ElementTween>,
    }

    impl TweenEngine for RecordingEngine {
        fn animate_cube(&mut self, tween: CubeTween) {
            self.cube_tweens.push(tween);
        }

        fn animate_element(&mut self, tween: ElementTween) {
            self.element_tweens.push(tween);
        }
    }

    fn animator() -> ResetAnimator {
        ResetAnimator::new(ResetOptions {
            container_size: 500.0,
            initial_size: 100.0,
            animation_duration: 1.5,
        })
    }

    #[test]
    fn test_reset_issues_one_command() {
        let mut engine = RecordingEngine::default();
        animator().animate_reset(&mut engine);

        assert_eq!(engine.cube_tweens.len(), 1);
        assert!(engine.element_tweens.is_empty());
        assert_eq!(
            engine.cube_tweens[0],
            CubeTween {
                target: CubeState {
                    x: 200.0,
                    y: 200.0,
                    w: 100.0,
                    h: 100.0,
                },
                duration: 1.5,
                easing: RESET_EASING,
            }
        );
    }

    #[test]
    fn test_appear_issues_one_command() {
        let mut engine = RecordingEngine::default();
        animator().animate_appear(".cube", &mut engine);

        assert_eq!(engine.element_tweens.len(), 1);
        assert!(engine.cube_tweens.is_empty());
        assert_eq!(
            engine.element_tweens[0],
            ElementTween {
                target: ".cube".to_string(),
                from: ElementStyle {
                    opacity: 0.0,
                    scale: 0.8,
                },
                to: ElementStyle {
                    opacity: 1.0,
                    scale: 1.0,
                },
                duration: 1.0,
                easing: Easing::PowerOut,
            }
        );
    }

    #[test]
    fn test_reset_converges_through_timeline() {
        let mut timeline = Timeline::new();
        let mut cube = CubeState {
            x: 0.0,
            y: 0.0,
            w: 250.0,
            h: 80.0,
        };

        animator().animate_reset(&mut timeline);
        // 60fps frames well past the 1.5s duration.
        for _ in 0..120 {
            timeline.advance(1.0 / 60.0, &mut cube);
        }

        assert_eq!(cube, CubeState::centered(500.0, 100.0));
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_repeated_reset_replaces_command() {
        let mut timeline = Timeline::new();
        let mut cube = CubeState {
            x: 0.0,
            y: 0.0,
            w: 250.0,
            h: 80.0,
        };

        let animator = animator();
        animator.animate_reset(&mut timeline);
        timeline.advance(0.1, &mut cube);
        animator.animate_reset(&mut timeline);
        for _ in 0..120 {
            timeline.advance(1.0 / 60.0, &mut cube);
        }

        assert_eq!(cube, CubeState::centered(500.0, 100.0));
    }
}

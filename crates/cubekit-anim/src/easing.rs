//! Easing curves (t in 0.0..=1.0, returns an eased progress value).

use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// Named easing curve applied to normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Identity - constant speed.
    Linear,
    /// Decelerating quadratic: `1 − (1−t)²`.
    PowerOut,
    /// Springy overshoot that settles on the target. `amplitude` controls
    /// the overshoot height, `period` the oscillation frequency.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Easing {
    /// Evaluate the curve at progress `t`, clamped to `0.0..=1.0`.
    ///
    /// Endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::PowerOut => ease_power_out(t),
            Self::ElasticOut { amplitude, period } => ease_elastic_out(t, amplitude, period),
        }
    }
}

/// Ease-out quadratic: gentle deceleration toward the target.
pub fn ease_power_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Elastic ease-out: overshoots the target and oscillates with
/// exponentially decaying amplitude before settling.
pub fn ease_elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Amplitudes below 1.0 cannot reach the target; clamp like Penner's
    // original formulation.
    let amplitude = amplitude.max(1.0);
    let s = period / TAU * (1.0 / amplitude).asin();
    amplitude * 2f64.powf(-10.0 * t) * ((t - s) * TAU / period).sin() + 1.0
}

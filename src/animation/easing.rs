//! Easing curves shared by all transitions.
//!
//! Every curve is monotonic on `[0, 1]` and pinned: `apply(0) == 0`,
//! `apply(1) == 1`. Input is clamped first.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quadratic slow-fast-slow.
    QuadraticInOut,
    /// Cubic slow-fast-slow.
    CubicInOut,
    /// Half cosine wave.
    SineInOut,
    /// Exponential slow-fast-slow. Default.
    #[default]
    ExponentialInOut,
}

impl Easing {
    /// Map elapsed fraction `t` to interpolation fraction.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::ExponentialInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    0.5 * 2.0_f32.powf(20.0 * t - 10.0)
                } else {
                    1.0 - 0.5 * 2.0_f32.powf(-20.0 * t + 10.0)
                }
            }
        }
    }
}

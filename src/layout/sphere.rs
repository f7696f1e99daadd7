//! Golden-section spiral on a sphere.
//!
//! For `n` items, item `i` sits at polar angle `phi = acos(-1 + 2i/n)` and
//! azimuth `theta = sqrt(n * pi) * phi`, which spreads points evenly over
//! the surface without any randomness.

use std::f64::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ensure;
use crate::error::Result;

/// Configuration for the sphere layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Sphere radius (default: 1200).
    pub radius: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self { radius: 1200.0 }
    }
}

impl SphereConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        ensure(
            self.radius.is_finite() && self.radius > 0.0,
            "sphere radius must be finite and positive",
        )
    }
}

/// Compute sphere target positions, one per item.
pub fn compute_sphere_layout(item_count: usize, config: &SphereConfig) -> Vec<Vec3> {
    if item_count == 0 {
        return Vec::new();
    }

    // Trig runs in f64: for large n the f32 azimuth loses too many bits.
    let n = item_count as f64;
    let radius = f64::from(config.radius);
    let winding = (n * PI).sqrt();

    (0..item_count)
        .map(|i| {
            let phi = (-1.0 + (2.0 * i as f64) / n).acos();
            let theta = winding * phi;
            let ring = radius * phi.sin();
            Vec3::new(
                (ring * theta.cos()) as f32,
                (ring * theta.sin()) as f32,
                (radius * phi.cos()) as f32,
            )
        })
        .collect()
}

//! Double helix layout.
//!
//! Consecutive items alternate between two strands wound around the y axis.
//! Even indices ride the outer strand (`radius + separation`), odd indices
//! the inner one (`radius - separation`), and the column is centered
//! vertically on the origin.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ensure;
use crate::error::Result;

/// Configuration for the double helix layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixConfig {
    /// Radius of the helix axis circle (default: 700).
    pub radius: f32,
    /// Offset of each strand from `radius` (default: 120).
    pub separation: f32,
    /// Vertical drop per item (default: 14).
    pub spacing_y: f32,
    /// Rotation per item in radians (default: 0.35).
    pub angle_step: f32,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            radius: 700.0,
            separation: 120.0,
            spacing_y: 14.0,
            angle_step: 0.35,
        }
    }
}

impl HelixConfig {
    /// Distance from the y axis for the strand item `index` belongs to.
    #[inline]
    pub fn strand_radius(&self, index: usize) -> f32 {
        let arm = if index % 2 == 0 { 1.0 } else { -1.0 };
        self.radius + arm * self.separation
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(
            self.radius.is_finite()
                && self.separation.is_finite()
                && self.spacing_y.is_finite()
                && self.angle_step.is_finite(),
            "helix parameters must be finite",
        )?;
        ensure(self.spacing_y > 0.0, "helix spacing_y must be positive")
    }
}

/// Compute double helix target positions, one per item.
pub fn compute_helix_layout(item_count: usize, config: &HelixConfig) -> Vec<Vec3> {
    let spacing_y = f64::from(config.spacing_y);
    let angle_step = f64::from(config.angle_step);
    let top = (item_count as f64 * spacing_y) / 2.0;

    (0..item_count)
        .map(|i| {
            let theta = i as f64 * angle_step;
            let strand = f64::from(config.strand_radius(i));
            let y = -(i as f64) * spacing_y + top;
            Vec3::new(
                (theta.sin() * strand) as f32,
                y as f32,
                (theta.cos() * strand) as f32,
            )
        })
        .collect()
}

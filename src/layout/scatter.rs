//! Starting positions for a freshly loaded item batch.
//!
//! New items appear scattered uniformly through a cube around the origin and
//! then fly into the initial arrangement. The scatter is seeded so a given
//! seed always produces the same cloud.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::ensure;
use crate::error::Result;

/// Configuration for the initial scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Half-width of the cube; coordinates fall in `[-extent, extent)` (default: 2000).
    pub extent: f32,
    /// Base RNG seed (default: 0).
    pub seed: u64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            extent: 2000.0,
            seed: 0,
        }
    }
}

impl ScatterConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        ensure(
            self.extent.is_finite() && self.extent > 0.0,
            "scatter extent must be finite and positive",
        )
    }
}

/// Scatter `item_count` positions uniformly through the configured cube.
///
/// `generation` is mixed into the seed so successive reloads start from
/// different clouds while staying reproducible.
pub fn scatter(item_count: usize, config: &ScatterConfig, generation: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(generation));
    let e = config.extent;

    (0..item_count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-e..e),
                rng.random_range(-e..e),
                rng.random_range(-e..e),
            )
        })
        .collect()
}

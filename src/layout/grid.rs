//! Fixed 3D lattice layout.
//!
//! Items are enumerated x-major: index increments fastest over z, then y,
//! then x, so `i = x * (rows * layers) + y * layers + z`. Enumeration stops
//! at the item count or the lattice capacity, whichever comes first.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ensure;
use crate::error::Result;

/// Configuration for the grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells along x (default: 5).
    pub columns: u32,
    /// Cells along y (default: 4).
    pub rows: u32,
    /// Cells along z (default: 10).
    pub layers: u32,
    /// Distance between neighbouring cell centers (default: 350).
    pub spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 4,
            layers: 10,
            spacing: 350.0,
        }
    }
}

impl GridConfig {
    /// Number of cells in the lattice, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        self.cells()
            .and_then(|cells| usize::try_from(cells).ok())
            .unwrap_or(usize::MAX)
    }

    fn cells(&self) -> Option<u64> {
        u64::from(self.columns)
            .checked_mul(u64::from(self.rows))?
            .checked_mul(u64::from(self.layers))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(
            self.columns > 0 && self.rows > 0 && self.layers > 0,
            "grid extents must be positive",
        )?;
        ensure(self.cells().is_some(), "grid has too many cells")?;
        ensure(
            self.spacing.is_finite() && self.spacing > 0.0,
            "grid spacing must be positive",
        )
    }
}

/// Compute grid target positions for up to `item_count` items.
pub fn compute_grid_layout(item_count: usize, config: &GridConfig) -> Vec<Vec3> {
    let count = item_count.min(config.capacity());
    let mut positions = Vec::with_capacity(count);

    let center = Vec3::new(
        (config.columns as f32 - 1.0) / 2.0,
        (config.rows as f32 - 1.0) / 2.0,
        (config.layers as f32 - 1.0) / 2.0,
    );

    'fill: for x in 0..config.columns {
        for y in 0..config.rows {
            for z in 0..config.layers {
                if positions.len() == count {
                    break 'fill;
                }
                let cell = Vec3::new(x as f32, y as f32, z as f32);
                positions.push((cell - center) * config.spacing);
            }
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(compute_grid_layout(0, &GridConfig::default()).is_empty());
    }

    #[test]
    fn test_enumeration_order() {
        let positions = compute_grid_layout(200, &GridConfig::default());
        assert_eq!(positions[0], Vec3::new(-700.0, -525.0, -1575.0));
        // z varies fastest.
        assert_eq!(positions[1], Vec3::new(-700.0, -525.0, -1225.0));
        // Then y.
        assert_eq!(positions[10], Vec3::new(-700.0, -175.0, -1575.0));
        // Then x.
        assert_eq!(positions[40], Vec3::new(-350.0, -525.0, -1575.0));
        assert_eq!(positions[199], Vec3::new(700.0, 525.0, 1575.0));
    }

    #[test]
    fn test_full_lattice_is_distinct() {
        let positions = compute_grid_layout(200, &GridConfig::default());
        assert_eq!(positions.len(), 200);

        let mut keys: Vec<(i32, i32, i32)> = positions
            .iter()
            .map(|p| (p.x as i32, (p.y * 2.0) as i32, (p.z * 2.0) as i32))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 200);

        let mut xs: Vec<i32> = positions.iter().map(|p| p.x as i32).collect();
        xs.sort_unstable();
        xs.dedup();
        assert_eq!(xs, vec![-700, -350, 0, 350, 700]);

        let mut ys: Vec<i32> = positions.iter().map(|p| (p.y * 2.0) as i32).collect();
        ys.sort_unstable();
        ys.dedup();
        assert_eq!(ys.len(), 4);

        let mut zs: Vec<i32> = positions.iter().map(|p| (p.z * 2.0) as i32).collect();
        zs.sort_unstable();
        zs.dedup();
        assert_eq!(zs.len(), 10);
    }

    #[test]
    fn test_stops_at_item_count() {
        let positions = compute_grid_layout(13, &GridConfig::default());
        assert_eq!(positions.len(), 13);
        assert_eq!(positions[12], Vec3::new(-700.0, -175.0, -875.0));
    }

    #[test]
    fn test_stops_at_capacity() {
        assert_eq!(compute_grid_layout(500, &GridConfig::default()).len(), 200);
    }

    #[test]
    fn test_validate_rejects_overflowing_lattice() {
        let config = GridConfig {
            columns: 3_000_000,
            rows: 3_000_000,
            layers: 3_000_000,
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.capacity(), usize::MAX);
        assert_eq!(compute_grid_layout(2, &config).len(), 2);
    }

    #[test]
    fn test_validate_rejects_non_positive_spacing() {
        for spacing in [0.0, -350.0] {
            let config = GridConfig {
                spacing,
                ..GridConfig::default()
            };
            assert!(config.validate().is_err(), "spacing {spacing}");
        }
    }
}

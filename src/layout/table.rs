//! Periodic-table style layout.
//!
//! Items fill a fixed `columns x rows` grid in row-major order, centered on
//! the origin in the z = 0 plane. The grid never grows: items past its
//! capacity get no slot and keep whatever position they last held.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ensure;
use crate::error::Result;

/// Configuration for the table layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of columns (default: 20).
    pub columns: u32,
    /// Number of rows (default: 10).
    pub rows: u32,
    /// Horizontal distance between column centers (default: 200).
    pub spacing_x: f32,
    /// Vertical distance between row centers (default: 220).
    pub spacing_y: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 10,
            spacing_x: 200.0,
            spacing_y: 220.0,
        }
    }
}

impl TableConfig {
    /// Number of slots in the table, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        let slots = u64::from(self.columns) * u64::from(self.rows);
        usize::try_from(slots).unwrap_or(usize::MAX)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        ensure(self.columns > 0 && self.rows > 0, "table needs at least one row and column")?;
        ensure(
            self.spacing_x.is_finite()
                && self.spacing_y.is_finite()
                && self.spacing_x > 0.0
                && self.spacing_y > 0.0,
            "table spacing must be positive",
        )
    }
}

/// Compute table target positions for `item_count` items.
///
/// Returns `min(item_count, capacity)` positions. Index `i` lands at
/// column `i % columns`, row `i / columns`; row 0 is the top row.
pub fn compute_table_layout(item_count: usize, config: &TableConfig) -> Vec<Vec3> {
    let count = item_count.min(config.capacity());
    let columns = config.columns as usize;

    // With the defaults these are 9.5 and 4.5.
    let center_col = (config.columns as f32 - 1.0) / 2.0;
    let center_row = (config.rows as f32 - 1.0) / 2.0;

    (0..count)
        .map(|i| {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            Vec3::new(
                (col - center_col) * config.spacing_x,
                (center_row - row) * config.spacing_y,
                0.0,
            )
        })
        .collect()
}

//! Layout algorithms for item arrangements.
//!
//! Each generator is a pure function of the item count and its config: the
//! same inputs always produce bit-identical target positions. Table and grid
//! have a fixed capacity and return fewer positions than items when the batch
//! is larger; callers leave the surplus items where they are.

pub mod arrangement;
pub mod grid;
pub mod helix;
pub mod scatter;
pub mod sphere;
pub mod table;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

pub use arrangement::Arrangement;
pub use grid::{GridConfig, compute_grid_layout};
pub use helix::{HelixConfig, compute_helix_layout};
pub use scatter::{ScatterConfig, scatter};
pub use sphere::{SphereConfig, compute_sphere_layout};
pub use table::{TableConfig, compute_table_layout};

/// Geometry parameters for all four arrangements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Table parameters.
    pub table: TableConfig,
    /// Sphere parameters.
    pub sphere: SphereConfig,
    /// Helix parameters.
    pub helix: HelixConfig,
    /// Grid parameters.
    pub grid: GridConfig,
}

impl LayoutConfig {
    /// Check every sub-config.
    pub fn validate(&self) -> Result<()> {
        self.table.validate()?;
        self.sphere.validate()?;
        self.helix.validate()?;
        self.grid.validate()
    }
}

/// Compute the target positions of `arrangement` for `item_count` items.
pub fn compute_layout(arrangement: Arrangement, item_count: usize, config: &LayoutConfig) -> Vec<Vec3> {
    match arrangement {
        Arrangement::Table => compute_table_layout(item_count, &config.table),
        Arrangement::Sphere => compute_sphere_layout(item_count, &config.sphere),
        Arrangement::Helix => compute_helix_layout(item_count, &config.helix),
        Arrangement::Grid => compute_grid_layout(item_count, &config.grid),
    }
}

pub(crate) fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(LayoutError::InvalidConfig(message.to_string()))
    }
}

//! LayoutEngine - target positions for every arrangement.
//!
//! The engine tracks the current item count and holds one target set per
//! arrangement. All four sets are recomputed together whenever the count
//! changes, so a lookup never returns targets built for a different batch.

use glam::Vec3;

use crate::layout::{Arrangement, LayoutConfig, compute_layout};

/// Owns the target position sets for the current item count.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    item_count: usize,
    /// Indexed by [`Arrangement::slot`].
    targets: [Vec<Vec3>; 4],
}

impl LayoutEngine {
    /// Create an engine for an empty batch.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            item_count: 0,
            targets: Default::default(),
        }
    }

    /// Recompute every arrangement for `item_count` items.
    pub fn reload(&mut self, item_count: usize) {
        for arrangement in Arrangement::ALL {
            self.targets[arrangement.slot()] = compute_layout(arrangement, item_count, &self.config);
        }
        self.item_count = item_count;

        log::debug!(
            "layout: recomputed {item_count} items (table {}, sphere {}, helix {}, grid {})",
            self.targets[Arrangement::Table.slot()].len(),
            self.targets[Arrangement::Sphere.slot()].len(),
            self.targets[Arrangement::Helix.slot()].len(),
            self.targets[Arrangement::Grid.slot()].len(),
        );
    }

    /// Target positions of `arrangement`; may be shorter than the item count.
    pub fn targets(&self, arrangement: Arrangement) -> &[Vec3] {
        &self.targets[arrangement.slot()]
    }

    /// Item count the targets were computed for.
    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

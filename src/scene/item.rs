//! Live item positions.
//!
//! Positions are stored as a Structure of Arrays so each axis can be handed
//! to the renderer as one contiguous `f32` buffer. Items are identified by
//! their index in `0..len()`; the whole batch is replaced on reload.

use glam::Vec3;

use crate::error::{LayoutError, Result};

/// Per-item 3D positions in SoA layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPositions {
    pos_x: Vec<f32>,
    pos_y: Vec<f32>,
    pos_z: Vec<f32>,
}

impl ItemPositions {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from positions, rejecting NaN or infinite coordinates.
    pub fn from_positions(positions: &[Vec3]) -> Result<Self> {
        if let Some((index, p)) = positions.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(LayoutError::NonFinitePosition {
                index,
                x: p.x,
                y: p.y,
                z: p.z,
            });
        }

        Ok(Self {
            pos_x: positions.iter().map(|p| p.x).collect(),
            pos_y: positions.iter().map(|p| p.y).collect(),
            pos_z: positions.iter().map(|p| p.z).collect(),
        })
    }

    /// Build a buffer from a flat `[x0, y0, z0, x1, ...]` slice.
    pub fn from_interleaved(flat: &[f32]) -> Result<Self> {
        if flat.len() % 3 != 0 {
            return Err(LayoutError::MalformedPositions(flat.len()));
        }
        let positions: Vec<Vec3> = flat.chunks_exact(3).map(Vec3::from_slice).collect();
        Self::from_positions(&positions)
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos_x.len()
    }

    /// Whether the batch is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos_x.is_empty()
    }

    /// Position of item `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        if index >= self.len() {
            return None;
        }
        Some(Vec3::new(self.pos_x[index], self.pos_y[index], self.pos_z[index]))
    }

    /// Position of item `index`, or `ItemOutOfRange`.
    pub fn try_get(&self, index: usize) -> Result<Vec3> {
        self.get(index).ok_or(LayoutError::ItemOutOfRange {
            index,
            count: self.len(),
        })
    }

    /// Overwrite the position of item `index`. Out-of-range indices are ignored.
    #[inline]
    pub(crate) fn set(&mut self, index: usize, position: Vec3) {
        if index < self.len() {
            self.pos_x[index] = position.x;
            self.pos_y[index] = position.y;
            self.pos_z[index] = position.z;
        }
    }

    /// Iterate positions in index order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.pos_x
            .iter()
            .zip(&self.pos_y)
            .zip(&self.pos_z)
            .map(|((&x, &y), &z)| Vec3::new(x, y, z))
    }

    /// X positions slice.
    pub fn positions_x(&self) -> &[f32] {
        &self.pos_x
    }

    /// Y positions slice.
    pub fn positions_y(&self) -> &[f32] {
        &self.pos_y
    }

    /// Z positions slice.
    pub fn positions_z(&self) -> &[f32] {
        &self.pos_z
    }

    /// Copy out as `[x0, y0, z0, x1, y1, z1, ...]`.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(self.len() * 3);
        for p in self.iter() {
            flat.extend_from_slice(&p.to_array());
        }
        flat
    }

    /// Axis-aligned bounds of all items as `(min, max)`, or None when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

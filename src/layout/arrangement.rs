//! The named arrangements an item batch can be laid out in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// One of the four fixed arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// Flat periodic-table grid.
    Table,
    /// Golden-section spiral on a sphere.
    Sphere,
    /// Two interleaved strands around the y axis.
    Helix,
    /// Fixed 3D lattice.
    Grid,
}

impl Arrangement {
    /// All arrangements, in slot order.
    pub const ALL: [Arrangement; 4] = [
        Arrangement::Table,
        Arrangement::Sphere,
        Arrangement::Helix,
        Arrangement::Grid,
    ];

    /// Dense index into per-arrangement storage.
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Arrangement::Table => 0,
            Arrangement::Sphere => 1,
            Arrangement::Helix => 2,
            Arrangement::Grid => 3,
        }
    }

    /// Lowercase name, as used by the JS API.
    pub fn name(self) -> &'static str {
        match self {
            Arrangement::Table => "table",
            Arrangement::Sphere => "sphere",
            Arrangement::Helix => "helix",
            Arrangement::Grid => "grid",
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arrangement {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Arrangement::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LayoutError::UnknownArrangement(s.to_string()))
    }
}

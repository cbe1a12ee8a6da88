//! Tile selectors and the static tile configuration.
//!
//! The generator never interprets a `TileId`; it only picks which one the
//! renderer should draw. `TileCatalogue` bundles the per-biome base tiles,
//! transition tables and decoration rules.

pub mod table;
pub mod decoration;
pub mod catalogue;

pub use table::TransitionTable;
pub use decoration::DecorationRule;
pub use catalogue::TileCatalogue;

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Opaque index into the renderer's tile sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TileId(pub u16);

/// Which orthogonal neighbors differ from a cell's biome.
///
/// Bit weights: N=1, E=2, S=4, W=8. Zero means the cell is surrounded on
/// all four sides by its own biome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct EdgeMask(pub u8);

impl EdgeMask {
    pub const INTERIOR: Self = Self(0);
    pub const NORTH: Self = Self(1);
    pub const EAST: Self = Self(2);
    pub const SOUTH: Self = Self(4);
    pub const WEST: Self = Self(8);

    /// Direction bits paired with their neighbor offsets, in N, E, S, W order.
    pub const DIRECTIONS: [(EdgeMask, (i32, i32)); 4] = [
        (Self::NORTH, (0, -1)),
        (Self::EAST, (1, 0)),
        (Self::SOUTH, (0, 1)),
        (Self::WEST, (-1, 0)),
    ];

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_interior(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: EdgeMask) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for EdgeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Inner corners of an interior cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Corner {
    /// Order in which inner-corner conditions are tested; first match wins.
    pub const PRIORITY: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::SouthWest,
    ];

    /// Offsets of the two orthogonal neighbors flanking this corner, then
    /// the diagonal neighbor.
    pub fn offsets(self) -> [(i32, i32); 3] {
        match self {
            Corner::NorthWest => [(0, -1), (-1, 0), (-1, -1)],
            Corner::NorthEast => [(0, -1), (1, 0), (1, -1)],
            Corner::SouthEast => [(0, 1), (1, 0), (1, 1)],
            Corner::SouthWest => [(0, 1), (-1, 0), (-1, 1)],
        }
    }
}

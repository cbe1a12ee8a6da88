//! Per-biome transition tables: edge masks and inner corners to tiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Corner, EdgeMask, TileId};
use crate::core::{Error, Result};
use crate::terrain::Biome;

/// Inner-corner tiles of one biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerCornerTiles {
    pub nw: TileId,
    pub ne: TileId,
    pub se: TileId,
    pub sw: TileId,
}

impl InnerCornerTiles {
    pub fn get(&self, corner: Corner) -> TileId {
        match corner {
            Corner::NorthWest => self.nw,
            Corner::NorthEast => self.ne,
            Corner::SouthEast => self.se,
            Corner::SouthWest => self.sw,
        }
    }
}

/// Transition tiles for one biome.
///
/// Only the masks whose shapes exist on the tile sheet are populated; a
/// mask with no entry leaves the base tile in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    /// Non-zero edge mask -> tile.
    pub edges: BTreeMap<u8, TileId>,
    pub inner: InnerCornerTiles,
}

impl TransitionTable {
    /// Build a table from raw sheet indices.
    ///
    /// `inner` is ordered NW, NE, SE, SW.
    pub fn from_sheet(edges: &[(u8, u16)], inner: [u16; 4]) -> Self {
        Self {
            edges: edges.iter().map(|&(mask, tile)| (mask, TileId(tile))).collect(),
            inner: InnerCornerTiles {
                nw: TileId(inner[0]),
                ne: TileId(inner[1]),
                se: TileId(inner[2]),
                sw: TileId(inner[3]),
            },
        }
    }

    /// Tile for an edge mask, if the sheet has that shape.
    pub fn edge(&self, mask: EdgeMask) -> Option<TileId> {
        self.edges.get(&mask.bits()).copied()
    }

    pub fn inner_corner(&self, corner: Corner) -> TileId {
        self.inner.get(corner)
    }

    /// Edge keys must be non-zero 4-bit masks.
    pub fn validate(&self, biome: Biome) -> Result<()> {
        match self.edges.keys().find(|&&mask| mask == 0 || mask > 15) {
            Some(&mask) => Err(Error::InvalidEdgeMask { biome, mask }),
            None => Ok(()),
        }
    }
}

//! Transition resolution: picks edge, corner and inner-corner tiles so
//! biome boundaries render seamlessly.
//!
//! Reads the stabilized biome grid and never mutates it.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::terrain::Biome;
use crate::tiles::{Corner, EdgeMask, TileCatalogue, TileId, TransitionTable};

/// Tile decision for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileChoice {
    /// Background cell: only the background layer shows.
    Background,
    /// The biome's base tile stands.
    Base,
    /// Edge or outer-corner tile selected by the neighbor mask.
    Edge { mask: EdgeMask, tile: TileId },
    /// Interior cell with a differing diagonal neighbor.
    InnerCorner { corner: Corner, tile: TileId },
}

impl TileChoice {
    /// Concrete tile to draw for a cell of `biome`.
    pub fn tile(self, biome: Biome, catalogue: &TileCatalogue) -> Option<TileId> {
        match self {
            TileChoice::Background => catalogue.background_tile(),
            TileChoice::Base => catalogue.base_tile(biome),
            TileChoice::Edge { tile, .. } | TileChoice::InnerCorner { tile, .. } => Some(tile),
        }
    }

    /// True if the cell draws something other than its base tile.
    pub fn is_override(self) -> bool {
        matches!(self, TileChoice::Edge { .. } | TileChoice::InnerCorner { .. })
    }
}

/// Neighbor mask of `(x, y)` against `biome`. Off-grid counts as different.
pub fn edge_mask(grid: &Grid<Biome>, x: usize, y: usize, biome: Biome) -> EdgeMask {
    let mut mask = EdgeMask::INTERIOR;
    for (bit, (dx, dy)) in EdgeMask::DIRECTIONS {
        if !grid.neighbor_is(x, y, dx, dy, &biome) {
            mask |= bit;
        }
    }
    mask
}

/// First inner corner, in priority order, whose two flanking neighbors are
/// `biome` while the diagonal is not.
pub fn inner_corner(grid: &Grid<Biome>, x: usize, y: usize, biome: Biome) -> Option<Corner> {
    Corner::PRIORITY.into_iter().find(|corner| {
        let [a, b, diagonal] = corner.offsets();
        grid.neighbor_is(x, y, a.0, a.1, &biome)
            && grid.neighbor_is(x, y, b.0, b.1, &biome)
            && !grid.neighbor_is(x, y, diagonal.0, diagonal.1, &biome)
    })
}

/// Resolve a single cell against its biome's table.
pub fn resolve_cell(grid: &Grid<Biome>, x: usize, y: usize, table: &TransitionTable) -> TileChoice {
    let Some(biome) = grid.get(x, y) else {
        return TileChoice::Background;
    };

    let mask = edge_mask(grid, x, y, biome);
    if mask.is_interior() {
        return match inner_corner(grid, x, y, biome) {
            Some(corner) => TileChoice::InnerCorner {
                corner,
                tile: table.inner_corner(corner),
            },
            None => TileChoice::Base,
        };
    }

    match table.edge(mask) {
        Some(tile) => TileChoice::Edge { mask, tile },
        None => TileChoice::Base,
    }
}

/// Resolves tile choices for a whole grid.
pub struct TransitionResolver<'a> {
    catalogue: &'a TileCatalogue,
}

impl<'a> TransitionResolver<'a> {
    pub fn new(catalogue: &'a TileCatalogue) -> Self {
        Self { catalogue }
    }

    /// One decision per cell. Background cells never get a lookup; a biome
    /// without a table keeps its base tile.
    pub fn resolve(&self, grid: &Grid<Biome>) -> Grid<TileChoice> {
        let choices = grid.map(|x, y, &biome| {
            if biome.is_background() {
                return TileChoice::Background;
            }
            match self.catalogue.transitions(biome) {
                Some(table) => resolve_cell(grid, x, y, table),
                None => TileChoice::Base,
            }
        });

        log::debug!(
            "Resolved transitions: {} overridden of {} cells",
            choices.iter().filter(|(_, _, c)| c.is_override()).count(),
            choices.len()
        );
        choices
    }
}

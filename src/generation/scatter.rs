//! Decoration scatter: independent per-rule rolls for every cell.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::terrain::Biome;
use crate::tiles::{TileCatalogue, TileId};

/// A decoration drawn on top of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationPlacement {
    pub x: usize,
    pub y: usize,
    pub tile: TileId,
}

/// Scatters decorations over a biome grid.
///
/// Each rule of a cell's biome fires when a uniform draw in [0, 1) falls
/// below its chance. Several rules may fire on the same cell; overlap is
/// accepted.
pub struct DecorationScatter<'a> {
    catalogue: &'a TileCatalogue,
}

impl<'a> DecorationScatter<'a> {
    pub fn new(catalogue: &'a TileCatalogue) -> Self {
        Self { catalogue }
    }

    /// Roll every rule for one cell.
    pub fn scatter_cell<R: Rng + ?Sized>(
        &self,
        x: usize,
        y: usize,
        biome: Biome,
        rng: &mut R,
        out: &mut Vec<DecorationPlacement>,
    ) {
        for rule in self.catalogue.decorations(biome) {
            let roll: f64 = rng.random();
            if roll < rule.chance {
                out.push(DecorationPlacement { x, y, tile: rule.tile });
            }
        }
    }

    /// Fresh placement list for the whole grid, row-major.
    pub fn scatter<R: Rng + ?Sized>(&self, grid: &Grid<Biome>, rng: &mut R) -> Vec<DecorationPlacement> {
        let mut placements = Vec::new();
        for (x, y, &biome) in grid.iter() {
            self.scatter_cell(x, y, biome, rng, &mut placements);
        }
        placements
    }
}

//! Decoration placement rules.

use serde::{Deserialize, Serialize};

use super::TileId;
use crate::core::{Error, Result};
use crate::terrain::Biome;

/// One decoration candidate for a biome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorationRule {
    /// Tile drawn on top of the cell
    pub tile: TileId,
    /// Independent chance per cell, in [0, 1)
    pub chance: f64,
}

impl DecorationRule {
    pub fn new(tile: u16, chance: f64) -> Self {
        Self {
            tile: TileId(tile),
            chance,
        }
    }

    pub fn validate(&self, biome: Biome) -> Result<()> {
        if self.chance.is_finite() && (0.0..1.0).contains(&self.chance) {
            Ok(())
        } else {
            Err(Error::InvalidProbability { biome, chance: self.chance })
        }
    }
}

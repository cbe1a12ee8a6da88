//! Tile catalogue: base tiles, transition tables and decoration rules per biome.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DecorationRule, TileId, TransitionTable};
use crate::core::{Error, Result};
use crate::terrain::Biome;

/// Static tile configuration consumed by the resolver and the scatter pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileCatalogue {
    /// Plain tile per biome. The background entry fills the whole map.
    pub base: BTreeMap<Biome, TileId>,
    /// Transition tables; the background biome has none.
    pub transitions: BTreeMap<Biome, TransitionTable>,
    /// Decoration candidates, tested in order.
    pub decorations: BTreeMap<Biome, Vec<DecorationRule>>,
}

impl TileCatalogue {
    /// Get the base tile for a biome.
    pub fn base_tile(&self, biome: Biome) -> Option<TileId> {
        self.base.get(&biome).copied()
    }

    /// Tile drawn under everything.
    pub fn background_tile(&self) -> Option<TileId> {
        self.base_tile(Biome::BACKGROUND)
    }

    /// Transition table for a biome. Always `None` for the background.
    pub fn transitions(&self, biome: Biome) -> Option<&TransitionTable> {
        if biome.is_background() {
            return None;
        }
        self.transitions.get(&biome)
    }

    /// Decoration rules for a biome (empty for the background).
    pub fn decorations(&self, biome: Biome) -> &[DecorationRule] {
        if biome.is_background() {
            return &[];
        }
        self.decorations.get(&biome).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that every biome in `producible` is fully configured.
    ///
    /// The background biome only needs a base tile.
    pub fn validate(&self, producible: impl IntoIterator<Item = Biome>) -> Result<()> {
        if self.background_tile().is_none() {
            return Err(Error::MissingBaseTile(Biome::BACKGROUND));
        }

        for biome in producible {
            if self.base_tile(biome).is_none() {
                return Err(Error::MissingBaseTile(biome));
            }
            if biome.is_background() {
                continue;
            }
            self.transitions
                .get(&biome)
                .ok_or(Error::MissingTransitionTable(biome))?
                .validate(biome)?;
            let rules = self
                .decorations
                .get(&biome)
                .ok_or(Error::MissingDecorationRules(biome))?;
            for rule in rules {
                rule.validate(biome)?;
            }
        }

        Ok(())
    }
}

impl Default for TileCatalogue {
    /// Indices of the 2x map-pack tile sheet (128px tiles).
    fn default() -> Self {
        let base = BTreeMap::from([
            (Biome::Water, TileId(203)),
            (Biome::Sand, TileId(18)),
            (Biome::Grass, TileId(23)),
            (Biome::Rock, TileId(28)),
            (Biome::Dirt, TileId(91)),
            (Biome::Snow, TileId(86)),
        ]);

        // Edge masks: N, E, S, W, NE, SE, SW, NW
        let transitions = BTreeMap::from([
            (
                Biome::Sand,
                TransitionTable::from_sheet(
                    &[(1, 1), (2, 19), (4, 35), (8, 17), (3, 2), (6, 36), (12, 34), (9, 0)],
                    [21, 20, 3, 4],
                ),
            ),
            (
                Biome::Grass,
                TransitionTable::from_sheet(
                    &[(1, 6), (2, 24), (4, 40), (8, 22), (3, 7), (6, 41), (12, 39), (9, 5)],
                    [26, 25, 8, 9],
                ),
            ),
            (
                Biome::Rock,
                TransitionTable::from_sheet(
                    &[(1, 11), (2, 29), (4, 45), (8, 27), (3, 12), (6, 46), (12, 44), (9, 10)],
                    [31, 30, 13, 14],
                ),
            ),
            (
                Biome::Dirt,
                TransitionTable::from_sheet(
                    &[(1, 74), (2, 92), (4, 108), (8, 90), (3, 75), (6, 109), (12, 107), (9, 73)],
                    [94, 93, 76, 77],
                ),
            ),
            (
                Biome::Snow,
                TransitionTable::from_sheet(
                    &[(1, 69), (2, 87), (4, 103), (8, 85), (3, 70), (6, 104), (12, 102), (9, 68)],
                    [89, 88, 71, 72],
                ),
            ),
        ]);

        let decorations = BTreeMap::from([
            (
                Biome::Sand,
                vec![
                    DecorationRule::new(37, 0.03),
                    DecorationRule::new(38, 0.01),
                    DecorationRule::new(54, 0.01),
                    DecorationRule::new(55, 0.005),
                ],
            ),
            (
                Biome::Grass,
                vec![
                    DecorationRule::new(42, 0.03),
                    DecorationRule::new(43, 0.01),
                    DecorationRule::new(59, 0.01),
                    DecorationRule::new(60, 0.01),
                ],
            ),
            (
                Biome::Rock,
                vec![
                    DecorationRule::new(47, 0.03),
                    DecorationRule::new(48, 0.01),
                    DecorationRule::new(64, 0.005),
                    DecorationRule::new(65, 0.01),
                ],
            ),
            (
                Biome::Dirt,
                vec![
                    DecorationRule::new(110, 0.005),
                    DecorationRule::new(111, 0.01),
                    DecorationRule::new(127, 0.005),
                    DecorationRule::new(128, 0.01),
                ],
            ),
            (
                Biome::Snow,
                vec![
                    DecorationRule::new(105, 0.005),
                    DecorationRule::new(106, 0.06),
                    DecorationRule::new(122, 0.01),
                    DecorationRule::new(123, 0.01),
                ],
            ),
        ]);

        Self {
            base,
            transitions,
            decorations,
        }
    }
}

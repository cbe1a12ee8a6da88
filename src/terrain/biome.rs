//! Biome labels and noise-band classification

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Biome types
///
/// Declared in band order: each variant covers the noise range just above
/// the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Water,
    Sand,
    Grass,
    Rock,
    Dirt,
    Snow,
}

impl Biome {
    /// Every biome, in band order.
    pub const ALL: [Biome; 6] = [
        Biome::Water,
        Biome::Sand,
        Biome::Grass,
        Biome::Rock,
        Biome::Dirt,
        Biome::Snow,
    ];

    /// The void biome: no transitions, no decoration, pruning target.
    pub const BACKGROUND: Biome = Biome::Water;

    /// Whether this is the background biome
    pub fn is_background(self) -> bool {
        self == Self::BACKGROUND
    }

    /// Single-character glyph for text previews.
    pub fn glyph(self) -> char {
        match self {
            Biome::Water => '~',
            Biome::Sand => '.',
            Biome::Grass => '"',
            Biome::Rock => '^',
            Biome::Dirt => ':',
            Biome::Snow => '*',
        }
    }
}

impl Default for Biome {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

/// Ordered half-open threshold bands mapping a noise value to a biome.
///
/// `thresholds[i]` is the inclusive lower bound of `Biome::ALL[i + 1]`;
/// anything below `thresholds[0]` is water.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeBands {
    pub thresholds: [f64; 5],
}

impl Default for BiomeBands {
    fn default() -> Self {
        Self {
            thresholds: [-0.4, -0.2, 0.2, 0.5, 0.7],
        }
    }
}

impl BiomeBands {
    /// Create bands, rejecting thresholds that are not finite and strictly ascending.
    pub fn new(thresholds: [f64; 5]) -> Result<Self> {
        let bands = Self { thresholds };
        bands.validate()?;
        Ok(bands)
    }

    /// Check that the bands are exhaustive and non-overlapping with no empty band.
    pub fn validate(&self) -> Result<()> {
        let finite = self.thresholds.iter().all(|t| t.is_finite());
        let ascending = self.thresholds.windows(2).all(|w| w[0] < w[1]);
        if finite && ascending {
            Ok(())
        } else {
            Err(Error::InvalidThresholds(self.thresholds))
        }
    }

    /// Map a noise sample to its biome.
    pub fn classify(&self, value: f64) -> Biome {
        self.thresholds
            .iter()
            .position(|&lower| value < lower)
            .map_or(Biome::Snow, |band| Biome::ALL[band])
    }

    /// Biomes this classifier can emit. With validated bands every band is
    /// non-empty, so this is the whole enumeration.
    pub fn producible(&self) -> impl Iterator<Item = Biome> {
        Biome::ALL.into_iter()
    }
}

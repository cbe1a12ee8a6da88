//! Map generation pipeline: builds a tile map from seeded noise.
//!
//! The pipeline runs in a fixed order:
//! 1. Biome classification (noise sample per cell → biome band)
//! 2. Spur pruning to a fixed point (in place)
//! 3. Transition resolution (edge masks + inner corners → tile choices)
//! 4. Decoration scatter (per-rule random rolls)
//!
//! Stages 1-3 are fully determined by seed and scale. Decoration draws from
//! an unseeded RNG unless the caller supplies one.

pub mod config;
pub mod classify;
pub mod prune;
pub mod transition;
pub mod scatter;

pub use config::{GenerationConfig, ZoomSettings};
pub use classify::classify_grid;
pub use prune::{prune_spurs, PruneReport};
pub use transition::{TileChoice, TransitionResolver};
pub use scatter::{DecorationPlacement, DecorationScatter};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::grid::Grid;
use crate::terrain::{Biome, NoiseParams, NoiseSource};
use crate::tiles::{TileCatalogue, TileId};

/// Result of one generation: a read-only snapshot for the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMap {
    pub seed: u32,
    pub scale: f64,
    /// Stabilized biome per cell.
    pub biomes: Grid<Biome>,
    /// Tile decision per cell.
    pub tiles: Grid<TileChoice>,
    pub decorations: Vec<DecorationPlacement>,
    pub prune: PruneReport,
}

impl GeneratedMap {
    /// Concrete ground tile for a cell, resolved against `catalogue`.
    pub fn tile_at(&self, x: usize, y: usize, catalogue: &TileCatalogue) -> Option<TileId> {
        let biome = self.biomes.get(x, y)?;
        self.tiles.get(x, y)?.tile(biome, catalogue)
    }

    /// Number of cells of each biome, in band order.
    pub fn biome_counts(&self) -> [(Biome, usize); 6] {
        Biome::ALL.map(|b| (b, self.biomes.count(&b)))
    }
}

/// Orchestrates map generation and owns the current map.
///
/// Not reentrant: `generate` takes `&mut self`, so overlapping regenerations
/// on one instance are ruled out by the borrow checker.
pub struct MapGenerator {
    config: GenerationConfig,
    noise: NoiseSource,
    params: NoiseParams,
    current: Option<GeneratedMap>,
}

impl MapGenerator {
    /// Create a generator, validating the whole configuration up front.
    ///
    /// No map exists until the first `generate` call.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        let params = config.noise;

        log::info!(
            "Map generator ready: {}x{} cells, seed {}, scale {}",
            config.width, config.height, params.seed, params.scale
        );

        Ok(Self {
            noise: NoiseSource::new(params.seed),
            params,
            config,
            current: None,
        })
    }

    /// Regenerate the map. `None` reuses the stored seed.
    pub fn generate(&mut self, seed: Option<u32>, scale: f64) -> Result<&GeneratedMap> {
        self.generate_with_rng(seed, scale, &mut rand::rng())
    }

    /// Regenerate with a caller-supplied random source for decoration.
    ///
    /// On error nothing is replaced: the previous map and parameters stay.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        seed: Option<u32>,
        scale: f64,
        rng: &mut R,
    ) -> Result<&GeneratedMap> {
        if !NoiseParams::scale_is_valid(scale) {
            return Err(Error::InvalidScale(scale));
        }
        let seed = seed.unwrap_or(self.params.seed);
        self.noise.seed(seed);

        let mut biomes = classify_grid(
            &self.noise,
            &self.config.bands,
            self.config.width,
            self.config.height,
            scale,
        )?;
        let prune = prune_spurs(&mut biomes);
        let tiles = TransitionResolver::new(&self.config.tiles).resolve(&biomes);
        let decorations = DecorationScatter::new(&self.config.tiles).scatter(&biomes, rng);

        log::info!(
            "Generated {}x{} map (seed {}, scale {:.4}): {} cells pruned in {} passes, {} decorations",
            biomes.width(),
            biomes.height(),
            seed,
            scale,
            prune.converted,
            prune.passes,
            decorations.len()
        );

        self.params = NoiseParams { seed, scale };
        Ok(&*self.current.insert(GeneratedMap {
            seed,
            scale,
            biomes,
            tiles,
            decorations,
            prune,
        }))
    }

    /// Regenerate at the current seed and scale.
    pub fn regenerate(&mut self) -> Result<&GeneratedMap> {
        self.generate(None, self.params.scale)
    }

    /// Regenerate with a fresh random seed at the current scale.
    pub fn regenerate_new_seed(&mut self) -> Result<&GeneratedMap> {
        let seed = rand::random::<u32>();
        self.generate(Some(seed), self.params.scale)
    }

    /// Shrink the scale (larger features), same seed.
    pub fn zoom_in(&mut self) -> Result<&GeneratedMap> {
        let zoom = self.config.zoom;
        let scaled = self.params.scale * zoom.zoom_in_factor;
        let scale = if scaled < zoom.min_scale {
            log::warn!("Scale clamped to minimum {}", zoom.min_scale);
            zoom.min_scale
        } else {
            scaled
        };
        self.generate(None, scale)
    }

    /// Grow the scale (smaller features), same seed.
    pub fn zoom_out(&mut self) -> Result<&GeneratedMap> {
        let scale = self.params.scale * self.config.zoom.zoom_out_factor;
        self.generate(None, scale)
    }

    /// Current map, if one has been generated.
    pub fn map(&self) -> Option<&GeneratedMap> {
        self.current.as_ref()
    }

    /// Stabilized biome grid of the current map.
    pub fn grid(&self) -> Option<&Grid<Biome>> {
        self.current.as_ref().map(|m| &m.biomes)
    }

    /// Tile decisions of the current map.
    pub fn tiles(&self) -> Option<&Grid<TileChoice>> {
        self.current.as_ref().map(|m| &m.tiles)
    }

    /// Decorations of the current map.
    pub fn decorations(&self) -> &[DecorationPlacement] {
        self.current.as_ref().map(|m| m.decorations.as_slice()).unwrap_or(&[])
    }

    /// Seed used by the next `generate(None, ..)`.
    pub fn seed(&self) -> u32 {
        self.params.seed
    }

    pub fn scale(&self) -> f64 {
        self.params.scale
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &TileCatalogue {
        &self.config.tiles
    }
}

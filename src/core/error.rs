//! Error types for map generation

use thiserror::Error;

use crate::terrain::biome::Biome;

/// Main error type for the crate.
///
/// Everything except `OutOfBounds`, `Io` and `Json` is a configuration
/// error raised before a map is published.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1 and the cell count must fit in usize")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid noise scale {0}: must be finite and positive")]
    InvalidScale(f64),

    #[error("invalid biome thresholds {0:?}: must be finite and strictly ascending")]
    InvalidThresholds([f64; 5]),

    #[error("no base tile configured for biome {0:?}")]
    MissingBaseTile(Biome),

    #[error("no transition table configured for biome {0:?}")]
    MissingTransitionTable(Biome),

    #[error("no decoration rules configured for biome {0:?}")]
    MissingDecorationRules(Biome),

    #[error("transition table for {biome:?} has edge mask {mask}: keys must be in 1..=15")]
    InvalidEdgeMask { biome: Biome, mask: u8 },

    #[error("decoration rule for {biome:?} has probability {chance}: must be in [0, 1)")]
    InvalidProbability { biome: Biome, chance: f64 },

    #[error("invalid zoom settings: {0}")]
    InvalidZoom(String),

    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

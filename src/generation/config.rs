//! Generation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::grid;
use crate::terrain::{BiomeBands, NoiseParams};
use crate::tiles::TileCatalogue;

/// Scale adjustment applied by the zoom commands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    /// Multiplier for `zoom_in` (< 1 gives larger features).
    pub zoom_in_factor: f64,
    /// Multiplier for `zoom_out`.
    pub zoom_out_factor: f64,
    /// Floor for the scale after zooming in.
    pub min_scale: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            zoom_in_factor: 0.9,
            zoom_out_factor: 1.1,
            min_scale: 0.02,
        }
    }
}

impl ZoomSettings {
    pub fn validate(&self) -> Result<()> {
        let factors = [self.zoom_in_factor, self.zoom_out_factor, self.min_scale];
        if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
            return Err(Error::InvalidZoom(format!(
                "factors and min_scale must be finite and positive: {:?}",
                self
            )));
        }
        Ok(())
    }
}

/// Configuration for the map generation pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Map width in cells.
    pub width: usize,
    /// Map height in cells.
    pub height: usize,
    /// Initial seed and scale.
    pub noise: NoiseParams,
    /// Noise thresholds for each biome band.
    pub bands: BiomeBands,
    pub zoom: ZoomSettings,
    pub tiles: TileCatalogue,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            noise: NoiseParams::default(),
            bands: BiomeBands::default(),
            zoom: ZoomSettings::default(),
            tiles: TileCatalogue::default(),
        }
    }
}

impl GenerationConfig {
    /// Default configuration with the given dimensions.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Startup-time consistency check of every parameter.
    pub fn validate(&self) -> Result<()> {
        grid::cell_count(self.width, self.height)?;
        if !NoiseParams::scale_is_valid(self.noise.scale) {
            return Err(Error::InvalidScale(self.noise.scale));
        }
        self.bands.validate()?;
        self.zoom.validate()?;
        self.tiles.validate(self.bands.producible())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::terrain::Biome;

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        assert_eq!((config.width, config.height), (20, 15));
        assert_eq!(config.noise.scale, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = GenerationConfig::with_size(0, 10);
        assert!(matches!(config.validate(), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_rejects_dimensions_whose_cell_count_overflows() {
        let config = GenerationConfig::with_size(usize::MAX / 2, 3);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimensions { height: 3, .. })
        ));
        assert!(crate::MapGenerator::new(config).is_err());
    }

    #[test]
    fn test_rejects_bad_scale() {
        let mut config = GenerationConfig::default();
        config.noise.scale = 0.0;
        assert!(matches!(config.validate(), Err(Error::InvalidScale(_))));

        config.noise.scale = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_zoom() {
        let mut config = GenerationConfig::default();
        config.zoom.min_scale = 0.0;
        assert!(matches!(config.validate(), Err(Error::InvalidZoom(_))));
    }

    #[test]
    fn test_rejects_incomplete_catalogue() {
        let mut config = GenerationConfig::default();
        config.tiles.transitions.remove(&Biome::Snow);
        assert!(matches!(
            config.validate(),
            Err(Error::MissingTransitionTable(Biome::Snow))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GenerationConfig::from_json_str(
            r#"{ "width": 8, "noise": { "seed": 7, "scale": 0.25 } }"#,
        )
        .unwrap();

        assert_eq!(config.width, 8);
        assert_eq!(config.height, 15);
        assert_eq!(config.noise, NoiseParams { seed: 7, scale: 0.25 });
        assert_eq!(config.tiles, TileCatalogue::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&GenerationConfig::with_size(6, 4)).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = GenerationConfig::load(file.path()).unwrap();
        assert_eq!(loaded, GenerationConfig::with_size(6, 4));
    }

    #[test]
    fn test_load_reports_errors() {
        let missing = GenerationConfig::load(Path::new("/nonexistent/tilegen.json"));
        assert!(matches!(missing, Err(Error::Io(_))));

        let garbage = GenerationConfig::from_json_str("{ not json");
        assert!(matches!(garbage, Err(Error::Json(_))));
    }
}

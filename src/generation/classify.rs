//! Biome classification pass: samples the noise field at every cell.

use crate::core::Result;
use crate::grid::Grid;
use crate::terrain::{Biome, BiomeBands, ScalarField};

/// Build a biome grid by sampling `field` at `(x * scale, y * scale)` for
/// every cell and mapping the sample through `bands`.
pub fn classify_grid(
    field: &dyn ScalarField,
    bands: &BiomeBands,
    width: usize,
    height: usize,
    scale: f64,
) -> Result<Grid<Biome>> {
    Grid::from_fn(width, height, |x, y| {
        let n = field.sample(x as f64 * scale, y as f64 * scale);
        bands.classify(n)
    })
}

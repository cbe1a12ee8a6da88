//! Noise sampling and biome classification

pub mod sampler;
pub use sampler::{NoiseParams, NoiseSource, ScalarField};

pub mod biome;
pub use biome::{Biome, BiomeBands};

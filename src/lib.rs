//! Tilegen - procedural 2D tile map generation
//!
//! Noise is classified into biome bands, one-tile spurs are pruned, edge
//! and inner-corner transition tiles are resolved, and decorations are
//! scattered. Rendering is left to the host.

pub mod core;
pub mod terrain;
pub mod grid;
pub mod tiles;
pub mod generation;

pub use crate::core::{Error, Result};
pub use generation::{GeneratedMap, GenerationConfig, MapGenerator};

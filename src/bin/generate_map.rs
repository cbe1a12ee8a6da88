//! Map generator binary: generates a tile map and prints it.
//!
//! Usage: cargo run --bin generate_map -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   JSON generation config (defaults for missing fields)
//!   --width <CELLS>   Map width (default: 20)
//!   --height <CELLS>  Map height (default: 15)
//!   --seed <SEED>     Noise seed (default: random)
//!   --scale <SCALE>   Noise scale (default: 0.1)
//!   --zoom-in <N>     Apply the zoom-in command N times after generating
//!   --zoom-out <N>    Apply the zoom-out command N times after generating
//!   --json            Print the generated map as JSON instead of a preview

use std::collections::BTreeMap;
use std::path::PathBuf;

use tilegen::generation::{GeneratedMap, GenerationConfig, MapGenerator, TileChoice};
use tilegen::tiles::TileId;

fn main() {
    tilegen::core::logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> tilegen::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => GenerationConfig::load(&PathBuf::from(path))?,
        None => GenerationConfig::default(),
    };
    if let Some(width) = parse_usize_arg(&args, "--width") {
        config.width = width;
    }
    if let Some(height) = parse_usize_arg(&args, "--height") {
        config.height = height;
    }
    if let Some(scale) = parse_f64_arg(&args, "--scale") {
        config.noise.scale = scale;
    }
    let seed = parse_u32_arg(&args, "--seed").unwrap_or_else(rand::random);
    config.noise.seed = seed;

    let zoom_in = parse_usize_arg(&args, "--zoom-in").unwrap_or(0);
    let zoom_out = parse_usize_arg(&args, "--zoom-out").unwrap_or(0);
    let as_json = args.iter().any(|a| a == "--json");

    let scale = config.noise.scale;
    let mut generator = MapGenerator::new(config)?;
    generator.generate(Some(seed), scale)?;
    for _ in 0..zoom_in {
        generator.zoom_in()?;
    }
    for _ in 0..zoom_out {
        generator.zoom_out()?;
    }

    let Some(map) = generator.map() else {
        return Ok(());
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(map)?);
    } else {
        print_preview(map, &generator);
    }
    Ok(())
}

fn print_preview(map: &GeneratedMap, generator: &MapGenerator) {
    println!("=== Tilegen Map ===");
    println!("Size:  {} x {}", map.biomes.width(), map.biomes.height());
    println!("Seed:  {}", map.seed);
    println!("Scale: {:.4}", map.scale);
    println!(
        "Pruned: {} cells in {} passes",
        map.prune.converted, map.prune.passes
    );
    println!();

    for row in map.biomes.rows() {
        let line: String = row.iter().map(|b| b.glyph()).collect();
        println!("  {}", line);
    }
    println!();

    for (biome, count) in map.biome_counts() {
        if count > 0 {
            println!("  {:<6} {:>4} cells", format!("{:?}", biome), count);
        }
    }

    let overrides = map.tiles.iter().filter(|(_, _, c)| c.is_override()).count();
    let inner = map
        .tiles
        .iter()
        .filter(|(_, _, c)| matches!(c, TileChoice::InnerCorner { .. }))
        .count();
    println!();
    println!("Transitions: {} tiles ({} inner corners)", overrides, inner);

    let mut by_tile: BTreeMap<TileId, usize> = BTreeMap::new();
    for placement in &map.decorations {
        *by_tile.entry(placement.tile).or_default() += 1;
    }
    println!("Decorations: {}", map.decorations.len());
    for (tile, count) in by_tile {
        println!("  tile {:>3}: {}", tile.0, count);
    }

    let catalogue = generator.catalogue();
    let unresolved = map
        .biomes
        .iter()
        .filter(|&(x, y, _)| map.tile_at(x, y, catalogue).is_none())
        .count();
    if unresolved > 0 {
        log::warn!("{} cells have no tile in the catalogue", unresolved);
    }
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

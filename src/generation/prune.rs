//! Spur pruning: converts cells that cannot support a transition shape to
//! the background biome.
//!
//! A non-background cell with at most one orthogonal neighbor of its own
//! biome is a spur. Sweeps run row-major and mutate in place, so a cell
//! converted early in a sweep is already background when later cells count
//! their neighbors. Sweeps repeat until one converts nothing. The
//! background region only grows, so there are at most W×H converting sweeps.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::terrain::Biome;

/// Minimum same-biome orthogonal neighbors for a cell to survive.
pub const MIN_SAME_NEIGHBORS: usize = 2;

/// Outcome of pruning a grid to its fixed point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    /// Sweeps that converted at least one cell.
    pub passes: usize,
    /// Cells converted to background in total.
    pub converted: usize,
}

/// One row-major sweep. Returns the number of cells converted.
pub fn prune_pass(grid: &mut Grid<Biome>) -> usize {
    let mut converted = 0;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(biome) = grid.get(x, y) else { continue };
            if biome.is_background() {
                continue;
            }
            if grid.count_orthogonal(x, y, &biome) < MIN_SAME_NEIGHBORS
                && grid.set(x, y, Biome::BACKGROUND).is_ok()
            {
                converted += 1;
            }
        }
    }

    converted
}

/// Sweep until a fixed point. Running this on an already-stable grid
/// changes nothing and reports zero passes.
pub fn prune_spurs(grid: &mut Grid<Biome>) -> PruneReport {
    let mut report = PruneReport::default();

    loop {
        let converted = prune_pass(grid);
        if converted == 0 {
            break;
        }
        report.passes += 1;
        report.converted += converted;
        log::debug!("Prune pass {}: {} cells to background", report.passes, converted);
    }

    report
}

/// True if no non-background cell is a spur.
pub fn is_stable(grid: &Grid<Biome>) -> bool {
    grid.iter().all(|(x, y, biome)| {
        biome.is_background() || grid.count_orthogonal(x, y, biome) >= MIN_SAME_NEIGHBORS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn parse(rows: &[&str]) -> Grid<Biome> {
        let height = rows.len();
        let width = rows[0].len();
        Grid::from_fn(width, height, |x, y| match rows[y].as_bytes()[x] {
            b'g' => Biome::Grass,
            b'r' => Biome::Rock,
            b's' => Biome::Sand,
            _ => Biome::Water,
        })
        .unwrap()
    }

    fn random_grid(rng: &mut Pcg64Mcg, width: usize, height: usize) -> Grid<Biome> {
        Grid::from_fn(width, height, |_, _| Biome::ALL[rng.random_range(0..Biome::ALL.len())]).unwrap()
    }

    #[test]
    fn test_isolated_cell_pruned_in_one_pass() {
        let mut grid = parse(&["~~~", "~g~", "~~~"]);

        assert_eq!(prune_pass(&mut grid), 1);
        assert_eq!(grid.get(1, 1), Some(Biome::Water));

        let mut grid = parse(&["~~~", "~g~", "~~~"]);
        let report = prune_spurs(&mut grid);
        assert_eq!(report, PruneReport { passes: 1, converted: 1 });
    }

    #[test]
    fn test_one_tile_spur_removed() {
        // The cell sticking up from the block has a single grass neighbor
        let mut grid = parse(&[
            "~~~~~",
            "~~g~~",
            "~ggg~",
            "~ggg~",
            "~~~~~",
        ]);
        let report = prune_spurs(&mut grid);

        assert_eq!(report.converted, 1);
        assert_eq!(grid.get(2, 1), Some(Biome::Water));
        assert_eq!(grid.count(&Biome::Grass), 6);
        assert!(is_stable(&grid));
    }

    #[test]
    fn test_stable_grid_unchanged() {
        let original = parse(&[
            "~ggg",
            "gggg",
            "gggg",
            "gggg",
        ]);
        let mut grid = original.clone();

        assert_eq!(prune_spurs(&mut grid), PruneReport::default());
        assert_eq!(grid, original);
    }

    #[test]
    fn test_in_place_sweep_cascades_within_a_pass() {
        // Left end converts first, which drops the middle cell to one neighbor
        // before the sweep reaches it.
        let mut grid = parse(&["ggg"]);

        assert_eq!(prune_pass(&mut grid), 3);
        assert_eq!(grid.count(&Biome::Water), 3);
    }

    #[test]
    fn test_cascade_needs_repeated_passes() {
        // A 1-wide strip hanging below the block: its tip only converts after
        // the cell above it was already checked, so that one waits a pass.
        let mut grid = parse(&[
            "~ggg",
            "~ggg",
            "~g~~",
            "~g~~",
        ]);
        let report = prune_spurs(&mut grid);

        assert_eq!(report, PruneReport { passes: 2, converted: 2 });
        assert!(is_stable(&grid));
        assert_eq!(grid.get(1, 2), Some(Biome::Water));
        assert_eq!(grid.get(1, 3), Some(Biome::Water));
    }

    #[test]
    fn test_different_biomes_do_not_support_each_other() {
        let mut grid = parse(&["grgr", "rgrg"]);
        let report = prune_spurs(&mut grid);

        assert_eq!(report.converted, 8);
        assert_eq!(grid.count(&Biome::Water), 8);
    }

    #[test]
    fn test_random_grids_reach_fixed_point() {
        let mut rng = Pcg64Mcg::seed_from_u64(2024);

        for _ in 0..200 {
            let width = rng.random_range(1..12);
            let height = rng.random_range(1..12);
            let mut grid = random_grid(&mut rng, width, height);
            let before_water = grid.count(&Biome::Water);

            let report = prune_spurs(&mut grid);

            assert!(report.passes <= width * height);
            assert_eq!(grid.count(&Biome::Water), before_water + report.converted);
            assert!(is_stable(&grid));

            let stable = grid.clone();
            assert_eq!(prune_spurs(&mut grid), PruneReport::default());
            assert_eq!(grid, stable);
        }
    }
}

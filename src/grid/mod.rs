//! Fixed-size 2D grid with bounds-checked neighbor queries.
//!
//! Cells are stored row-major and addressed as `(x, y)` = (column, row).
//! Neighbor queries take signed offsets and return `None` off the grid, so
//! an out-of-bounds neighbor never compares equal to any cell value.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Orthogonal neighbor offsets in N, E, S, W order (y grows southward).
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Number of cells in a W×H grid. Empty or overflowing sizes are rejected.
pub fn cell_count(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(Error::InvalidDimensions { width, height }),
    }
}

/// A W×H grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self> {
        let count = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; count],
        })
    }
}

impl<T> Grid<T> {
    /// Build a grid from a per-cell function, visiting cells row-major.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell reference, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<&T> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.idx(x, y)])
        } else {
            None
        }
    }

    /// Write a cell.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        let i = self.idx(x, y);
        self.cells[i] = value;
        Ok(())
    }

    /// Coordinates of the cell at offset `(dx, dy)` from `(x, y)`, if on the grid.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx as isize)?;
        let ny = y.checked_add_signed(dy as isize)?;
        self.in_bounds(nx, ny).then_some((nx, ny))
    }

    /// Neighbor reference at offset `(dx, dy)`, or `None` off the grid.
    #[inline]
    pub fn neighbor_ref(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<&T> {
        self.offset(x, y, dx, dy).map(|(nx, ny)| &self.cells[self.idx(nx, ny)])
    }

    /// Iterate `(x, y, &cell)` row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i % width, i / width, c))
    }

    /// Map every cell into a new grid of the same shape.
    pub fn map<U>(&self, mut f: impl FnMut(usize, usize, &T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.iter().map(|(x, y, c)| f(x, y, c)).collect(),
        }
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }
}

impl<T: Copy> Grid<T> {
    /// Cell value, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.cell(x, y).copied()
    }

    /// Neighbor value at offset `(dx, dy)`, or `None` off the grid.
    #[inline]
    pub fn neighbor(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<T> {
        self.neighbor_ref(x, y, dx, dy).copied()
    }
}

impl<T: PartialEq> Grid<T> {
    /// True only if the neighbor exists and equals `value`.
    #[inline]
    pub fn neighbor_is(&self, x: usize, y: usize, dx: i32, dy: i32, value: &T) -> bool {
        self.neighbor_ref(x, y, dx, dy) == Some(value)
    }

    /// Number of orthogonal neighbors equal to `value`. Off-grid never matches.
    pub fn count_orthogonal(&self, x: usize, y: usize, value: &T) -> usize {
        ORTHOGONAL
            .iter()
            .filter(|&&(dx, dy)| self.neighbor_is(x, y, dx, dy, value))
            .count()
    }

    /// Number of cells equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|c| *c == value).count()
    }
}

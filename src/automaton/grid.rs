//! Toroidal 2D grid, cell access, and neighbor counting.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};

/// Dense binary grid, row-major, one byte per cell (0 = dead, 1 = alive).
///
/// Height and width are fixed at construction and never zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

/// Per-cell live neighbor counts, in `[0, 8]`, same shape as the grid they were
/// computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCount {
    height: usize,
    width: usize,
    counts: Vec<u8>,
}

pub(crate) fn check_shape(height: usize, width: usize) -> Result<()> {
    if height == 0 || width == 0 {
        return Err(Error::config(format!(
            "grid dimensions must be positive, got {height}x{width}"
        )));
    }
    Ok(())
}

pub(crate) fn check_probability(p_alive: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p_alive) {
        return Err(Error::config(format!(
            "p_alive must be within [0, 1], got {p_alive}"
        )));
    }
    Ok(())
}

impl Grid {
    /// All-dead grid.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        check_shape(height, width)?;
        Ok(Self::from_raw(height, width, vec![0; height * width]))
    }

    /// Grid where each cell is alive with probability `p_alive`, drawn row-major
    /// from a ChaCha8 stream seeded with `seed`. `p_alive == 0` skips sampling.
    pub fn random(height: usize, width: usize, p_alive: f64, seed: u64) -> Result<Self> {
        check_shape(height, width)?;
        check_probability(p_alive)?;

        if p_alive == 0.0 {
            return Self::new(height, width);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..height * width)
            .map(|_| (rng.random::<f64>() < p_alive) as u8)
            .collect();
        Ok(Self::from_raw(height, width, cells))
    }

    /// Wrap an externally supplied row-major buffer. Non-zero values are
    /// normalized to 1.
    pub fn from_cells(height: usize, width: usize, mut cells: Vec<u8>) -> Result<Self> {
        check_shape(height, width)?;
        if cells.len() != height * width {
            return Err(Error::Dimension {
                height,
                width,
                actual: cells.len(),
            });
        }
        for cell in cells.iter_mut() {
            *cell = (*cell != 0) as u8;
        }
        Ok(Self::from_raw(height, width, cells))
    }

    /// Build from a list of equally long rows, top to bottom.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let cells: Vec<u8> = rows.iter().flat_map(|row| row.as_ref().iter().copied()).collect();
        Self::from_cells(height, width, cells)
    }

    /// Caller guarantees `cells.len() == height * width`, both positive, values binary.
    pub(crate) fn from_raw(height: usize, width: usize, cells: Vec<u8>) -> Self {
        debug_assert!(height > 0 && width > 0);
        debug_assert_eq!(cells.len(), height * width);
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major cell buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }

    /// One row of the grid.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Linear index of `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Cell state, or 0 outside the grid.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if self.in_bounds(x, y) {
            self.cells[self.index_of(x, y)]
        } else {
            0
        }
    }

    /// Set a cell alive (non-zero) or dead. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, alive: u8) {
        if self.in_bounds(x, y) {
            let idx = self.index_of(x, y);
            self.cells[idx] = (alive != 0) as u8;
        }
    }

    /// Cell state with toroidal wrapping on both axes.
    pub fn get_wrapped(&self, x: isize, y: isize) -> u8 {
        let x = x.rem_euclid(self.width as isize) as usize;
        let y = y.rem_euclid(self.height as isize) as usize;
        self.cells[self.index_of(x, y)]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    pub fn is_all_dead(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Toroidal roll: the cell at `(x, y)` moves to `(x + dx, y + dy)`, wrapped.
    pub fn shifted(&self, dx: isize, dy: isize) -> Grid {
        let mut cells = vec![0; self.cells.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                cells[self.index_of(x, y)] = self.get_wrapped(x as isize - dx, y as isize - dy);
            }
        }
        Self::from_raw(self.height, self.width, cells)
    }

    /// The rows above, at, and below `y`, wrapping at the top and bottom edges.
    #[inline]
    pub(crate) fn wrapped_rows(&self, y: usize) -> (&[u8], &[u8], &[u8]) {
        let up = (y + self.height - 1) % self.height;
        let down = (y + 1) % self.height;
        (self.row(up), self.row(y), self.row(down))
    }
}

/// Sum of the 8-cell window around column `x` of three stacked rows, excluding
/// `mid[x]`. Columns wrap; in a grid one cell wide `left == x == right`.
#[inline]
pub(crate) fn window_sum(up: &[u8], mid: &[u8], down: &[u8], x: usize) -> u8 {
    let width = mid.len();
    let left = (x + width - 1) % width;
    let right = (x + 1) % width;

    up[left] + up[x] + up[right] + mid[left] + mid[right] + down[left] + down[x] + down[right]
}

/// Count alive neighbors of `(x, y)` over the toroidal Moore neighborhood.
pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (up, mid, down) = grid.wrapped_rows(y);
    window_sum(up, mid, down, x)
}

/// Neighbor counts for every cell of `grid`.
pub fn neighbor_counts(grid: &Grid) -> NeighborCount {
    let mut counts = Vec::with_capacity(grid.len());
    for y in 0..grid.height() {
        let (up, mid, down) = grid.wrapped_rows(y);
        counts.extend((0..grid.width()).map(|x| window_sum(up, mid, down, x)));
    }

    NeighborCount {
        height: grid.height(),
        width: grid.width(),
        counts,
    }
}

impl NeighborCount {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.counts[y * self.width + x]
    }

    pub fn counts(&self) -> &[u8] {
        &self.counts
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for &cell in self.row(y) {
                f.write_str(if cell == 1 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

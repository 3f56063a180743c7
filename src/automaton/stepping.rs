//! Synchronous generation step for the 2D grid.

use rayon::prelude::*;

use super::grid::{window_sum, Grid};
use super::rules::LifeRule;

/// Grids with at least this many cells are stepped row-parallel on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 128 * 128;

/// Step the grid forward by one generation.
///
/// Every output cell reads only from `grid`, never from a partially updated
/// successor, so the parallel and sequential paths produce identical grids.
pub fn step_grid(grid: &Grid, rule: LifeRule) -> Grid {
    let width = grid.width();
    let mut next_cells = vec![0; grid.len()];

    if grid.len() >= PARALLEL_THRESHOLD {
        next_cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, out)| step_row_into(grid, rule, y, out));
    } else {
        for (y, out) in next_cells.chunks_mut(width).enumerate() {
            step_row_into(grid, rule, y, out);
        }
    }

    Grid::from_raw(grid.height(), width, next_cells)
}

/// Step `grid` forward `steps` generations and return the result.
pub fn step_grid_n(grid: &Grid, rule: LifeRule, steps: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..steps {
        current = step_grid(&current, rule);
    }
    current
}

fn step_row_into(grid: &Grid, rule: LifeRule, y: usize, out: &mut [u8]) {
    let (up, mid, down) = grid.wrapped_rows(y);

    for (x, next) in out.iter_mut().enumerate() {
        let state = mid[x];
        debug_assert!(state <= 1, "cell ({x}, {y}) holds non-binary state {state}");

        let neighbors = window_sum(up, mid, down, x);
        *next = rule.next_state(state, neighbors);
    }
}

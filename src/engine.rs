//! Engine state containers that drive repeated stepping.
//!
//! Each engine owns exactly one state (grid or row), the rule it was built
//! with, and a generation counter. No history is buffered: snapshots are only
//! observable through the `run` callback.

use log::{debug, trace};

use crate::automaton::grid::Grid;
use crate::automaton::line::{run_line, step_row, Row, Timeline};
use crate::automaton::rules::{ElementaryRule, LifeRule};
use crate::automaton::stepping::step_grid;
use crate::error::{Error, Result};

/// 2D automaton on a toroidal grid.
#[derive(Clone, Debug)]
pub struct GridEngine {
    grid: Grid,
    rule: LifeRule,
    generation: u64,
}

impl GridEngine {
    /// Seeded random initial grid. With `p_alive == 0` the grid starts all dead
    /// and is expected to be replaced through [`GridEngine::set_grid`].
    pub fn new(height: usize, width: usize, rule: LifeRule, p_alive: f64, seed: u64) -> Result<Self> {
        let grid = Grid::random(height, width, p_alive, seed)?;
        debug!(
            "grid engine {}x{} rule={} p_alive={} seed={} population={}",
            height,
            width,
            rule,
            p_alive,
            seed,
            grid.population()
        );
        Ok(Self::from_grid(grid, rule))
    }

    pub fn from_grid(grid: Grid, rule: LifeRule) -> Self {
        Self {
            grid,
            rule,
            generation: 0,
        }
    }

    /// Engine over an externally supplied row-major buffer.
    pub fn from_cells(height: usize, width: usize, rule: LifeRule, cells: Vec<u8>) -> Result<Self> {
        Ok(Self::from_grid(Grid::from_cells(height, width, cells)?, rule))
    }

    /// Replace the whole grid. The shape must match the engine's.
    /// The generation counter is left as is.
    pub fn set_grid(&mut self, grid: Grid) -> Result<()> {
        if grid.height() != self.grid.height() || grid.width() != self.grid.width() {
            return Err(Error::Dimension {
                height: self.grid.height(),
                width: self.grid.width(),
                actual: grid.len(),
            });
        }
        self.grid = grid;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for editing cells; the shape cannot change through it.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn rule(&self) -> LifeRule {
        self.rule
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        self.grid = step_grid(&self.grid, self.rule);
        self.generation += 1;
        trace!(
            "grid generation {} population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Step `steps` times, calling `on_generation(t, grid)` for t = 0..=steps.
    /// Call 0 sees the grid before any step, the last call the final grid.
    pub fn run<F>(&mut self, steps: usize, mut on_generation: F)
    where
        F: FnMut(usize, &Grid),
    {
        debug!(
            "running {} for {} steps from generation {}",
            self.rule, steps, self.generation
        );
        for t in 0..steps {
            on_generation(t, &self.grid);
            self.step();
        }
        on_generation(steps, &self.grid);
        debug!(
            "run finished at generation {} population {}",
            self.generation,
            self.grid.population()
        );
    }
}

/// 1D elementary automaton on a periodic row.
#[derive(Clone, Debug)]
pub struct LineEngine {
    row: Row,
    rule: ElementaryRule,
    generation: u64,
}

impl LineEngine {
    pub fn new(row: Row, rule: ElementaryRule) -> Self {
        debug!(
            "line engine len={} rule={} population={}",
            row.len(),
            rule.number(),
            row.population()
        );
        Self {
            row,
            rule,
            generation: 0,
        }
    }

    /// Engine over an externally supplied buffer that must hold `length` cells.
    pub fn from_cells(length: usize, rule: ElementaryRule, cells: Vec<u8>) -> Result<Self> {
        if cells.len() != length {
            return Err(Error::Dimension {
                height: 1,
                width: length,
                actual: cells.len(),
            });
        }
        Ok(Self::new(Row::from_cells(cells)?, rule))
    }

    /// Replace the row. The length must match the engine's.
    pub fn set_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.row.len() {
            return Err(Error::Dimension {
                height: 1,
                width: self.row.len(),
                actual: row.len(),
            });
        }
        self.row = row;
        Ok(())
    }

    pub fn row(&self) -> &Row {
        &self.row
    }

    pub fn row_mut(&mut self) -> &mut Row {
        &mut self.row
    }

    pub fn rule(&self) -> ElementaryRule {
        self.rule
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        self.row = step_row(&self.row, &self.rule);
        self.generation += 1;
    }

    /// Same snapshot contract as [`GridEngine::run`]: `steps + 1` calls.
    pub fn run<F>(&mut self, steps: usize, mut on_generation: F)
    where
        F: FnMut(usize, &Row),
    {
        for t in 0..steps {
            on_generation(t, &self.row);
            self.step();
        }
        on_generation(steps, &self.row);
    }

    /// Record `steps` rows (the current row first) and advance the engine by
    /// `steps` generations.
    pub fn timeline(&mut self, steps: usize) -> Timeline {
        debug!(
            "recording rule {} timeline of {} rows from generation {}",
            self.rule.number(),
            steps,
            self.generation
        );
        let timeline = run_line(&self.row, &self.rule, steps);
        if steps > 0 {
            if let Some(last) = timeline.get(steps - 1) {
                self.row = step_row(last, &self.rule);
            }
        }
        self.generation += steps as u64;
        timeline
    }
}

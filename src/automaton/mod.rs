//! Core automaton logic.
//!
//! This module contains the actual logic for building grids and rows,
//! stepping them, and extracting/importing regions.
//! The engines in `engine` and the FFI layer in `ffi/` call these functions.

pub mod grid;
pub mod line;
pub mod region;
pub mod rules;
pub mod stepping;

pub use grid::{count_neighbors, neighbor_counts, Grid, NeighborCount};
pub use line::{run_line, step_row, Row, Timeline};
pub use region::{extract_region, import_region, stamp_pattern};
pub use rules::{ElementaryRule, LifeRule, RULE_110, RULE_30};
pub use stepping::{step_grid, step_grid_n};

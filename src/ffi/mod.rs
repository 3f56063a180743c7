//! C FFI layer for rendering hosts.
//!
//! This module exports C ABI functions for callers that turn snapshots into
//! frames (image writers, scripting bindings). All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` and `engine` modules. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! C-to-Rust conversions. Construction errors surface as null handles.

pub mod grid;
pub mod lifecycle;
pub mod line;
pub mod region;

pub use grid::{
    ca_grid_get_cell, ca_grid_get_height, ca_grid_get_width, ca_grid_run, ca_grid_set_cell,
    ca_grid_step, GenerationCallback,
};
pub use lifecycle::{
    ca_grid_create, ca_grid_destroy, ca_grid_get_generation, ca_line_create, ca_line_destroy,
    ca_line_get_generation,
};
pub use line::{
    ca_line_get_cell, ca_line_get_length, ca_line_set_cell, ca_line_step, ca_line_timeline,
};
pub use region::{ca_grid_extract_region, ca_grid_import_region};

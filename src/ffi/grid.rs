//! Grid cell access, stepping, and observed runs.

use std::ffi::c_void;

use crate::engine::GridEngine;

/// Snapshot callback for `ca_grid_run`: `(user_data, t, cells, len)`.
/// `cells` points to `len` row-major bytes valid only for the duration of the call.
pub type GenerationCallback =
    extern "C" fn(user_data: *mut c_void, t: u64, cells: *const u8, len: usize);

/// Gets the grid height, or 0 for a null pointer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_grid_get_height(ptr: *const GridEngine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).height() as u32
}

/// Gets the grid width, or 0 for a null pointer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_grid_get_width(ptr: *const GridEngine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).width() as u32
}

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn ca_grid_set_cell(ptr: *mut GridEngine, x: u32, y: u32, alive: u8) {
    if ptr.is_null() {
        return;
    }

    let engine = &mut *ptr;
    engine.grid_mut().set(x as usize, y as usize, alive);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn ca_grid_get_cell(ptr: *const GridEngine, x: u32, y: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).grid().get(x as usize, y as usize)
}

/// Advances the grid by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_grid_step(ptr: *mut GridEngine) {
    if ptr.is_null() {
        return;
    }

    (*ptr).step();
}

/// Advances the grid `steps` generations, invoking `callback` once per
/// generation for t = 0..=steps (t = 0 is the grid before stepping).
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
/// - `callback` must not retain the `cells` pointer past its return
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or missing callback).
#[no_mangle]
pub unsafe extern "C" fn ca_grid_run(
    ptr: *mut GridEngine,
    steps: u32,
    callback: Option<GenerationCallback>,
    user_data: *mut c_void,
) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    let Some(callback) = callback else {
        return 1;
    };

    let engine = &mut *ptr;
    engine.run(steps as usize, |t, grid| {
        let cells = grid.cells();
        callback(user_data, t as u64, cells.as_ptr(), cells.len());
    });
    0
}

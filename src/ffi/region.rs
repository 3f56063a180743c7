//! Region extraction and import FFI functions.

use crate::automaton;
use crate::engine::GridEngine;

/// Number of bytes a `[min, max)` rectangle spans before clamping.
fn requested_size(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> usize {
    (max_x.saturating_sub(min_x) as usize) * (max_y.saturating_sub(min_y) as usize)
}

/// Extracts a rectangular region of cells into a flat output buffer.
///
/// # Layout
/// The buffer is filled row by row (y changes slowest, x changes fastest).
/// This matches the layout expected by `ca_grid_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ca_grid_extract_region(
    ptr: *const GridEngine,
    out_buf: *mut u8,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let size = requested_size(min_x, min_y, max_x, max_y);
    if size == 0 {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, size);
    automaton::extract_region(
        engine.grid(),
        buf_slice,
        min_x as usize,
        min_y as usize,
        max_x as usize,
        max_y as usize,
    ) as u64
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// # Layout
/// Row by row, matching `ca_grid_extract_region`.
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ca_grid_import_region(
    ptr: *mut GridEngine,
    in_buf: *const u8,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let engine = &mut *ptr;
    let size = requested_size(min_x, min_y, max_x, max_y);
    if size == 0 {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts(in_buf, size);
    automaton::import_region(
        engine.grid_mut(),
        buf_slice,
        min_x as usize,
        min_y as usize,
        max_x as usize,
        max_y as usize,
    ) as u64
}

//! Line cell access, stepping, and space-time export.

use crate::engine::LineEngine;

/// Gets the row length, or 0 for a null pointer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LineEngine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_line_get_length(ptr: *const LineEngine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).len() as u32
}

/// Sets a cell to alive (non-zero) or dead (0). Out-of-bounds is ignored.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LineEngine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_line_set_cell(ptr: *mut LineEngine, i: u32, alive: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).row_mut().set(i as usize, alive);
}

/// Gets the state of a cell; 0 if out of bounds or null pointer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LineEngine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_line_get_cell(ptr: *const LineEngine, i: u32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).row().get(i as usize)
}

/// Advances the row by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LineEngine, or null
#[no_mangle]
pub unsafe extern "C" fn ca_line_step(ptr: *mut LineEngine) {
    if ptr.is_null() {
        return;
    }
    (*ptr).step();
}

/// Records `steps` generations into `out_buf` as a row-major space-time
/// diagram (current row first) and advances the engine by `steps`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LineEngine, or null
/// - `out_buf` must point to at least `out_len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on error (null pointer or `out_len` smaller
/// than `steps * length`). On error the engine is not advanced.
#[no_mangle]
pub unsafe extern "C" fn ca_line_timeline(
    ptr: *mut LineEngine,
    steps: u32,
    out_buf: *mut u8,
    out_len: usize,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &mut *ptr;
    let needed = engine.len().saturating_mul(steps as usize);
    if needed == 0 || out_len < needed {
        return 0;
    }

    let timeline = engine.timeline(steps as usize);
    let buf_slice = std::slice::from_raw_parts_mut(out_buf, out_len);
    timeline.write_space_time(buf_slice) as u64
}

//! Engine creation, destruction, and generation queries.

use log::warn;

use crate::automaton::line::Row;
use crate::automaton::rules::{ElementaryRule, LifeRule};
use crate::engine::{GridEngine, LineEngine};

/// Creates a grid engine with a seeded random initial grid.
///
/// `rule_id`: 0 = Game of Life, 1 = HighLife, 2 = Seeds, 3 = Chaotic.
///
/// # Returns
/// A pointer to a new GridEngine, or null if the dimensions, rule id, or
/// `p_alive` are invalid.
///
/// # Safety
/// The returned pointer must eventually be freed with `ca_grid_destroy()`.
#[no_mangle]
pub extern "C" fn ca_grid_create(
    height: u32,
    width: u32,
    rule_id: u8,
    p_alive: f64,
    seed: u64,
) -> *mut GridEngine {
    let engine = LifeRule::try_from(rule_id).and_then(|rule| {
        GridEngine::new(height as usize, width as usize, rule, p_alive, seed)
    });

    match engine {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(err) => {
            warn!("ca_grid_create: {err}");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a grid engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ca_grid_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ca_grid_destroy(ptr: *mut GridEngine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter of a grid engine.
///
/// # Safety
/// - `ptr` must be a valid pointer to a GridEngine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ca_grid_get_generation(ptr: *const GridEngine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Creates a line engine of `length` cells with a single live cell in the
/// middle, stepped by the elementary rule `rule_number`.
///
/// # Returns
/// A pointer to a new LineEngine, or null if `length` is 0.
///
/// # Safety
/// The returned pointer must eventually be freed with `ca_line_destroy()`.
#[no_mangle]
pub extern "C" fn ca_line_create(length: u32, rule_number: u8) -> *mut LineEngine {
    match Row::centered(length as usize) {
        Ok(row) => Box::into_raw(Box::new(LineEngine::new(
            row,
            ElementaryRule::from_number(rule_number),
        ))),
        Err(err) => {
            warn!("ca_line_create: {err}");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a line engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ca_line_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ca_line_destroy(ptr: *mut LineEngine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the generation counter of a line engine.
///
/// # Safety
/// - `ptr` must be a valid pointer to a LineEngine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ca_line_get_generation(ptr: *const LineEngine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

//! Region extraction, import, and pattern stamping.

use super::grid::Grid;

/// Clamp a half-open `[min, max)` window to `[0, limit)`. Returns `None` when empty.
fn clamp_span(min: usize, max: usize, limit: usize) -> Option<(usize, usize)> {
    let min = min.min(limit);
    let max = max.min(limit);
    (min < max).then_some((min, max))
}

/// Extract a rectangular region from the grid into a flat buffer.
///
/// # Layout
/// The buffer is filled row by row (y changes slowest, x changes fastest),
/// the same order `import_region` reads.
///
/// # Returns
/// Number of bytes written, or 0 if the clamped region is empty or the buffer
/// is too small.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
) -> usize {
    let Some((min_x, max_x)) = clamp_span(min_x, max_x, grid.width()) else {
        return 0;
    };
    let Some((min_y, max_y)) = clamp_span(min_y, max_y, grid.height()) else {
        return 0;
    };

    let span = max_x - min_x;
    let total_size = span * (max_y - min_y);
    if out_buf.len() < total_size {
        return 0;
    }

    for (y, out) in (min_y..max_y).zip(out_buf.chunks_mut(span)) {
        out.copy_from_slice(&grid.row(y)[min_x..max_x]);
    }

    total_size
}

/// Import a rectangular region from a flat buffer into the grid.
///
/// # Layout
/// Row by row, matching `extract_region`. Values are normalized: 0 = dead,
/// any non-zero = alive.
///
/// # Returns
/// Number of bytes read, or 0 if the clamped region is empty or the buffer
/// holds too little data.
pub fn import_region(
    grid: &mut Grid,
    in_buf: &[u8],
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
) -> usize {
    let Some((min_x, max_x)) = clamp_span(min_x, max_x, grid.width()) else {
        return 0;
    };
    let Some((min_y, max_y)) = clamp_span(min_y, max_y, grid.height()) else {
        return 0;
    };

    let span = max_x - min_x;
    let total_size = span * (max_y - min_y);
    if in_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            grid.set(x, y, in_buf[offset]);
            offset += 1;
        }
    }

    offset
}

/// Copy the live cells of `pattern` onto `grid` with its top-left corner at
/// `(left, top)`, wrapping across the edges. Dead pattern cells leave the grid
/// untouched.
pub fn stamp_pattern(grid: &mut Grid, pattern: &Grid, left: usize, top: usize) {
    for py in 0..pattern.height() {
        for px in 0..pattern.width() {
            if pattern.get(px, py) == 1 {
                let x = (left + px) % grid.width();
                let y = (top + py) % grid.height();
                grid.set(x, y, 1);
            }
        }
    }
}

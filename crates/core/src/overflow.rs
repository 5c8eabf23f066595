//! Overflow helpers - playfield boundary checks and the game-over predicate

use crate::grid::{Dimensions, Grid};

/// Whether any active cell sits at or past the playfield's right edge
pub fn horizontal_overflow(grid: &Grid, field: Dimensions) -> bool {
    grid.active_cells()
        .any(|(x, _)| x + grid.x_offset() >= field.width)
}

/// Whether, padded to the playfield, the grid has an active cell in the last row
///
/// A piece that reaches the bottom row counts as overflowing: the next step
/// down would leave the playfield.
pub fn vertical_overflow(grid: &Grid, field: Dimensions) -> bool {
    let Some(last) = field.height.checked_sub(1) else {
        return false;
    };
    let offset = grid.offset();
    grid.active_cells()
        .any(|(x, y)| y + offset.y == last && x + offset.x < field.width)
}

pub fn overflow(grid: &Grid, field: Dimensions) -> bool {
    horizontal_overflow(grid, field) || vertical_overflow(grid, field)
}

/// Game over: the foreground has not left the top two rows and already
/// collides with settled cells
pub fn end_condition(foreground: &Grid, background: &Grid) -> bool {
    foreground.y_offset() <= 1 && background.overlap(foreground)
}

//! Tetromino catalog - the 4x4 masks of every kind at every orientation
//!
//! Each rotation state is hand-authored as four mino positions `(x, y)` inside
//! the 4x4 piece box, following the usual SRS layouts. Masks are built from
//! those positions and labelled with the kind id so renderers can color them.
//!
//! The table is the single source of truth for piece shapes;
//! [`validate_catalog`] checks it is complete and that every state is the
//! clockwise quarter turn of the previous one.

use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{CellValue, Orientation, TetrominoKind, EMPTY_CELL, TETROMINO_SIZE};

/// Position of a single mino inside the piece box
pub type Mino = (usize, usize);

/// The four minos of one rotation state
pub type MinoSet = [Mino; 4];

/// A labelled 4x4 piece mask
pub type TetrominoCells = [[CellValue; TETROMINO_SIZE]; TETROMINO_SIZE];

/// Rotation states per kind, indexed by [`Orientation::index`]
type RotationTable = [MinoSet; 4];

const LONG_BOY: RotationTable = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const BACKWARDS_L: RotationTable = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L: RotationTable = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const SQUARE: RotationTable = [[(1, 0), (2, 0), (1, 1), (2, 1)]; 4];

const BACKWARDS_Z: RotationTable = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const T: RotationTable = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z: RotationTable = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

fn rotation_table(kind: TetrominoKind) -> &'static RotationTable {
    match kind {
        TetrominoKind::LongBoy => &LONG_BOY,
        TetrominoKind::BackwardsL => &BACKWARDS_L,
        TetrominoKind::L => &L,
        TetrominoKind::Square => &SQUARE,
        TetrominoKind::BackwardsZ => &BACKWARDS_Z,
        TetrominoKind::T => &T,
        TetrominoKind::Z => &Z,
    }
}

/// Mino positions for a kind and orientation
pub fn minos(kind: TetrominoKind, orientation: Orientation) -> MinoSet {
    rotation_table(kind)[orientation.index()]
}

/// Uniform random kind
pub fn random_tetromino(rng: &mut SimpleRng) -> TetrominoKind {
    rng.next_kind()
}

/// The labelled 4x4 mask for a kind and orientation
pub fn build_tetromino_cells(kind: TetrominoKind, orientation: Orientation) -> TetrominoCells {
    let mut cells = [[EMPTY_CELL; TETROMINO_SIZE]; TETROMINO_SIZE];
    for (x, y) in minos(kind, orientation) {
        cells[y][x] = kind.id();
    }
    cells
}

/// The mask wrapped in a 4x4 grid placed at `(x, y)`
pub fn build_tetromino_grid(
    kind: TetrominoKind,
    orientation: Orientation,
    x: usize,
    y: usize,
) -> Grid {
    Grid::from(build_tetromino_cells(kind, orientation)).with_offset(x, y)
}

/// Minos translated so the smallest x and y are 0, sorted
fn normalize(set: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let min_x = set.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = set.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let mut out: Vec<_> = set.iter().map(|&(x, y)| (x - min_x, y - min_y)).collect();
    out.sort_unstable();
    out
}

/// Quarter turn clockwise with y growing downward: (x, y) -> (-y, x)
fn rotate_cw(set: &MinoSet) -> Vec<(i32, i32)> {
    set.iter().map(|&(x, y)| (-(y as i32), x as i32)).collect()
}

fn as_signed(set: &MinoSet) -> Vec<(i32, i32)> {
    set.iter().map(|&(x, y)| (x as i32, y as i32)).collect()
}

/// Check the rotation table: every kind has four states of four distinct minos
/// inside the piece box, and each state is the clockwise turn of the previous
/// one, wrapping from West back to North.
pub fn validate_catalog() -> Result<()> {
    for kind in TetrominoKind::ALL {
        let table = rotation_table(kind);

        for (index, set) in table.iter().enumerate() {
            if set
                .iter()
                .any(|&(x, y)| x >= TETROMINO_SIZE || y >= TETROMINO_SIZE)
            {
                return Err(EngineError::Catalog(format!(
                    "{} state {} leaves the piece box",
                    kind.as_str(),
                    index
                )));
            }

            let distinct = normalize(&as_signed(set));
            if distinct.windows(2).any(|w| w[0] == w[1]) {
                return Err(EngineError::Catalog(format!(
                    "{} state {} repeats a mino",
                    kind.as_str(),
                    index
                )));
            }

            let next = &table[(index + 1) % 4];
            if normalize(&rotate_cw(set)) != normalize(&as_signed(next)) {
                return Err(EngineError::Catalog(format!(
                    "{} state {} is not a clockwise turn of state {}",
                    kind.as_str(),
                    (index + 1) % 4,
                    index
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn test_masks_have_four_labelled_cells() {
        for kind in TetrominoKind::ALL {
            for index in 0..4 {
                let cells = build_tetromino_cells(kind, Orientation::from_index(index));
                let filled: Vec<_> = cells.iter().flatten().filter(|&&c| c != 0).collect();
                assert_eq!(filled.len(), 4, "{:?} state {}", kind, index);
                assert!(filled.iter().all(|&&c| c == kind.id()));
            }
        }
    }

    #[test]
    fn test_long_boy_masks() {
        assert_eq!(
            build_tetromino_cells(TetrominoKind::LongBoy, Orientation::North),
            [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(
            build_tetromino_cells(TetrominoKind::LongBoy, Orientation::East),
            [[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]
        );
    }

    #[test]
    fn test_square_never_changes() {
        let north = build_tetromino_cells(TetrominoKind::Square, Orientation::North);
        for index in 1..4 {
            assert_eq!(
                build_tetromino_cells(TetrominoKind::Square, Orientation::from_index(index)),
                north
            );
        }
    }

    #[test]
    fn test_grid_is_placed_at_offset() {
        let grid = build_tetromino_grid(TetrominoKind::T, Orientation::North, 3, 2);
        assert_eq!(grid.width(), TETROMINO_SIZE);
        assert_eq!(grid.height(), TETROMINO_SIZE);
        assert_eq!((grid.x_offset(), grid.y_offset()), (3, 2));
        assert_eq!(grid.cells()[0], vec![0, 6, 0, 0]);
    }

    #[test]
    fn test_rotate_cw_turns_t_to_face_right() {
        let north = minos(TetrominoKind::T, Orientation::North);
        let east = minos(TetrominoKind::T, Orientation::East);
        assert_eq!(normalize(&rotate_cw(&north)), normalize(&as_signed(&east)));
    }
}

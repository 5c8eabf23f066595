//! Tetromino catalog tests

use std::collections::HashSet;

use stacktris::core::{build_tetromino_cells, random_tetromino, validate_catalog, SimpleRng};
use stacktris::types::{Orientation, TetrominoKind, TETROMINO_SIZE};

#[test]
fn test_catalog_validates() {
    assert!(validate_catalog().is_ok());
}

#[test]
fn test_every_entry_has_four_cells() {
    for kind in TetrominoKind::ALL {
        for index in 0..4 {
            let cells = build_tetromino_cells(kind, Orientation::from_index(index));
            assert_eq!(cells.len(), TETROMINO_SIZE);
            let count = cells.iter().flatten().filter(|&&c| c == kind.id()).count();
            assert_eq!(count, 4, "{} state {}", kind.as_str(), index);
        }
    }
}

#[test]
fn test_orientation_is_taken_mod_four() {
    for kind in TetrominoKind::ALL {
        assert_eq!(
            build_tetromino_cells(kind, Orientation::from_index(6)),
            build_tetromino_cells(kind, Orientation::South)
        );
    }
}

#[test]
fn test_non_square_kinds_change_shape_on_rotation() {
    for kind in TetrominoKind::ALL {
        let north = build_tetromino_cells(kind, Orientation::North);
        let east = build_tetromino_cells(kind, Orientation::East);
        assert_eq!(north == east, kind == TetrominoKind::Square, "{}", kind.as_str());
    }
}

#[test]
fn test_random_tetromino_covers_all_kinds() {
    let mut rng = SimpleRng::new(2024);
    let seen: HashSet<_> = (0..200).map(|_| random_tetromino(&mut rng)).collect();
    assert_eq!(seen.len(), 7);
}

#[test]
fn test_random_tetromino_is_deterministic() {
    let mut a = SimpleRng::new(77);
    let mut b = SimpleRng::new(77);
    for _ in 0..50 {
        assert_eq!(random_tetromino(&mut a), random_tetromino(&mut b));
    }
}

//! Player reducer tests - moves, rotations and their legality checks

use stacktris::core::{Command, EngineConfig, GameState, Grid};
use stacktris::types::{Move, Orientation, TetrominoKind};

fn state_with(kind: TetrominoKind, orientation: Orientation, x: usize, y: usize) -> GameState {
    GameState::new(EngineConfig::default(), 3).with_piece(kind, orientation, x, y)
}

#[test]
fn test_move_right_rejected_at_x_offset_nine() {
    let state = state_with(TetrominoKind::T, Orientation::North, 9, 5);
    let next = state.apply(Command::Move(Move::Right)).unwrap();
    assert_eq!(next.foreground().x_offset(), 9);
    assert_eq!(next.foreground(), state.foreground());
}

#[test]
fn test_move_right_until_wall() {
    let mut state = state_with(TetrominoKind::Square, Orientation::North, 3, 5);
    for _ in 0..10 {
        state = state.apply(Command::Move(Move::Right)).unwrap();
    }
    // Square's right column is box column 2.
    assert_eq!(state.foreground().x_offset(), 7);
}

#[test]
fn test_move_left_until_wall() {
    let mut state = state_with(TetrominoKind::Square, Orientation::North, 3, 5);
    for _ in 0..10 {
        state = state.apply(Command::Move(Move::Left)).unwrap();
    }
    // Offsets clamp at 0 even though the box column 0 is empty.
    assert_eq!(state.foreground().x_offset(), 0);
}

#[test]
fn test_move_down_stops_on_bottom_row() {
    let mut state = state_with(TetrominoKind::Square, Orientation::North, 3, 0);
    for _ in 0..30 {
        state = state.apply(Command::Move(Move::Down)).unwrap();
    }
    // Square's bottom row is box row 1, so the box stops at y 18.
    assert_eq!(state.foreground().y_offset(), 18);
}

#[test]
fn test_move_blocked_by_settled_cells() {
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[10] = vec![7; 10];
    let state = state_with(TetrominoKind::Square, Orientation::North, 3, 8)
        .with_background(Grid::from_rows(&rows).unwrap())
        .unwrap();
    let next = state.apply(Command::Move(Move::Down)).unwrap();
    assert_eq!(next.foreground().y_offset(), 8);
}

#[test]
fn test_four_rotations_return_starting_mask() {
    for kind in TetrominoKind::ALL {
        let start = state_with(kind, Orientation::North, 3, 6);
        let mut state = start.clone();
        let mut masks = Vec::new();
        for _ in 0..4 {
            state = state.apply(Command::Rotate).unwrap();
            masks.push(state.foreground().cells());
        }
        assert_eq!(state.foreground(), start.foreground(), "{}", kind.as_str());
        assert_eq!(state.orientation(), Orientation::North);
        assert_eq!(masks[3], start.foreground().cells());
    }
}

#[test]
fn test_rotation_rejected_past_bottom() {
    // North LongBoy in box row 1 at y 17 sits on row 18; East would reach row 20.
    let state = state_with(TetrominoKind::LongBoy, Orientation::North, 3, 17);
    let next = state.apply(Command::Rotate).unwrap();
    assert_eq!(next.orientation(), Orientation::North);
    assert_eq!(next.foreground(), state.foreground());
}

#[test]
fn test_rotation_ignores_settled_cells() {
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[8][5] = 4;
    let state = state_with(TetrominoKind::LongBoy, Orientation::North, 3, 6)
        .with_background(Grid::from_rows(&rows).unwrap())
        .unwrap();
    // East occupies column 5, rows 6..=9, through the settled cell.
    let next = state.apply(Command::Rotate).unwrap();
    assert_eq!(next.orientation(), Orientation::East);
}

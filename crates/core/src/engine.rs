//! Engine reducers - the gravity-driven piece lifecycle
//!
//! Each reducer takes the current state and returns the next one. A gravity
//! tick ([`update_background`]) runs, in order:
//!
//! 1. spawn a piece if none is active
//! 2. shift the foreground one row down
//! 3. reset the game if the shifted piece is stuck at the top
//! 4. land the piece (merge + spawn) if it reached the bottom row or the
//!    shifted piece collides with settled cells
//! 5. clear every full row, scoring each one
//! 6. otherwise keep the shifted piece

use crate::grid::Grid;
use crate::overflow::{end_condition, vertical_overflow};
use crate::state::{GameState, TickEvent};
use crate::tetromino::{build_tetromino_grid, random_tetromino};
use crate::types::{Orientation, TetrominoKind, COMBO_BASE};

/// Initial state for the same configuration, with a fresh piece
///
/// The random source carries over so consecutive games do not replay the same
/// pieces.
pub fn reset_state(state: &GameState) -> GameState {
    spawn_tetromino(&GameState::initial(state.config, state.rng), None)
}

/// Place a new piece at the spawn offset with orientation North
///
/// Picks a random kind when `kind` is `None`.
pub fn spawn_tetromino(state: &GameState, kind: Option<TetrominoKind>) -> GameState {
    let mut rng = state.rng;
    let kind = kind.unwrap_or_else(|| random_tetromino(&mut rng));

    GameState {
        foreground: build_tetromino_grid(
            kind,
            Orientation::North,
            state.config.spawn_x,
            state.config.spawn_y,
        ),
        current_piece: Some(kind),
        orientation: Orientation::North,
        rng,
        last_event: None,
        ..state.clone()
    }
}

/// Commit the foreground into the background and clear the piece slot
pub fn merge_foreground(state: &GameState) -> GameState {
    GameState {
        background: state.background.merge(&state.foreground),
        foreground: Grid::new(state.config.width, state.config.height),
        current_piece: None,
        orientation: Orientation::North,
        last_event: None,
        ..state.clone()
    }
}

/// Add `delta` to the running score
pub fn update_score(state: &GameState, delta: u32) -> GameState {
    GameState {
        score: state.score.saturating_add(delta),
        last_event: None,
        ..state.clone()
    }
}

/// Result of clearing every full row of a background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub background: Grid,
    pub lines_cleared: u32,
    pub score: u32,
}

/// Delete full rows top to bottom until none remain
///
/// The first row cleared is worth [`COMBO_BASE`]; each further row in the same
/// pass is worth `combo + combo * 2` of the previous one, and every row's
/// value is added: 1 row 100, 2 rows 400, 3 rows 1300, 4 rows 4000.
pub fn clear_full_rows(background: &Grid) -> LineClear {
    let mut background = background.clone();
    let mut lines_cleared = 0u32;
    let mut combo = 0u32;
    let mut score = 0u32;

    while let Some(y) = background.first_full_row() {
        background = background.delete_row(y);
        lines_cleared += 1;
        combo = if combo == 0 {
            COMBO_BASE
        } else {
            combo.saturating_add(combo.saturating_mul(2))
        };
        score = score.saturating_add(combo);
    }

    LineClear {
        background,
        lines_cleared,
        score,
    }
}

/// One gravity tick: fall, land, clear rows, score
pub fn update_background(state: &GameState) -> GameState {
    let state = if state.current_piece.is_none() {
        spawn_tetromino(state, None)
    } else {
        state.clone()
    };

    let shifted = state.foreground.shift(1, 0);

    if end_condition(&shifted, &state.background) {
        return GameState {
            last_event: Some(TickEvent {
                game_over: true,
                ..TickEvent::default()
            }),
            ..reset_state(&state)
        };
    }

    let landed = vertical_overflow(&state.foreground, state.field())
        || state.background.overlap(&shifted);

    let next = if landed {
        spawn_tetromino(&merge_foreground(&state), None)
    } else {
        GameState {
            foreground: shifted,
            ..state
        }
    };

    let clear = clear_full_rows(&next.background);

    GameState {
        background: clear.background,
        score: next.score.saturating_add(clear.score),
        lines: next.lines.saturating_add(clear.lines_cleared),
        last_event: Some(TickEvent {
            landed,
            lines_cleared: clear.lines_cleared,
            line_clear_score: clear.score,
            game_over: false,
        }),
        ..next
    }
}

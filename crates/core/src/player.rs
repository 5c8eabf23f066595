//! Player reducers - input-driven moves and rotations
//!
//! An illegal move or rotation is not an error: the reducer hands back the
//! state unchanged. There are no wall kicks.

use crate::error::{EngineError, Result};
use crate::overflow::{horizontal_overflow, overflow, vertical_overflow};
use crate::state::GameState;
use crate::tetromino::build_tetromino_grid;
use crate::types::Move;

/// Shift the falling piece one cell in `direction` if the result is legal
///
/// Rejected when the shifted piece collides with the background or leaves the
/// playfield sideways, or when the piece already sits on the bottom row. The
/// bottom-row check looks at the piece before the shift. With no active piece
/// the state is returned unchanged.
pub fn move_tetromino(state: &GameState, direction: Move) -> GameState {
    if state.current_piece.is_none() {
        return GameState {
            last_event: None,
            ..state.clone()
        };
    }

    let (down, right) = direction.delta();
    let shifted = state.foreground.shift(down, right);
    let field = state.field();

    let rejected = state.background.overlap(&shifted)
        || horizontal_overflow(&shifted, field)
        || vertical_overflow(&state.foreground, field);

    GameState {
        foreground: if rejected {
            state.foreground.clone()
        } else {
            shifted
        },
        last_event: None,
        ..state.clone()
    }
}

/// Turn the falling piece a quarter clockwise in place
///
/// The rotated mask keeps the piece's offset and is accepted only if it stays
/// inside the playfield. Fails with [`EngineError::InvalidCommand`] when no
/// piece is active.
pub fn rotate_tetromino(state: &GameState) -> Result<GameState> {
    let kind = state.current_piece.ok_or_else(|| {
        EngineError::InvalidCommand("rotate: no active piece".to_string())
    })?;

    let orientation = state.orientation.rotate_cw();
    let offset = state.foreground.offset();
    let rotated = build_tetromino_grid(kind, orientation, offset.x, offset.y);

    if overflow(&rotated, state.field()) {
        return Ok(GameState {
            last_event: None,
            ..state.clone()
        });
    }

    Ok(GameState {
        foreground: rotated,
        orientation,
        last_event: None,
        ..state.clone()
    })
}

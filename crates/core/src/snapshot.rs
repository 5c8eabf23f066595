use crate::state::{GameState, TickEvent};
use crate::types::{CellValue, Orientation, TetrominoKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: TetrominoKind,
    pub orientation: Orientation,
    pub x: usize,
    pub y: usize,
}

/// Everything a renderer needs to paint one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Background with the falling piece painted over it, `height` rows of
    /// `width` cells
    pub cells: Vec<Vec<CellValue>>,
    pub width: usize,
    pub height: usize,
    pub score: u32,
    pub lines: u32,
    pub active: Option<ActiveSnapshot>,
    pub last_event: Option<TickEvent>,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> CellValue {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or_default()
    }

    pub fn game_over(&self) -> bool {
        self.last_event.map_or(false, |event| event.game_over)
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        let field = self.field();
        GameSnapshot {
            cells: self.merged_cells(),
            width: field.width,
            height: field.height,
            score: self.score,
            lines: self.lines,
            active: self.current_piece.map(|kind| ActiveSnapshot {
                kind,
                orientation: self.orientation,
                x: self.foreground.x_offset(),
                y: self.foreground.y_offset(),
            }),
            last_event: self.last_event,
        }
    }
}

//! Game state module - the immutable value every command transforms
//!
//! A `GameState` is never mutated in place. Reducers in [`crate::engine`] and
//! [`crate::player`] build a new value from the old one; grids share their
//! cell storage, so copying a state is cheap.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::grid::{Dimensions, Grid};
use crate::rng::SimpleRng;
use crate::tetromino::build_tetromino_grid;
use crate::types::{CellValue, Orientation, TetrominoKind};

/// What the last command did to the piece lifecycle
///
/// Only gravity ticks produce an event; every other command clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TickEvent {
    /// The falling piece was merged into the background.
    pub landed: bool,
    pub lines_cleared: u32,
    /// Points awarded for the rows cleared this tick.
    pub line_clear_score: u32,
    /// The next piece could not be placed and the game was reset.
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) config: EngineConfig,
    /// Settled cells, playfield size, offset (0, 0)
    pub(crate) background: Grid,
    /// The falling piece (4x4 box placed by offset), or an empty playfield-size
    /// grid while no piece is active
    pub(crate) foreground: Grid,
    pub(crate) score: u32,
    pub(crate) lines: u32,
    pub(crate) current_piece: Option<TetrominoKind>,
    pub(crate) orientation: Orientation,
    pub(crate) rng: SimpleRng,
    pub(crate) last_event: Option<TickEvent>,
}

impl GameState {
    /// Initial state: empty playfield, score 0, no active piece
    pub fn new(config: EngineConfig, seed: u32) -> Self {
        Self::initial(config, SimpleRng::new(seed))
    }

    pub(crate) fn initial(config: EngineConfig, rng: SimpleRng) -> Self {
        Self {
            config,
            background: Grid::new(config.width, config.height),
            foreground: Grid::new(config.width, config.height),
            score: 0,
            lines: 0,
            current_piece: None,
            orientation: Orientation::North,
            rng,
            last_event: None,
        }
    }

    /// Replace the settled cells
    ///
    /// The grid must have the playfield's dimensions; its offset is reset to
    /// (0, 0).
    pub fn with_background(self, background: Grid) -> Result<Self> {
        if background.dimensions() != self.field() {
            return Err(EngineError::InvalidConfig(format!(
                "background is {}x{}, playfield is {}x{}",
                background.width(),
                background.height(),
                self.config.width,
                self.config.height
            )));
        }
        Ok(Self {
            background: background.with_offset(0, 0),
            ..self
        })
    }

    /// Place a piece of `kind` at `orientation` with its box at `(x, y)`
    pub fn with_piece(
        self,
        kind: TetrominoKind,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Self {
        Self {
            foreground: build_tetromino_grid(kind, orientation, x, y),
            current_piece: Some(kind),
            orientation,
            ..self
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Playfield dimensions
    pub fn field(&self) -> Dimensions {
        self.config.dimensions()
    }

    pub fn background(&self) -> &Grid {
        &self.background
    }

    pub fn foreground(&self) -> &Grid {
        &self.foreground
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows cleared since the last reset
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn current_piece(&self) -> Option<TetrominoKind> {
        self.current_piece
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn last_event(&self) -> Option<TickEvent> {
        self.last_event
    }

    pub fn rng(&self) -> SimpleRng {
        self.rng
    }

    /// The playfield as the renderer paints it: settled cells with the
    /// falling piece on top
    pub fn merged_cells(&self) -> Vec<Vec<CellValue>> {
        self.background.merge(&self.foreground).cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = GameState::new(EngineConfig::default(), 7);
        assert!(state.background().is_empty());
        assert!(state.foreground().is_empty());
        assert_eq!(state.foreground().dimensions(), state.field());
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.current_piece(), None);
        assert_eq!(state.orientation(), Orientation::North);
        assert_eq!(state.last_event(), None);
    }

    #[test]
    fn test_with_background_checks_dimensions() {
        let state = GameState::new(EngineConfig::default(), 7);
        assert!(matches!(
            state.clone().with_background(Grid::new(4, 4)),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(state.with_background(Grid::new(10, 20)).is_ok());
    }

    #[test]
    fn test_merged_cells_paint_piece_over_background() {
        let state = GameState::new(EngineConfig::default(), 7).with_piece(
            TetrominoKind::Square,
            Orientation::North,
            0,
            0,
        );
        let cells = state.merged_cells();
        assert_eq!(cells.len(), 20);
        assert_eq!(&cells[0][..4], &[0, 4, 4, 0]);
        assert_eq!(&cells[1][..4], &[0, 4, 4, 0]);
    }
}

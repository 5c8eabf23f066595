//! Engine configuration: playfield size and spawn offset.

use crate::error::{EngineError, Result};
use crate::grid::Dimensions;
use crate::types::{GRID_HEIGHT, GRID_WIDTH, SPAWN_X, SPAWN_Y, TETROMINO_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub spawn_x: usize,
    pub spawn_y: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
        }
    }
}

impl EngineConfig {
    /// Playfield of the given size, spawn box centered horizontally at the top
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let config = Self {
            width,
            height,
            spawn_x: width.saturating_sub(TETROMINO_SIZE) / 2,
            spawn_y: SPAWN_Y,
        };
        config.validate()?;
        Ok(config)
    }

    /// The spawn box must fit inside the playfield.
    pub fn validate(&self) -> Result<()> {
        if self.spawn_x + TETROMINO_SIZE > self.width {
            return Err(EngineError::InvalidConfig(format!(
                "spawn box at column {} does not fit a playfield {} wide",
                self.spawn_x, self.width
            )));
        }
        if self.spawn_y + TETROMINO_SIZE > self.height {
            return Err(EngineError::InvalidConfig(format!(
                "spawn box at row {} does not fit a playfield {} high",
                self.spawn_y, self.height
            )));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

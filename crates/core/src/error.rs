//! Engine errors.
//!
//! Illegal moves and rotations are not errors: they leave the state unchanged.
//! These variants cover malformed input at the engine boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A command the engine cannot act on (unknown text, or missing data it needs)
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Cell input that is not a dense rectangle
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A playfield that cannot hold the spawn box
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    /// A rotation table entry that breaks the catalog contract
    #[error("tetromino catalog: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

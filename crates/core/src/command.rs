//! Commands - the closed set of inputs the engine accepts
//!
//! Commands come from the input mapper, from the driver's gravity timer, or
//! from text (`"move:left"`, `"rotate"`, `"spawn:t"`, `"tick"`, `"score:100"`).

use std::str::FromStr;

use crate::engine::{merge_foreground, reset_state, spawn_tetromino, update_background, update_score};
use crate::error::{EngineError, Result};
use crate::player::{move_tetromino, rotate_tetromino};
use crate::state::GameState;
use crate::types::{Move, TetrominoKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shift the falling piece one cell
    Move(Move),
    /// Quarter turn clockwise
    Rotate,
    /// Place a new piece, random when no kind is given
    SpawnPiece(Option<TetrominoKind>),
    /// Commit the falling piece into the background
    MergeForeground,
    /// One gravity step (also accepted as `updateBackground`)
    AdvanceTick,
    /// Add points to the running score
    UpdateScore(u32),
    /// Start over from an empty playfield
    ResetState,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(_) => "move",
            Command::Rotate => "rotate",
            Command::SpawnPiece(_) => "spawn",
            Command::MergeForeground => "merge",
            Command::AdvanceTick => "tick",
            Command::UpdateScore(_) => "score",
            Command::ResetState => "reset",
        }
    }
}

impl FromStr for Command {
    type Err = EngineError;

    /// Parse `verb` or `verb:argument`, case-insensitive
    ///
    /// ```
    /// use stacktris_core::Command;
    /// use stacktris_core::types::{Move, TetrominoKind};
    ///
    /// assert_eq!("move:left".parse::<Command>().unwrap(), Command::Move(Move::Left));
    /// assert_eq!("spawn:t".parse::<Command>().unwrap(), Command::SpawnPiece(Some(TetrominoKind::T)));
    /// assert_eq!("updateBackground".parse::<Command>().unwrap(), Command::AdvanceTick);
    /// assert!("jump".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidCommand(s.to_string());

        let (verb, arg) = match s.trim().split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };

        let command = match (verb.to_lowercase().as_str(), arg) {
            ("move", Some(arg)) => Command::Move(Move::from_str(arg).ok_or_else(invalid)?),
            ("rotate", None) => Command::Rotate,
            ("spawn" | "spawnpiece", None) => Command::SpawnPiece(None),
            ("spawn" | "spawnpiece", Some(arg)) => {
                Command::SpawnPiece(Some(TetrominoKind::from_str(arg).ok_or_else(invalid)?))
            }
            ("merge" | "mergeforeground", None) => Command::MergeForeground,
            ("tick" | "advancetick" | "updatebackground", None) => Command::AdvanceTick,
            ("score" | "updatescore", Some(arg)) => {
                Command::UpdateScore(arg.parse().map_err(|_| invalid())?)
            }
            ("reset" | "resetstate", None) => Command::ResetState,
            _ => return Err(invalid()),
        };
        Ok(command)
    }
}

impl GameState {
    /// Run one command and return the next state
    ///
    /// Only a rotation without an active piece fails; illegal moves and
    /// rotations return the state unchanged.
    pub fn apply(&self, command: Command) -> Result<GameState> {
        let next = match command {
            Command::Move(direction) => move_tetromino(self, direction),
            Command::Rotate => rotate_tetromino(self)?,
            Command::SpawnPiece(kind) => spawn_tetromino(self, kind),
            Command::MergeForeground => merge_foreground(self),
            Command::AdvanceTick => update_background(self),
            Command::UpdateScore(delta) => update_score(self, delta),
            Command::ResetState => reset_state(self),
        };
        Ok(next)
    }
}

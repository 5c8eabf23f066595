//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the state machine that drives the
//! piece lifecycle. It has **no dependencies** on UI or I/O:
//!
//! - **Deterministic**: the random source lives inside the state, so the same
//!   seed and command sequence always produce the same game
//! - **Immutable**: every command returns a new [`GameState`]; grids share cell
//!   storage, so that is cheap
//! - **Portable**: runs in a terminal, headless, or under a test harness
//!
//! # Module Structure
//!
//! - [`grid`]: labelled cell matrix with a placement offset (shift, merge,
//!   overlap, row delete)
//! - [`tetromino`]: the 7 x 4 table of piece masks and random piece selection
//! - [`overflow`]: playfield boundary checks and the game-over predicate
//! - [`engine`]: gravity tick, landing, line clears, scoring, spawn, reset
//! - [`player`]: moves and rotations with legality checks
//! - [`command`]: the closed command set and its dispatch
//! - [`store`]: owner of the current state
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at the top with their 4x4 box at (3, 0), facing North
//! - Gravity moves the piece down one row per tick; the driver owns the clock
//! - A piece lands when it reaches the bottom row or would collide with
//!   settled cells, and the next piece spawns immediately
//! - Full rows clear top to bottom; the first is worth 100 and each further
//!   row in the same tick three times the previous one, all summed
//! - A piece stuck at the top resets the game
//! - Rotation is clockwise in place, without wall kicks
//!
//! # Example
//!
//! ```
//! use stacktris_core::{Command, EngineConfig, Store};
//! use stacktris_core::types::{Move, TetrominoKind};
//!
//! let mut store = Store::new(EngineConfig::default(), 12345).unwrap();
//! store.apply(Command::SpawnPiece(Some(TetrominoKind::T))).unwrap();
//!
//! store.apply(Command::Move(Move::Left)).unwrap();
//! store.apply(Command::Rotate).unwrap();
//! store.apply(Command::AdvanceTick).unwrap();
//!
//! let snapshot = store.snapshot();
//! let active = snapshot.active.unwrap();
//! assert_eq!((active.x, active.y), (2, 1));
//! assert_eq!(snapshot.score, 0);
//! ```

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod overflow;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod tetromino;

pub use stacktris_types as types;

// Re-export commonly used types for convenience
pub use command::Command;
pub use config::EngineConfig;
pub use engine::{clear_full_rows, merge_foreground, reset_state, spawn_tetromino, update_background, update_score, LineClear};
pub use error::{EngineError, Result};
pub use grid::{Dimensions, Grid, GridState, Offset};
pub use overflow::{end_condition, horizontal_overflow, overflow, vertical_overflow};
pub use player::{move_tetromino, rotate_tetromino};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use state::{GameState, TickEvent};
pub use store::Store;
pub use tetromino::{build_tetromino_cells, build_tetromino_grid, random_tetromino, validate_catalog};

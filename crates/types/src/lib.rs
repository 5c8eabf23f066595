//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, usable
//! from the engine, the input mapper and the renderer alike.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn offset**: (3, 0), the top-left corner of the 4x4 piece box
//!
//! # Cells
//!
//! A cell is a [`CellValue`]: `0` is empty, `1..=7` is the id of the
//! [`TetrominoKind`] that filled it (used by renderers for coloring).
//!
//! # Examples
//!
//! ```
//! use stacktris_types::{Move, Orientation, TetrominoKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = TetrominoKind::from_str("longBoy").unwrap();
//! assert_eq!(kind, TetrominoKind::LongBoy);
//! assert_eq!(kind.id(), 1);
//!
//! assert_eq!(Orientation::from_index(5), Orientation::East);
//! assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
//!
//! assert_eq!(Move::Left.delta(), (0, -1));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Playfield width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Playfield height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Side of the square box every tetromino mask fits in
pub const TETROMINO_SIZE: usize = 4;

/// Column of the piece box's top-left corner when a piece spawns
pub const SPAWN_X: usize = 3;

/// Row of the piece box's top-left corner when a piece spawns
pub const SPAWN_Y: usize = 0;

/// Points for the first row cleared in a single tick.
///
/// Every further row cleared in the same tick is worth three times the
/// previous one (100, 300, 900, ...), and each step's value is added.
pub const COMBO_BASE: u32 = 100;

/// Value of an empty cell
pub const EMPTY_CELL: CellValue = 0;

/// A cell of a grid
///
/// - `0`: empty
/// - `1..=7`: filled, labelled with the [`TetrominoKind::id`] of the piece
pub type CellValue = u8;

/// The seven tetromino kinds
///
/// Naming follows the playfield's own vocabulary:
/// - **LongBoy**: the straight four-long bar
/// - **BackwardsL**: the mirrored L
/// - **L**: the L
/// - **Square**: the 2x2 block
/// - **BackwardsZ**: the mirrored Z
/// - **T**: the T
/// - **Z**: the Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    LongBoy,
    BackwardsL,
    L,
    Square,
    BackwardsZ,
    T,
    Z,
}

impl TetrominoKind {
    /// All kinds, in id order
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::LongBoy,
        TetrominoKind::BackwardsL,
        TetrominoKind::L,
        TetrominoKind::Square,
        TetrominoKind::BackwardsZ,
        TetrominoKind::T,
        TetrominoKind::Z,
    ];

    /// Cell label written into grids for this kind (never 0)
    pub fn id(self) -> CellValue {
        match self {
            TetrominoKind::LongBoy => 1,
            TetrominoKind::BackwardsL => 2,
            TetrominoKind::L => 3,
            TetrominoKind::Square => 4,
            TetrominoKind::BackwardsZ => 5,
            TetrominoKind::T => 6,
            TetrominoKind::Z => 7,
        }
    }

    /// Inverse of [`TetrominoKind::id`]
    ///
    /// ```
    /// use stacktris_types::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_id(4), Some(TetrominoKind::Square));
    /// assert_eq!(TetrominoKind::from_id(0), None);
    /// assert_eq!(TetrominoKind::from_id(8), None);
    /// ```
    pub fn from_id(id: CellValue) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse a kind from its name (case-insensitive)
    ///
    /// Accepts the camelCase names returned by [`TetrominoKind::as_str`] and
    /// the conventional single letters (`i`, `j`, `l`, `o`, `s`, `t`, `z`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "longboy" | "i" => Some(TetrominoKind::LongBoy),
            "backl" | "backwardsl" | "j" => Some(TetrominoKind::BackwardsL),
            "l" => Some(TetrominoKind::L),
            "square" | "o" => Some(TetrominoKind::Square),
            "backz" | "backwardsz" | "s" => Some(TetrominoKind::BackwardsZ),
            "t" => Some(TetrominoKind::T),
            "z" => Some(TetrominoKind::Z),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::LongBoy => "longBoy",
            TetrominoKind::BackwardsL => "backL",
            TetrominoKind::L => "l",
            TetrominoKind::Square => "square",
            TetrominoKind::BackwardsZ => "backZ",
            TetrominoKind::T => "t",
            TetrominoKind::Z => "z",
        }
    }
}

/// Rotation state of a piece, in quarter turns clockwise from spawn
///
/// The cycle goes: North -> East -> South -> West -> North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Orientation for a quarter-turn count, taken mod 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Orientation::North,
            1 => Orientation::East,
            2 => Orientation::South,
            _ => Orientation::West,
        }
    }

    /// Quarter turns from North (0..=3)
    pub fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use stacktris_types::Orientation;
    ///
    /// assert_eq!(Orientation::North.rotate_cw(), Orientation::East);
    /// assert_eq!(Orientation::East.rotate_cw(), Orientation::South);
    /// assert_eq!(Orientation::South.rotate_cw(), Orientation::West);
    /// assert_eq!(Orientation::West.rotate_cw(), Orientation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
        }
    }
}

/// Direction of a player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// `(down, right)` delta of magnitude 1
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// Parse a direction (case-insensitive): full names or `u`/`d`/`l`/`r`
    ///
    /// ```
    /// use stacktris_types::Move;
    ///
    /// assert_eq!(Move::from_str("R"), Some(Move::Right));
    /// assert_eq!(Move::from_str("down"), Some(Move::Down));
    /// assert_eq!(Move::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Move::Up),
            "down" | "d" => Some(Move::Down),
            "left" | "l" => Some(Move::Left),
            "right" | "r" => Some(Move::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

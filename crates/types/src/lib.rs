//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 4x4 cells
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//!
//! # Game Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Cells per row and per column |
//! | `CELL_COUNT` | 16 | Total number of cells |
//! | `WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `INITIAL_TILES` | 2 | Tiles spawned by a reset |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance (in percent) that a spawn is a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Tile, BOARD_SIZE};
//!
//! // Directions parse case-insensitively
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//!
//! // Tiles are powers of two, at least 2
//! let tile = Tile::new(1024).unwrap();
//! assert_eq!(tile.doubled().map(|t| t.value()), Some(2048));
//! assert!(Tile::new(3).is_none());
//!
//! // Actions use camelCase names
//! assert_eq!(
//!     GameAction::from_str("moveUp"),
//!     Some(GameAction::Move(Direction::Up))
//! );
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Cells per row and per column (4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board (16)
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that marks the game as won
pub const WIN_VALUE: u32 = 2048;

/// Number of tiles placed by a reset
pub const INITIAL_TILES: usize = 2;

/// Chance, in percent, that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// The four swipe directions
///
/// Each direction names the edge tiles travel toward:
/// - **Up**: toward row 0
/// - **Right**: toward column 3
/// - **Down**: toward row 3
/// - **Left**: toward column 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row/column delta of a single step toward the target edge
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.step(), (-1, 0));
    /// assert_eq!(Direction::Right.step(), (0, 1));
    /// ```
    pub fn step(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Cell `distance` steps away from the destination edge on line `line`
    ///
    /// A line is a column for vertical moves and a row for horizontal ones.
    /// Walking `distance` from 0 upward visits tiles in the order a sweep
    /// must resolve them: nearest to the destination edge first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// // Column 2, second cell from the top edge
    /// assert_eq!(Direction::Up.cell(2, 1), (1, 2));
    /// // Row 0, second cell from the right edge
    /// assert_eq!(Direction::Right.cell(0, 1), (0, 2));
    /// ```
    pub fn cell(&self, line: usize, distance: usize) -> (usize, usize) {
        let far = BOARD_SIZE - 1;
        match self {
            Direction::Up => (distance, line),
            Direction::Down => (far - distance, line),
            Direction::Left => (line, distance),
            Direction::Right => (line, far - distance),
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "right" | "r", "down" | "d", "left" | "l"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// An occupied cell's value: a power of two, at least 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u32);

impl Tile {
    /// The smaller of the two spawnable tiles
    pub const TWO: Tile = Tile(2);

    /// The larger of the two spawnable tiles
    pub const FOUR: Tile = Tile(4);

    /// Create a tile, rejecting values that are not powers of two >= 2
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Tile;
    ///
    /// assert_eq!(Tile::new(8).map(|t| t.value()), Some(8));
    /// assert_eq!(Tile::new(0), None);
    /// assert_eq!(Tile::new(1), None);
    /// assert_eq!(Tile::new(6), None);
    /// ```
    pub fn new(value: u32) -> Option<Self> {
        if value >= 2 && value.is_power_of_two() {
            Some(Tile(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Base-2 logarithm of the value (2 -> 1, 2048 -> 11)
    pub fn exponent(&self) -> u32 {
        self.0.trailing_zeros()
    }

    /// The tile produced by merging two copies of this one
    ///
    /// None for 2^31, the largest value a `u32` tile can hold; such tiles
    /// never merge.
    pub fn doubled(&self) -> Option<Self> {
        self.0.checked_mul(2).map(Tile)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Occupied cell
pub type Cell = Option<Tile>;

/// Actions that can be applied to the game
///
/// These are produced by the input layer (keys, drags) and applied to the
/// board engine by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward one edge
    Move(Direction),
    /// Throw away the current game and start over
    NewGame,
    /// Dismiss the win banner and keep playing
    ContinueAfterWin,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("continue"), Some(GameAction::ContinueAfterWin));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "newgame" | "reset" => Some(GameAction::NewGame),
            "continue" | "continueafterwin" => Some(GameAction::ContinueAfterWin),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::NewGame => "newGame",
            GameAction::ContinueAfterWin => "continue",
        }
    }
}

/// Core-side event emitted after a successful move.
///
/// Observers (renderer, logging) may consume it; it never feeds back into
/// the move rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub direction: Direction,
    /// Number of merges performed by the move
    pub merges: u32,
    /// Points added to the score by the move
    pub points: u32,
    /// Cell and tile placed by the post-move spawn (None when the board was full)
    pub spawned: Option<(usize, usize, Tile)>,
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine: grid state, the move algorithm,
//! tile spawning, score keeping, and the win/game-over flags.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Boards can be built directly with [`Board::from_values`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: No allocation on the move path
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid of optional tiles with adjacency queries
//! - [`game_state`]: The engine - moves, merges, spawns, score, flags
//! - [`rng`]: Seeded spawn RNG (cell choice and 2/4 draw)
//! - [`snapshot`]: Copyable view of the state for renderers
//!
//! # Game Rules
//!
//! - **Moves**: Every tile slides toward one edge until blocked
//! - **Merges**: Two equal tiles merge into one of double value, scoring that value
//! - **One merge per tile**: A tile created by a merge cannot merge again in the same move
//! - **Spawns**: After every move that changed the board, a 2 (90%) or 4 (10%) appears
//!   on a random empty cell
//! - **Win**: The first 2048 tile sets a sticky flag; play may continue
//! - **Game over**: Full board with no equal neighbours; further moves are no-ops
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_values([
//!     [2, 2, 4, 4],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//! let mut game = GameState::with_board(board, 12345);
//!
//! assert!(game.apply_move(Direction::Left));
//! assert_eq!(game.score(), 12);
//! assert_eq!(game.tile_at(0, 0).map(|t| t.value()), Some(4));
//! assert_eq!(game.tile_at(0, 1).map(|t| t.value()), Some(8));
//! ```
//!
//! # Concurrency
//!
//! The engine is synchronous and holds no locks. Calls on one instance must
//! be serialized by the caller.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use rng::SpawnRng;
pub use snapshot::GameSnapshot;

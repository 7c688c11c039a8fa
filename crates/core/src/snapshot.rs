//! Snapshot module - copyable view of a game for renderers
//!
//! The runner takes a snapshot after every input and redraws only when its
//! [`GameSnapshot::fingerprint`] differs from the one last drawn.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{MoveEvent, BOARD_SIZE};

/// Plain copy of everything a renderer needs after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Tile values, 0 meaning empty
    pub board: [[u32; BOARD_SIZE]; BOARD_SIZE],
    /// Cells produced by a merge during the last move
    pub merged: [[bool; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub best_score: u32,
    pub won: bool,
    pub continue_after_win: bool,
    pub game_over: bool,
    pub moves: u32,
    pub games: u32,
    pub seed: u64,
    pub last_event: Option<MoveEvent>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Value at (row, col), 0 when empty or out of range
    pub fn value_at(&self, row: usize, col: usize) -> u32 {
        self.board
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// True while the win banner should be shown
    pub fn awaiting_continue(&self) -> bool {
        self.won && !self.continue_after_win && !self.game_over
    }

    /// Hash over everything that affects what is drawn.
    ///
    /// Two snapshots with the same fingerprint render identically.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.board.hash(&mut h);
        self.merged.hash(&mut h);
        self.score.hash(&mut h);
        self.best_score.hash(&mut h);
        self.won.hash(&mut h);
        self.continue_after_win.hash(&mut h);
        self.game_over.hash(&mut h);
        self.moves.hash(&mut h);
        self.games.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            merged: [[false; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            best_score: 0,
            won: false,
            continue_after_win: false,
            game_over: false,
            moves: 0,
            games: 0,
            seed: 0,
            last_event: None,
        }
    }
}

//! Game state module - the board engine
//!
//! This module ties together the board, the spawn RNG, and the score/flag
//! bookkeeping. It owns the move algorithm: one sweep per line, tiles nearest
//! the destination edge resolved first, at most one merge per tile per move.

use log::{debug, info};

use crate::board::Board;
use crate::rng::SpawnRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What happened to a single tile during a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    Stayed,
    Moved,
    /// Merged into its neighbour, producing a tile of this value
    Merged(u32),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Cells produced by a merge during the current move.
    ///
    /// Cleared at the start of every move, before any tile slides.
    merged: [[bool; BOARD_SIZE]; BOARD_SIZE],
    rng: SpawnRng,
    score: u32,
    best_score: u32,
    won: bool,
    continue_after_win: bool,
    game_over: bool,
    /// Successful moves in the current game.
    moves: u32,
    /// Games started on this instance (increments on reset).
    games: u32,
    /// Last successful move (consumed by observers).
    last_event: Option<MoveEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The board starts with two random tiles.
    pub fn new(seed: u64) -> Self {
        let mut state = Self::blank(SpawnRng::new(seed));
        state.reset();
        state
    }

    /// Create a new game seeded from the operating system
    pub fn from_entropy() -> Self {
        let mut state = Self::blank(SpawnRng::from_entropy());
        state.reset();
        state
    }

    /// Install a prepared board without spawning anything
    ///
    /// Score starts at 0 and `game_over` is derived from the board. A 2048
    /// tile already on the board does not count as a win; only a move can
    /// set that flag.
    pub fn with_board(board: Board, seed: u64) -> Self {
        let mut state = Self::blank(SpawnRng::new(seed));
        state.board = board;
        state.games = 1;
        state.game_over = !board.can_move();
        state
    }

    fn blank(rng: SpawnRng) -> Self {
        Self {
            board: Board::new(),
            merged: [[false; BOARD_SIZE]; BOARD_SIZE],
            rng,
            score: 0,
            best_score: 0,
            won: false,
            continue_after_win: false,
            game_over: false,
            moves: 0,
            games: 0,
            last_event: None,
        }
    }

    /// Start a new game
    ///
    /// Clears the board and every per-game flag, then spawns two tiles.
    /// The best score is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.merged = [[false; BOARD_SIZE]; BOARD_SIZE];
        self.score = 0;
        self.won = false;
        self.continue_after_win = false;
        self.game_over = false;
        self.moves = 0;
        self.last_event = None;
        self.games = self.games.wrapping_add(1);

        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }

        debug!(
            "game {} started (seed {}, best {})",
            self.games,
            self.rng.seed(),
            self.best_score
        );
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Replace the best score, typically with a value loaded from storage
    pub fn set_best_score(&mut self, best_score: u32) {
        self.best_score = best_score;
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_continuing_after_win(&self) -> bool {
        self.continue_after_win
    }

    /// Record that the player chose to keep playing after winning
    pub fn continue_after_win(&mut self) {
        self.continue_after_win = true;
    }

    /// True while a win has not been acknowledged yet
    pub fn is_awaiting_continue(&self) -> bool {
        self.won && !self.continue_after_win && !self.game_over
    }

    /// Tile at (row, col)
    ///
    /// Coordinates outside the board read as an empty cell.
    pub fn tile_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col).flatten()
    }

    /// Whether the tile at (row, col) was produced by a merge in the last move
    pub fn merged_at(&self, row: usize, col: usize) -> bool {
        self.merged
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn last_event(&self) -> Option<MoveEvent> {
        self.last_event
    }

    /// Take and clear the last move event.
    pub fn take_last_event(&mut self) -> Option<MoveEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_values();
        out.merged = self.merged;
        out.score = self.score;
        out.best_score = self.best_score;
        out.won = self.won;
        out.continue_after_win = self.continue_after_win;
        out.game_over = self.game_over;
        out.moves = self.moves;
        out.games = self.games;
        out.seed = self.rng.seed();
        out.last_event = self.last_event;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::NewGame => {
                self.reset();
                true
            }
            GameAction::ContinueAfterWin => {
                if self.won && !self.continue_after_win {
                    self.continue_after_win();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Slide every tile toward the edge named by `direction`
    ///
    /// Returns whether any tile moved or merged. A successful move spawns one
    /// tile and then re-evaluates the win, game-over and best-score state.
    /// Once the game is over this is a no-op returning false.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        self.merged = [[false; BOARD_SIZE]; BOARD_SIZE];

        let mut moved = false;
        let mut merges = 0u32;
        let mut points = 0u32;

        for line in 0..BOARD_SIZE {
            // The tile already at the destination edge (distance 0) cannot move.
            for distance in 1..BOARD_SIZE {
                let (row, col) = direction.cell(line, distance);
                match self.slide_tile(row, col, direction) {
                    Slide::Stayed => {}
                    Slide::Moved => moved = true,
                    Slide::Merged(value) => {
                        moved = true;
                        merges += 1;
                        points = points.saturating_add(value);
                    }
                }
            }
        }

        if !moved {
            return false;
        }

        self.score = self.score.saturating_add(points);
        self.moves = self.moves.wrapping_add(1);
        let spawned = self.spawn_tile();

        if !self.won && self.board.contains(WIN_VALUE) {
            self.won = true;
            info!("reached {} after {} moves", WIN_VALUE, self.moves);
        }

        if !self.board.can_move() {
            self.game_over = true;
            info!(
                "game {} over: score {}, {} moves",
                self.games, self.score, self.moves
            );
        }

        if self.score > self.best_score {
            self.best_score = self.score;
        }

        self.last_event = Some(MoveEvent {
            direction,
            merges,
            points,
            spawned,
        });

        true
    }

    /// Advance one tile step by step toward the target edge
    fn slide_tile(&mut self, row: usize, col: usize, direction: Direction) -> Slide {
        let Some(Some(tile)) = self.board.get(row, col) else {
            return Slide::Stayed;
        };

        let step = direction.step();
        let (mut row, mut col) = (row, col);
        let mut outcome = Slide::Stayed;

        while let Some((next_row, next_col)) = neighbour(row, col, step) {
            match self.board.get(next_row, next_col) {
                Some(None) => {
                    self.board.set(next_row, next_col, Some(tile));
                    self.board.set(row, col, None);
                    row = next_row;
                    col = next_col;
                    outcome = Slide::Moved;
                }
                Some(Some(next)) if next == tile && !self.merged[next_row][next_col] => {
                    let Some(doubled) = tile.doubled() else {
                        break;
                    };
                    self.board.set(next_row, next_col, Some(doubled));
                    self.merged[next_row][next_col] = true;
                    self.board.set(row, col, None);
                    return Slide::Merged(doubled.value());
                }
                _ => break,
            }
        }

        outcome
    }

    /// Place a 2 or 4 on a random empty cell
    ///
    /// Returns the placement, or None when the board is full.
    fn spawn_tile(&mut self) -> Option<(usize, usize, Tile)> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.pick_index(empty.len())];
        let tile = self.rng.spawn_value();
        self.board.set(row, col, Some(tile));
        Some((row, col, tile))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Cell one step away from (row, col), if it is on the board
fn neighbour(row: usize, col: usize, (dr, dc): (i8, i8)) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr as isize)?;
    let col = col.checked_add_signed(dc as isize)?;
    (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
}

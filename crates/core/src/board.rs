//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is either empty or holds a tile.
//! Uses a fixed 2D array for zero-allocation access.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges 0..3
//! (left to right).

use arrayvec::ArrayVec;

use crate::types::{Cell, Tile, BOARD_SIZE, CELL_COUNT};

/// The game board - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from raw values, 0 meaning empty
    ///
    /// Returns None if any non-zero value is not a valid tile.
    pub fn from_values(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    board.cells[row][col] = Some(Tile::new(value)?);
                }
            }
        }
        Some(board)
    }

    /// Raw values of every cell, 0 meaning empty
    pub fn to_values(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                out[row][col] = cell.map_or(0, |t| t.value());
            }
        }
        out
    }

    #[inline(always)]
    fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if Self::in_bounds(row, col) {
            Some(self.cells[row][col])
        } else {
            None
        }
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if Self::in_bounds(row, col) {
            self.cells[row][col] = cell;
            true
        } else {
            false
        }
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Iterate over all cells in row-major order as (row, col, cell)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (row, col, cell))
        })
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.iter().filter(|(_, _, cell)| cell.is_some()).count()
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        self.iter()
            .filter(|(_, _, cell)| cell.is_none())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// True when some tile holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| cell.map_or(false, |t| t.value() == value))
    }

    /// Largest tile on the board
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().filter_map(|cell| *cell).max()
    }

    /// True when two 4-connected neighbours hold equal tiles that can merge
    pub fn has_adjacent_equal(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let Some(tile) = self.cells[row][col] else {
                    continue;
                };
                if tile.doubled().is_none() {
                    continue;
                }
                if row + 1 < BOARD_SIZE && self.cells[row + 1][col] == Some(tile) {
                    return true;
                }
                if col + 1 < BOARD_SIZE && self.cells[row][col + 1] == Some(tile) {
                    return true;
                }
            }
        }
        false
    }

    /// True when at least one move could change the board
    pub fn can_move(&self) -> bool {
        !self.is_full() || self.has_adjacent_equal()
    }
}

//! The 4×4 board.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::slide::{self, Cells};
use crate::error::BoardError;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Largest tile accepted by [`Board::from_rows`].
///
/// 131072 is the highest value reachable on a 4×4 board from 2/4 spawns.
pub const MAX_TILE: u32 = 1 << 17;

/// Whether a move changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOutcome {
    /// At least one tile slid or merged.
    Moved,
    /// The board is identical to before the move.
    Unchanged,
}

impl MoveOutcome {
    /// True if the move changed the board.
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// A 4×4 grid of tiles.
///
/// Cells hold `0` for empty or a power of two. Values can only change
/// through moves and spawns; there is no public cell setter.
///
/// Serializes as its rows. Deserializing goes through [`Board::from_rows`],
/// so invalid tiles are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[[u32; SIZE]; SIZE]", into = "[[u32; SIZE]; SIZE]")]
pub struct Board {
    cells: Cells,
}

impl TryFrom<[[u32; SIZE]; SIZE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[u32; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for [[u32; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidTile`] for the first cell (row-major)
    /// that is neither zero nor a power of two up to [`MAX_TILE`].
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, BoardError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Borrow the rows of the board.
    #[must_use]
    pub const fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Get the value at `(row, col)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate over all cells as `((row, col), value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), u32)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &value)| ((row, col), value))
        })
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|&(_, value)| value == 0)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&(_, value)| value == 0).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count_occupied(&self) -> usize {
        SIZE * SIZE - self.count_empty()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells().map(|(_, value)| value).max().unwrap_or(0)
    }

    /// Sum of all tiles. Merges preserve it.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells().map(|(_, value)| u64::from(value)).sum()
    }

    /// Place a tile into an empty cell.
    ///
    /// Callers must have checked that the cell is empty and in range.
    pub(crate) fn place(&mut self, row: usize, col: usize, value: u32) {
        debug_assert_eq!(self.cells[row][col], 0, "spawn into occupied cell");
        self.cells[row][col] = value;
    }

    /// Slide and merge all tiles toward `direction`, in place.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.cells;
        slide::apply(&mut self.cells, direction);
        if before == self.cells {
            MoveOutcome::Unchanged
        } else {
            MoveOutcome::Moved
        }
    }

    /// The board that would result from moving toward `direction`.
    #[must_use]
    pub fn shifted(mut self, direction: Direction) -> Self {
        self.apply_move(direction);
        self
    }

    /// True if the board is full and no two adjacent cells are equal.
    ///
    /// Only right and bottom neighbours are compared: equality is
    /// symmetric, so this visits every adjacent pair exactly once.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.cells[row][col];
                if value == 0 {
                    return false;
                }
                if col + 1 < SIZE && value == self.cells[row][col + 1] {
                    return false;
                }
                if row + 1 < SIZE && value == self.cells[row + 1][col] {
                    return false;
                }
            }
        }
        true
    }

    /// Directions that would change the board, in [`Direction::ALL`] order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.shifted(d) != *self)
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let cells: Vec<String> = line
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>4}", "_")
                    } else {
                        format!("{v:>4}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Zero or a power of two no larger than [`MAX_TILE`].
fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value.is_power_of_two() && (2..=MAX_TILE).contains(&value))
}

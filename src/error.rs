//! Error types for the board engine.

use std::fmt;

/// Errors raised when spawning a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Every cell is occupied, so there is nowhere to place a tile.
    BoardFull,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::BoardFull => write!(f, "no empty cell available for spawn"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Errors raised when building a board from explicit cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A cell holds a value that is neither zero nor a supported power of two.
    InvalidTile {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidTile { row, col, value } => {
                write!(f, "invalid tile {value} at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A direction string that is not one of `up`, `down`, `left` or `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized direction '{}' (expected up, down, left or right)",
            self.input
        )
    }
}

impl std::error::Error for ParseDirectionError {}

/// Result type for tile spawning.
pub type SpawnResult<T> = Result<T, SpawnError>;

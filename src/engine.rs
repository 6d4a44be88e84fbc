//! The board engine: a board plus the random source and render sink that
//! drive it.
//!
//! # Lifecycle
//!
//! ```text
//! Engine::new ──► new_game (empty board + 2 spawns)
//!                    │
//!                    ▼
//!            make_move ──► Moved? ──► spawn_random_tile
//!                    │
//!                    ▼
//!            is_terminal_state ──► new_game
//! ```
//!
//! ```
//! use twenty48::{Direction, Engine, GameRng, NullSink};
//!
//! let mut engine = Engine::new(GameRng::new(42), NullSink);
//! engine.new_game().unwrap();
//! assert_eq!(engine.board().count_occupied(), 2);
//!
//! let _ = engine.make_move(Direction::Left);
//! assert!(!engine.is_terminal_state());
//! ```

use log::debug;

use crate::board::{Board, Direction, MoveOutcome};
use crate::error::{SpawnError, SpawnResult};
use crate::render::{Placement, RenderSink};
use crate::rng::TileRng;

/// Inclusive range of the tile-value draw.
const VALUE_DRAW: (u32, u32) = (1, 10);

/// Draws at or below this value spawn a 2; the rest spawn a 4.
const TWO_THRESHOLD: u32 = 8;

/// Number of tiles spawned when a game starts.
pub const START_TILES: usize = 2;

/// Map a value draw in `1..=10` to a tile.
#[must_use]
pub const fn tile_for_draw(draw: u32) -> u32 {
    if draw <= TWO_THRESHOLD { 2 } else { 4 }
}

/// Owns a board and mutates it through spawns and moves.
#[derive(Debug, Clone)]
pub struct Engine<R, S> {
    board: Board,
    rng: R,
    sink: S,
}

impl<R: TileRng, S: RenderSink> Engine<R, S> {
    /// Create an engine with an empty board.
    #[must_use]
    pub fn new(rng: R, sink: S) -> Self {
        Self {
            board: Board::new(),
            rng,
            sink,
        }
    }

    /// Create an engine around an existing board.
    #[must_use]
    pub fn with_board(board: Board, rng: R, sink: S) -> Self {
        Self { board, rng, sink }
    }

    /// Discard the current board and start over with two spawned tiles.
    ///
    /// # Errors
    ///
    /// Never fails in practice: a fresh board has 16 empty cells.
    pub fn new_game(&mut self) -> SpawnResult<[Placement; START_TILES]> {
        self.board = Board::new();
        let first = self.spawn_random_tile()?;
        let second = self.spawn_random_tile()?;
        Ok([first, second])
    }

    /// Read-only view of the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Borrow the random source.
    #[must_use]
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Borrow the render sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the render sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Take back the random source and sink.
    #[must_use]
    pub fn into_parts(self) -> (Board, R, S) {
        (self.board, self.rng, self.sink)
    }

    /// Spawn a 2 (80%) or 4 (20%) into a uniformly chosen empty cell.
    ///
    /// The value is drawn first, then the cell: empty cells are listed in
    /// row-major order and one index is drawn from them.
    ///
    /// # Errors
    ///
    /// Returns [`SpawnError::BoardFull`] if no cell is empty. The board is
    /// left unchanged and nothing is drawn from the random source.
    pub fn spawn_random_tile(&mut self) -> SpawnResult<Placement> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return Err(SpawnError::BoardFull);
        }

        let value = tile_for_draw(self.rng.draw(VALUE_DRAW.0, VALUE_DRAW.1));
        let last = u32::try_from(empty.len() - 1).unwrap_or(u32::MAX);
        let index = usize::try_from(self.rng.draw(0, last)).unwrap_or(0);
        let (row, col) = empty[index.min(empty.len() - 1)];

        self.board.place(row, col, value);
        let placement = Placement { row, col, value };
        debug!("Spawned {value} at ({row}, {col})");
        self.sink.tile_placed(placement);
        Ok(placement)
    }

    /// Slide and merge every tile toward `direction`.
    ///
    /// Does not spawn; callers decide what to do with the outcome.
    pub fn make_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.board.apply_move(direction);
        if outcome.is_moved() {
            self.sink.board_moved(&self.board, direction);
        }
        outcome
    }

    /// True if the board is full and no two adjacent tiles match.
    #[must_use]
    pub fn is_terminal_state(&self) -> bool {
        self.board.is_terminal()
    }
}

//! Frame-driven game session.
//!
//! A session sits between an input source and the engine:
//! - Inputs arriving between frames overwrite each other (last key wins)
//! - Each [`Session::tick`] consumes at most one pending direction
//! - A changed board gets a new tile unless the game has ended
//! - Game over detaches input until [`Session::start`] is called again

use std::time::Duration;

use log::{debug, info};

use crate::board::{Board, Direction, MoveOutcome, check_invariants};
use crate::engine::Engine;
use crate::error::SpawnResult;
use crate::render::RenderSink;
use crate::rng::TileRng;

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Time between frames.
    pub frame_interval: Duration,
    /// Seed for the tile RNG.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            seed: 42,
        }
    }
}

/// A key press, as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// One of the four move keys.
    Direction(Direction),
    /// Any other key. Clears the pending direction.
    Other,
}

impl From<Direction> for Input {
    fn from(direction: Direction) -> Self {
        Input::Direction(direction)
    }
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No game is running.
    Idle,
    /// The game continues.
    Continue {
        /// The direction consumed this frame and its effect, if any.
        moved: Option<(Direction, MoveOutcome)>,
    },
    /// The board reached a terminal state; input is now detached.
    GameOver,
}

/// Drives an engine one frame at a time.
#[derive(Debug, Clone)]
pub struct Session<R, S> {
    engine: Engine<R, S>,
    running: bool,
    pending: Option<Direction>,
    frames: u64,
    accepted: u64,
    ignored: u64,
}

impl<R: TileRng, S: RenderSink> Session<R, S> {
    /// Wrap an engine. No game runs until [`Session::start`].
    #[must_use]
    pub fn new(engine: Engine<R, S>) -> Self {
        Self {
            engine,
            running: false,
            pending: None,
            frames: 0,
            accepted: 0,
            ignored: 0,
        }
    }

    /// Start a new game on a fresh board.
    ///
    /// Returns `Ok(false)` without doing anything if a game is already
    /// running.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SpawnError`] from the initial spawns.
    pub fn start(&mut self) -> SpawnResult<bool> {
        if self.running {
            return Ok(false);
        }
        self.engine.new_game()?;
        self.running = true;
        self.pending = None;
        self.accepted = 0;
        self.ignored = 0;
        info!("Game started");
        Ok(true)
    }

    /// Record a key press. Ignored while no game is running.
    pub fn press(&mut self, input: impl Into<Input>) {
        if !self.running {
            return;
        }
        self.pending = match input.into() {
            Input::Direction(direction) => Some(direction),
            Input::Other => None,
        };
    }

    /// Advance one frame.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SpawnError`] if a spawn finds no empty cell,
    /// which a changed board rules out.
    pub fn tick(&mut self) -> SpawnResult<TickOutcome> {
        if !self.running {
            return Ok(TickOutcome::Idle);
        }
        self.frames += 1;

        let mut moved = None;
        if let Some(direction) = self.pending.take() {
            let outcome = self.engine.make_move(direction);
            if outcome.is_moved() {
                debug!("Keypress {direction} made.");
                self.accepted += 1;
            } else {
                debug!("Keypress not allowed.");
                self.ignored += 1;
            }
            moved = Some((direction, outcome));
        }

        if self.engine.is_terminal_state() {
            self.end();
            return Ok(TickOutcome::GameOver);
        }

        if matches!(moved, Some((_, MoveOutcome::Moved))) {
            self.engine.spawn_random_tile()?;
        }
        debug_assert!(check_invariants(self.engine.board()).is_empty());

        Ok(TickOutcome::Continue { moved })
    }

    fn end(&mut self) {
        self.running = false;
        self.pending = None;
        info!(
            "Game over: max tile {}, {} moves",
            self.engine.board().max_tile(),
            self.accepted
        );
    }

    /// True while a game is in progress.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// The direction waiting for the next frame.
    #[must_use]
    pub const fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Read-only view of the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        self.engine.board()
    }

    /// Borrow the engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine<R, S> {
        &self.engine
    }

    /// Frames ticked while a game was running.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Moves that changed the board in the current game.
    #[must_use]
    pub const fn accepted_moves(&self) -> u64 {
        self.accepted
    }

    /// Moves that changed nothing in the current game.
    #[must_use]
    pub const fn ignored_moves(&self) -> u64 {
        self.ignored
    }
}

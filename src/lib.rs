// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! twenty48: a deterministic engine for the 2048 sliding-tile puzzle.
//!
//! This crate provides the board transition rules and the glue a front end
//! needs to run a game:
//! - Slide-and-merge moves with one merge per tile per move
//! - Seedable tile spawning (80% twos, 20% fours)
//! - Terminal-state detection
//! - A frame-driven session with last-key-wins input
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front end (TUI / headless / sim)  │
//! ├─────────────────────────────────────┤
//! │   Session (frames, input, start)    │
//! ├─────────────────────────────────────┤
//! │   Engine (board + rng + sink)       │
//! └─────────────────────────────────────┘
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod render;
pub mod rng;
pub mod session;
pub mod simulate;

pub use error::{BoardError, ParseDirectionError, SpawnError, SpawnResult};

// Re-export key types at crate root for convenience
pub use board::{Board, Direction, MoveOutcome};
pub use engine::Engine;
pub use render::{NullSink, Placement, RecordingSink, RenderSink};
pub use rng::{GameRng, SequenceRng, TileRng};
pub use session::{Input, Session, SessionConfig, TickOutcome};

//! Board layer.
//!
//! Implements the 4×4 grid and its transition rules:
//! - Directions and the axis/polarity they map to
//! - Slide-and-merge along a single line
//! - Terminal-state detection and legal move queries
//! - Invariant checks used by tests and fuzzers

mod direction;
mod grid;
mod invariants;
mod slide;

pub use direction::{Axis, Direction, Polarity};
pub use grid::{Board, MAX_TILE, MoveOutcome, SIZE};
pub use invariants::{InvariantViolation, check_invariants};

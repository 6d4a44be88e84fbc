//! Render sinks and tile presentation helpers.
//!
//! The engine never draws anything itself. It reports each tile placement
//! to a [`RenderSink`], and front ends (the terminal UI, the headless
//! runner, test spies) decide what to do with it.

mod palette;
mod text;

pub use palette::{PALETTE, Rgb, palette_index, tile_color};
pub use text::render_text;

use serde::Serialize;

use crate::board::{Board, Direction};

/// A tile written into a previously empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Row of the new tile (0 = top).
    pub row: usize,
    /// Column of the new tile (0 = left).
    pub col: usize,
    /// Value of the new tile (2 or 4).
    pub value: u32,
}

/// Receives board notifications from the engine.
pub trait RenderSink {
    /// A tile was spawned.
    fn tile_placed(&mut self, placement: Placement);

    /// A move changed the board. Not called for moves that change nothing.
    fn board_moved(&mut self, board: &Board, direction: Direction) {
        let _ = (board, direction);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn tile_placed(&mut self, placement: Placement) {
        (**self).tile_placed(placement);
    }

    fn board_moved(&mut self, board: &Board, direction: Direction) {
        (**self).board_moved(board, direction);
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn tile_placed(&mut self, _placement: Placement) {}
}

/// Records notifications for later inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    /// Every placement, in order.
    pub placements: Vec<Placement>,
    /// Directions of moves that changed the board, in order.
    pub moves: Vec<Direction>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for RecordingSink {
    fn tile_placed(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    fn board_moved(&mut self, _board: &Board, direction: Direction) {
        self.moves.push(direction);
    }
}

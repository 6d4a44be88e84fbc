#![no_main]

//! Board move fuzzer.
//!
//! Builds a board from arbitrary tile exponents, applies a sequence of
//! moves and checks after each one that:
//! - every cell is still empty or a power of two
//! - the tile sum is unchanged
//! - the outcome reports exactly whether the board changed
//! - a second identical move after an unchanged one is also unchanged

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use twenty48::board::check_invariants;
use twenty48::{Board, Direction, MoveOutcome};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzDirection {
    Up,
    Down,
    Left,
    Right,
}

impl From<FuzzDirection> for Direction {
    fn from(d: FuzzDirection) -> Self {
        match d {
            FuzzDirection::Up => Direction::Up,
            FuzzDirection::Down => Direction::Down,
            FuzzDirection::Left => Direction::Left,
            FuzzDirection::Right => Direction::Right,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct MovesInput {
    /// Tile exponents; 0 is an empty cell.
    exponents: [[u8; 4]; 4],
    moves: Vec<FuzzDirection>,
}

fuzz_target!(|input: MovesInput| {
    // Keep exponents small enough that a full board of merges cannot
    // exceed the largest allowed tile.
    let rows = input
        .exponents
        .map(|row| row.map(|e| match e % 12 {
            0 => 0u32,
            e => 1u32 << e,
        }));

    let Ok(mut board) = Board::from_rows(rows) else {
        return;
    };
    let sum = board.tile_sum();

    for d in input.moves.into_iter().take(64) {
        let direction = Direction::from(d);
        let before = board;
        let outcome = board.apply_move(direction);

        assert_eq!(outcome.is_moved(), board != before);
        assert_eq!(board.tile_sum(), sum, "moves must conserve the tile sum");
        assert!(check_invariants(&board).is_empty());

        if outcome == MoveOutcome::Unchanged {
            assert_eq!(board.apply_move(direction), MoveOutcome::Unchanged);
        }
        assert_eq!(board.is_terminal(), board.count_occupied() > 0 && board.legal_moves().is_empty());
    }
});

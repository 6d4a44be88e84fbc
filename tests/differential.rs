//! Differential testing against per-direction reference procedures.
//!
//! The engine implements all four moves with one routine parametrized by
//! axis and polarity. This module keeps four literal procedures, one per
//! direction, each scanning its own rows or columns with its own cursor,
//! and checks that both agree on arbitrary boards.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)] // Test code can use unwrap
#![allow(clippy::needless_range_loop)] // Reference procedures index like the rules read

use proptest::prelude::*;

use twenty48::{Board, Direction};

type Grid = [[u32; 4]; 4];

fn reference_up(b: &mut Grid) {
    for col in 0..4 {
        let mut merged = [false; 4];
        for row in 1..4 {
            if b[row][col] == 0 {
                continue;
            }
            let mut k = row;
            while k > 0 && b[k - 1][col] == 0 {
                b[k - 1][col] = b[k][col];
                b[k][col] = 0;
                k -= 1;
            }
            if k > 0 && b[k - 1][col] == b[k][col] && !merged[k - 1] {
                b[k - 1][col] *= 2;
                b[k][col] = 0;
                merged[k - 1] = true;
            }
        }
    }
}

fn reference_down(b: &mut Grid) {
    for col in 0..4 {
        let mut merged = [false; 4];
        for row in (0..3).rev() {
            if b[row][col] == 0 {
                continue;
            }
            let mut k = row;
            while k < 3 && b[k + 1][col] == 0 {
                b[k + 1][col] = b[k][col];
                b[k][col] = 0;
                k += 1;
            }
            if k < 3 && b[k + 1][col] == b[k][col] && !merged[k + 1] {
                b[k + 1][col] *= 2;
                b[k][col] = 0;
                merged[k + 1] = true;
            }
        }
    }
}

fn reference_left(b: &mut Grid) {
    for row in 0..4 {
        let mut merged = [false; 4];
        for col in 1..4 {
            if b[row][col] == 0 {
                continue;
            }
            let mut k = col;
            while k > 0 && b[row][k - 1] == 0 {
                b[row][k - 1] = b[row][k];
                b[row][k] = 0;
                k -= 1;
            }
            if k > 0 && b[row][k - 1] == b[row][k] && !merged[k - 1] {
                b[row][k - 1] *= 2;
                b[row][k] = 0;
                merged[k - 1] = true;
            }
        }
    }
}

fn reference_right(b: &mut Grid) {
    for row in 0..4 {
        let mut merged = [false; 4];
        for col in (0..3).rev() {
            if b[row][col] == 0 {
                continue;
            }
            let mut k = col;
            while k < 3 && b[row][k + 1] == 0 {
                b[row][k + 1] = b[row][k];
                b[row][k] = 0;
                k += 1;
            }
            if k < 3 && b[row][k + 1] == b[row][k] && !merged[k + 1] {
                b[row][k + 1] *= 2;
                b[row][k] = 0;
                merged[k + 1] = true;
            }
        }
    }
}

fn reference_move(grid: &Grid, direction: Direction) -> Grid {
    let mut b = *grid;
    match direction {
        Direction::Up => reference_up(&mut b),
        Direction::Down => reference_down(&mut b),
        Direction::Left => reference_left(&mut b),
        Direction::Right => reference_right(&mut b),
    }
    b
}

/// A cell: empty about a third of the time, otherwise 2..=1024.
fn cell() -> impl Strategy<Value = u32> + Clone {
    prop_oneof![
        1 => Just(0u32),
        2 => (1u32..=10).prop_map(|e| 1 << e),
    ]
}

/// Cells drawn from {0, 2, 4} so merges and chains are frequent.
fn crowded_cell() -> impl Strategy<Value = u32> + Clone {
    prop_oneof![Just(0u32), Just(2u32), Just(4u32)]
}

fn grid(cell: impl Strategy<Value = u32> + Clone) -> impl Strategy<Value = Grid> {
    prop::array::uniform4(prop::array::uniform4(cell))
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5000))]

    /// The parametrized routine matches the per-direction procedures.
    #[test]
    fn diff_move_matches_reference(g in grid(cell()), dir in direction()) {
        let board = Board::from_rows(g).unwrap();
        let moved = board.shifted(dir);
        prop_assert_eq!(*moved.rows(), reference_move(&g, dir), "direction {}", dir);
    }

    /// Same comparison on boards dense with equal neighbours.
    #[test]
    fn diff_move_matches_reference_crowded(g in grid(crowded_cell()), dir in direction()) {
        let board = Board::from_rows(g).unwrap();
        prop_assert_eq!(*board.shifted(dir).rows(), reference_move(&g, dir));
    }

    /// Sequences of moves stay in agreement.
    #[test]
    fn diff_move_sequences(g in grid(crowded_cell()), dirs in prop::collection::vec(direction(), 1..20)) {
        let mut board = Board::from_rows(g).unwrap();
        let mut reference = g;
        for dir in dirs {
            board.apply_move(dir);
            reference = reference_move(&reference, dir);
            prop_assert_eq!(*board.rows(), reference);
        }
    }
}

#[test]
fn test_reference_agrees_on_documented_cases() {
    let g: Grid = [[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]];
    assert_eq!(reference_move(&g, Direction::Right)[0], [0, 0, 4, 4]);
    let board = Board::from_rows(g).unwrap();
    assert_eq!(board.shifted(Direction::Right).rows()[0], [0, 0, 4, 4]);
}

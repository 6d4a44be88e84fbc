//! Property-based tests for board transitions.
//!
//! These tests verify the move, merge, spawn and terminal-state rules.
//! Run with: cargo test --release prop_board

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::needless_range_loop)]

use proptest::prelude::*;

use twenty48::board::{SIZE, check_invariants};
use twenty48::{Board, Direction, Engine, GameRng, MoveOutcome, NullSink, SequenceRng};

/// A cell: empty or a tile 2..=2048.
fn cell() -> impl Strategy<Value = u32> {
    prop_oneof![
        1 => Just(0u32),
        2 => (1u32..=11).prop_map(|e| 1 << e),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform4(prop::array::uniform4(cell()))
        .prop_map(|rows| Board::from_rows(rows).unwrap())
}

/// Full boards, so terminal states actually show up.
fn full_board() -> impl Strategy<Value = Board> {
    prop::array::uniform4(prop::array::uniform4((1u32..=4).prop_map(|e| 1 << e)))
        .prop_map(|rows| Board::from_rows(rows).unwrap())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Sorted non-zero tiles.
fn tiles(board: &Board) -> Vec<u32> {
    let mut v: Vec<u32> = board.cells().map(|(_, v)| v).filter(|&v| v != 0).collect();
    v.sort_unstable();
    v
}

/// Brute-force terminal check over all four neighbours of every cell.
fn has_no_move_brute_force(board: &Board) -> bool {
    let rows = board.rows();
    for r in 0..SIZE {
        for c in 0..SIZE {
            let v = rows[r][c];
            if v == 0 {
                return false;
            }
            let neighbours = [
                (r.wrapping_sub(1), c),
                (r + 1, c),
                (r, c.wrapping_sub(1)),
                (r, c + 1),
            ];
            for (nr, nc) in neighbours {
                if board.get(nr, nc) == Some(v) {
                    return false;
                }
            }
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Moves never invent values: the tile sum is preserved and the tile
    /// count never grows.
    #[test]
    fn prop_move_preserves_sum(b in board(), dir in direction()) {
        let moved = b.shifted(dir);
        prop_assert_eq!(moved.tile_sum(), b.tile_sum());
        prop_assert!(moved.count_occupied() <= b.count_occupied());
        prop_assert!(check_invariants(&moved).is_empty());
    }

    /// Without merges the multiset of tiles is unchanged.
    #[test]
    fn prop_unmerged_tiles_preserved(b in board(), dir in direction()) {
        let moved = b.shifted(dir);
        if moved.count_occupied() == b.count_occupied() {
            prop_assert_eq!(tiles(&moved), tiles(&b));
        }
    }

    /// A line of n equal tiles produces at most floor(n/2) merges.
    #[test]
    fn prop_at_most_half_merge(n in 1usize..=4, exp in 1u32..=10, dir in direction()) {
        let v = 1u32 << exp;
        let mut rows = [[0u32; SIZE]; SIZE];
        for i in 0..n {
            match dir {
                Direction::Left | Direction::Right => rows[0][i] = v,
                Direction::Up | Direction::Down => rows[i][0] = v,
            }
        }
        let b = Board::from_rows(rows).unwrap();
        let moved = b.shifted(dir);
        let merges = b.count_occupied() - moved.count_occupied();
        prop_assert_eq!(merges, n / 2);
        // No tile merged twice: nothing exceeds 2v.
        prop_assert!(moved.max_tile() <= 2 * v);
    }

    /// Repeating a move that changed nothing changes nothing.
    #[test]
    fn prop_unchanged_move_is_idempotent(b in board(), dir in direction()) {
        let mut once = b;
        if once.apply_move(dir) == MoveOutcome::Unchanged {
            prop_assert_eq!(once, b);
            prop_assert_eq!(once.apply_move(dir), MoveOutcome::Unchanged);
            prop_assert_eq!(once, b);
        }
    }

    /// The outcome reports exactly whether the board changed.
    #[test]
    fn prop_outcome_matches_change(b in board(), dir in direction()) {
        let mut after = b;
        let outcome = after.apply_move(dir);
        prop_assert_eq!(outcome.is_moved(), after != b);
    }

    /// Right/down-only terminal check agrees with a four-neighbour scan and
    /// with "no move changes the board".
    #[test]
    fn prop_terminal_equivalences(b in full_board()) {
        let terminal = b.is_terminal();
        prop_assert_eq!(terminal, has_no_move_brute_force(&b));
        prop_assert_eq!(terminal, b.legal_moves().is_empty());
    }

    /// Same equivalence on boards that may have empty cells. The empty
    /// board is the one exception: no move changes it, yet it is not over.
    #[test]
    fn prop_terminal_requires_full(b in board()) {
        if b.count_empty() > 0 {
            prop_assert!(!b.is_terminal());
        }
        if b.count_occupied() > 0 {
            prop_assert_eq!(b.is_terminal(), b.legal_moves().is_empty());
        }
    }

    /// Spawn writes a 2 or 4 into a previously empty cell and touches
    /// nothing else.
    #[test]
    fn prop_spawn_into_empty_cell(b in board(), seed in any::<u64>()) {
        prop_assume!(b.count_empty() > 0);
        let mut engine = Engine::with_board(b, GameRng::new(seed), NullSink);
        let p = engine.spawn_random_tile().unwrap();

        prop_assert_eq!(b.get(p.row, p.col), Some(0));
        prop_assert!(p.value == 2 || p.value == 4);
        let after = engine.board();
        prop_assert_eq!(after.get(p.row, p.col), Some(p.value));
        prop_assert_eq!(after.count_empty(), b.count_empty() - 1);
        for ((r, c), v) in b.cells() {
            if (r, c) != (p.row, p.col) {
                prop_assert_eq!(after.get(r, c), Some(v));
            }
        }
    }

    /// Value draws 1..=8 spawn a 2 and 9..=10 spawn a 4; the index draw
    /// selects the n-th empty cell in row-major order.
    #[test]
    fn prop_spawn_draw_mapping(b in board(), value_draw in 1u32..=10, index_draw in 0u32..16) {
        let empty = b.empty_cells();
        prop_assume!(!empty.is_empty());
        let index = (index_draw as usize).min(empty.len() - 1);

        let rng = SequenceRng::new(vec![value_draw, index_draw]);
        let mut engine = Engine::with_board(b, rng, NullSink);
        let p = engine.spawn_random_tile().unwrap();

        let expected = if value_draw <= 8 { 2 } else { 4 };
        prop_assert_eq!(p.value, expected);
        prop_assert_eq!((p.row, p.col), empty[index]);
    }
}

#[test]
fn test_spawn_ratio_is_roughly_80_20() {
    let mut engine = Engine::new(GameRng::new(2024), NullSink);
    let mut fours = 0u32;
    let trials = 10_000u32;
    for _ in 0..trials {
        let [a, b] = engine.new_game().unwrap();
        fours += u32::from(a.value == 4) + u32::from(b.value == 4);
    }
    let ratio = f64::from(fours) / f64::from(trials * 2);
    assert!((0.17..0.23).contains(&ratio), "ratio of fours was {ratio}");
}

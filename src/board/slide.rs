//! Slide-and-merge along one axis.
//!
//! Every direction is the same routine viewed through a different
//! coordinate mapping: position 0 of a line is the cell on the target
//! edge, position 3 the cell farthest from it.

use super::direction::{Axis, Direction, Polarity};
use super::grid::SIZE;

/// Grid storage, indexed `[row][col]`.
pub(super) type Cells = [[u32; SIZE]; SIZE];

/// Map a (line, position) pair to a `(row, col)` cell.
#[inline]
const fn cell_at(axis: Axis, polarity: Polarity, line: usize, pos: usize) -> (usize, usize) {
    let along = match polarity {
        Polarity::TowardStart => pos,
        Polarity::TowardEnd => SIZE - 1 - pos,
    };
    match axis {
        Axis::Vertical => (along, line),
        Axis::Horizontal => (line, along),
    }
}

/// Apply a move in place.
///
/// Each line is processed independently. Tiles are visited from the one
/// next to the target edge outward; each slides through empty cells, then
/// merges with its edge-side neighbour if the values match and that
/// neighbour has not already absorbed a merge during this move.
pub(super) fn apply(cells: &mut Cells, direction: Direction) {
    let axis = direction.axis();
    let polarity = direction.polarity();

    for line in 0..SIZE {
        let at = |pos: usize| cell_at(axis, polarity, line, pos);
        let mut merged = [false; SIZE];

        for pos in 1..SIZE {
            let (r, c) = at(pos);
            if cells[r][c] == 0 {
                continue;
            }

            let mut k = pos;
            loop {
                let (cr, cc) = at(k);
                let (nr, nc) = at(k - 1);
                if cells[nr][nc] != 0 {
                    break;
                }
                cells[nr][nc] = cells[cr][cc];
                cells[cr][cc] = 0;
                k -= 1;
                if k == 0 {
                    break;
                }
            }

            if k > 0 && !merged[k - 1] {
                let (cr, cc) = at(k);
                let (nr, nc) = at(k - 1);
                if cells[nr][nc] == cells[cr][cc] {
                    cells[nr][nc] *= 2;
                    cells[cr][cc] = 0;
                    merged[k - 1] = true;
                }
            }
        }
    }
}

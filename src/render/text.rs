//! Plain-text board rendering for headless output.

use std::fmt::Write;

use crate::board::{Board, SIZE};

/// Width of one cell, excluding borders.
const CELL_WIDTH: usize = 6;

/// Render the board as a framed grid.
///
/// Output format:
/// ```text
/// ┌──────┬──────┬──────┬──────┐
/// │    2 │      │      │    4 │
/// ├──────┼──────┼──────┼──────┤
/// ...
/// └──────┴──────┴──────┴──────┘
/// ```
#[must_use]
pub fn render_text(board: &Board) -> String {
    let mut output = String::new();

    push_border(&mut output, '┌', '┬', '┐');
    for (row, line) in board.rows().iter().enumerate() {
        output.push('│');
        for &value in line {
            if value == 0 {
                let _ = write!(output, "{:CELL_WIDTH$}│", "");
            } else {
                let _ = write!(output, "{value:>w$} │", w = CELL_WIDTH - 1);
            }
        }
        output.push('\n');
        if row + 1 < SIZE {
            push_border(&mut output, '├', '┼', '┤');
        }
    }
    push_border(&mut output, '└', '┴', '┘');

    output
}

fn push_border(output: &mut String, left: char, mid: char, right: char) {
    output.push(left);
    for col in 0..SIZE {
        for _ in 0..CELL_WIDTH {
            output.push('─');
        }
        output.push(if col + 1 < SIZE { mid } else { right });
    }
    output.push('\n');
}

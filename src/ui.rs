//! Text rendering of a reconstructed board for the CLI.

use crate::common::CellState;
use crate::config::GRID_SIZE;
use crate::replay::BoardView;

/// Render the board as a grid with lettered columns and numbered rows:
/// `x` hit, `o` miss, `·` unguessed.
pub fn render_board(view: &BoardView) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        out.push(' ');
        out.push((b'A' + c) as char);
    }
    out.push('\n');
    for (r, row) in view.rows().enumerate() {
        out.push_str(&format!("{:2} ", r + 1));
        for cell in row {
            let mark = match cell {
                CellState::Hit => 'x',
                CellState::Miss => 'o',
                CellState::Empty => '·',
            };
            out.push(' ');
            out.push(mark);
        }
        out.push('\n');
    }
    out
}

//! Plain-text board renderer for the native build and logs

use std::fmt::Write;

use super::CellKind;
use crate::session::Snapshot;
use crate::sim::Grid;

/// Render the board as rows of `#` (snake), `*` (food), `.` (empty),
/// followed by a status line.
pub fn render_text(snap: &Snapshot) -> String {
    let grid = Grid::new(snap.board_size);
    let side = snap.board_size.max(0) as usize;
    let mut out = String::with_capacity((side + 1) * side + 64);

    for (i, cell) in grid.cells().enumerate() {
        out.push(snap.cell_kind(cell).ascii());
        if (i + 1) % side == 0 {
            out.push('\n');
        }
    }

    let _ = write!(out, "Score: {}  High Score: {}", snap.score, snap.high_score);
    if snap.game_over {
        out.push_str("  GAME OVER");
    }
    out
}

/// Count cells of one kind; handy for checking a frame
pub fn count_kind(snap: &Snapshot, kind: CellKind) -> usize {
    Grid::new(snap.board_size)
        .cells()
        .filter(|c| snap.cell_kind(*c) == kind)
        .count()
}

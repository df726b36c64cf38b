//! Rendering module
//!
//! Renderers only read a `Snapshot`; they never touch the simulation.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
pub use text::render_text;

use crate::session::Snapshot;
use crate::sim::Cell;

/// What occupies a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Snake,
    Food,
    Empty,
}

impl CellKind {
    /// Glyph shown in the browser grid
    pub fn emoji(&self) -> &'static str {
        match self {
            CellKind::Snake => "🐍",
            CellKind::Food => "🍎",
            CellKind::Empty => " ",
        }
    }

    /// Glyph used by the text renderer
    pub fn ascii(&self) -> char {
        match self {
            CellKind::Snake => '#',
            CellKind::Food => '*',
            CellKind::Empty => '.',
        }
    }
}

impl Snapshot {
    /// Classify a cell. Snake wins over food.
    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if self.segments.contains(&cell) {
            CellKind::Snake
        } else if self.food == cell {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_kind() {
        let snap = Snapshot {
            segments: vec![Cell::new(1, 1), Cell::new(0, 1)],
            food: Cell::new(2, 2),
            board_size: 3,
            score: 0,
            high_score: 0,
            game_over: false,
            game_over_reason: None,
        };
        assert_eq!(snap.cell_kind(Cell::new(1, 1)), CellKind::Snake);
        assert_eq!(snap.cell_kind(Cell::new(0, 1)), CellKind::Snake);
        assert_eq!(snap.cell_kind(Cell::new(2, 2)), CellKind::Food);
        assert_eq!(snap.cell_kind(Cell::new(0, 0)), CellKind::Empty);
    }

    #[test]
    fn test_snake_drawn_over_food() {
        let snap = Snapshot {
            segments: vec![Cell::new(0, 0)],
            food: Cell::new(0, 0),
            board_size: 2,
            score: 0,
            high_score: 0,
            game_over: true,
            game_over_reason: None,
        };
        assert_eq!(snap.cell_kind(Cell::new(0, 0)), CellKind::Snake);
    }
}

//! Board coordinate space

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A board cell. x grows right, y grows down.
pub type Cell = IVec2;

/// Square board of `size` x `size` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    /// True iff 0 <= x < size and 0 <= y < size
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.size && cell.y >= 0 && cell.y < self.size
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        let side = self.size.max(0) as usize;
        side * side
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20);
        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(19, 19)));
        assert!(!grid.in_bounds(Cell::new(-1, 0)));
        assert!(!grid.in_bounds(Cell::new(20, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 20)));
        assert!(!grid.in_bounds(Cell::new(5, -1)));
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.area());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
        assert!(cells.iter().all(|c| grid.in_bounds(*c)));
    }
}

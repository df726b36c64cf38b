//! Food placement

use rand::Rng;

use super::grid::{Cell, Grid};

/// Uniformly random cell not in `occupied`.
///
/// Rejection-samples the whole board. Returns None only when `occupied`
/// covers every cell, so the loop always has a free cell to find.
pub fn place_food<R: Rng>(rng: &mut R, grid: &Grid, occupied: &[Cell]) -> Option<Cell> {
    if grid.area() == 0 || grid.cells().all(|c| occupied.contains(&c)) {
        return None;
    }

    loop {
        let cell = Cell::new(
            rng.random_range(0..grid.size),
            rng.random_range(0..grid.size),
        );
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
}

//! Game configuration
//!
//! The shipped game always runs with `GameConfig::default()`; other values
//! exist so the simulation can be exercised on small or fixed boards.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Cell, Direction, Grid};

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length in cells
    pub board_size: i32,
    /// Tick period in milliseconds
    pub tick_interval_ms: u32,
    /// Head position after a reset
    pub start_cell: Cell,
    /// Heading after a reset
    pub start_direction: Direction,
    /// Storage key for the best score
    pub high_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            start_cell: Cell::new(START_CELL.0, START_CELL.1),
            start_direction: Direction::Right,
            high_score_key: HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Default config on a board of a different size. The start cell moves
    /// to the board centre when the usual one falls outside.
    pub fn with_board_size(board_size: i32) -> Self {
        let defaults = Self::default();
        let start_cell = if Grid::new(board_size).in_bounds(defaults.start_cell) {
            defaults.start_cell
        } else {
            Cell::splat(board_size / 2)
        };
        Self {
            board_size,
            start_cell,
            ..defaults
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 20);
        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.start_cell, Cell::new(8, 8));
        assert_eq!(config.start_direction, Direction::Right);
        assert_eq!(config.high_score_key, "highScore");
    }

    #[test]
    fn test_small_board_centres_start() {
        let config = GameConfig::with_board_size(4);
        assert_eq!(config.board_size, 4);
        assert_eq!(config.start_cell, Cell::new(2, 2));
        assert!(config.grid().in_bounds(config.start_cell));

        let config = GameConfig::with_board_size(30);
        assert_eq!(config.start_cell, Cell::new(8, 8));
        assert!(config.grid().in_bounds(config.start_cell));
    }
}

//! Game state and core simulation types

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::food::place_food;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::config::GameConfig;

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in board coordinates (y grows down)
    pub fn delta(&self) -> Cell {
        match self {
            Direction::Up => Cell::new(0, -1),
            Direction::Down => Cell::new(0, 1),
            Direction::Left => Cell::new(-1, 0),
            Direction::Right => Cell::new(1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True if turning from self to other is a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Head left the board
    Wall,
    /// Head ran into the chain
    SelfCollision,
    /// Chain covers every cell, nowhere left for food
    BoardFull,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    GameOver(GameOverReason),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn is_game_over(&self) -> bool {
        !self.is_running()
    }
}

/// Something that happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Head landed on food at this cell
    AteFood { at: Cell },
    /// Run ended this tick
    GameOver(GameOverReason),
}

/// Complete simulation state. Each tick builds a new value from the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Cell,
    /// Heading applied by the most recent tick
    pub direction: Direction,
    pub score: u64,
    pub status: GameStatus,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh run: single-segment snake at the start cell, food placed off the snake
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let grid = config.grid();
        let snake = Snake::new(config.start_cell);
        // A one-cell snake on a one-cell board leaves no room for food
        let (food, status) = match place_food(rng, &grid, snake.segments()) {
            Some(food) => (food, GameStatus::Running),
            None => (config.start_cell, GameStatus::GameOver(GameOverReason::BoardFull)),
        };

        Self {
            grid,
            snake,
            food,
            direction: config.start_direction,
            score: 0,
            status,
            time_ticks: 0,
        }
    }
}

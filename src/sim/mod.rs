//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only, passed in by the caller
//! - Each tick returns a new state, the previous one is left untouched
//! - No rendering, timer or storage dependencies

pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::place_food;
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{Direction, GameOverReason, GameState, GameStatus, TickEvent};
pub use tick::{TickInput, TickOutcome, tick};

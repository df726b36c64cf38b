//! Snake - classic grid Snake for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake chain, food, tick)
//! - `session`: Owns the running game, its timer and the high score
//! - `input`: Keyboard mapping with reversal filtering
//! - `renderer`: Snapshot classification plus DOM/text renderers
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `platform`: Browser/native timer abstraction

pub mod config;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use highscores::HighScore;
pub use session::{GameSession, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Board is BOARD_SIZE x BOARD_SIZE cells
    pub const BOARD_SIZE: i32 = 20;
    /// Fixed simulation period
    pub const TICK_INTERVAL_MS: u32 = 200;
    /// Where the single-segment snake starts after every reset
    pub const START_CELL: (i32, i32) = (8, 8);
    /// Storage key for the best score
    pub const HIGH_SCORE_KEY: &str = "highScore";
}

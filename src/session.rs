//! Game session
//!
//! Owns everything that lives for the whole page: the current state, the
//! committed direction, the RNG, the tick timer and the high score. Timer
//! and store are injected so the same session runs in the browser, natively,
//! and under test.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::GameConfig;
use crate::highscores::HighScore;
use crate::input::{self, Key};
use crate::persistence::KeyValueStore;
use crate::platform::Timer;
use crate::sim::{
    Cell, Direction, GameOverReason, GameState, GameStatus, TickEvent, TickInput, tick,
};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Head first
    pub segments: Vec<Cell>,
    pub food: Cell,
    pub board_size: i32,
    pub score: u64,
    pub high_score: u64,
    pub game_over: bool,
    pub game_over_reason: Option<GameOverReason>,
}

pub struct GameSession<T, S> {
    config: GameConfig,
    state: GameState,
    /// Latest accepted direction, consumed by the next tick
    committed: Direction,
    rng: Pcg32,
    timer: T,
    high_score: HighScore<S>,
}

impl<T: Timer, S: KeyValueStore> GameSession<T, S> {
    /// Build a session and load the stored high score. The timer is not
    /// started until `reset`.
    pub fn new(config: GameConfig, timer: T, store: S, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&config, &mut rng);
        let high_score = HighScore::load(store, &config.high_score_key);

        log::info!(
            "Session created: {}x{} board, seed {}",
            config.board_size,
            config.board_size,
            seed
        );

        Self {
            committed: config.start_direction,
            config,
            state,
            rng,
            timer,
            high_score,
        }
    }

    /// Start a fresh run from any state and (re)start the tick timer
    pub fn reset(&mut self) {
        self.timer.stop();
        self.state = GameState::new(&self.config, &mut self.rng);
        self.committed = self.state.direction;

        if self.state.status.is_game_over() {
            log::warn!("Board too small to play, not starting timer");
            return;
        }

        if let Err(e) = self.timer.start(self.config.tick_interval_ms) {
            log::error!("Could not start tick timer: {:#}", e);
            return;
        }
        log::info!("Game started, food at ({}, {})", self.state.food.x, self.state.food.y);
    }

    /// Advance one tick using the committed direction
    pub fn on_tick(&mut self) -> Vec<TickEvent> {
        let input = TickInput {
            direction: self.committed,
        };
        let outcome = tick(&self.state, &input, &mut self.rng);
        self.state = outcome.state;
        // A reversal dropped by the engine must not linger as the committed heading
        self.committed = self.state.direction;

        for event in &outcome.events {
            match event {
                TickEvent::AteFood { .. } => {
                    let previous = self.high_score.best();
                    if self.high_score.record(self.state.score) > previous {
                        log::info!("New high score: {}", self.state.score);
                    }
                }
                TickEvent::GameOver(reason) => {
                    self.timer.stop();
                    log::info!(
                        "Game over ({:?}) with score {} after {} ticks",
                        reason,
                        self.state.score,
                        self.state.time_ticks
                    );
                }
            }
        }

        outcome.events
    }

    /// Handle a key press. Returns the newly committed direction, if any.
    pub fn on_key(&mut self, key: Key) -> Option<Direction> {
        if key == Key::Restart {
            self.request_restart();
            return None;
        }
        let accepted = input::on_key(key, self.committed, self.state.status)?;
        // Two quick turns must not add up to a reversal of the applied heading
        if accepted.is_opposite(self.state.direction) {
            log::debug!(
                "Rejected {:?} while still heading {:?}",
                accepted,
                self.state.direction
            );
            return None;
        }
        self.committed = accepted;
        Some(accepted)
    }

    /// Restart activation from the UI. Only acts once the run is over.
    pub fn request_restart(&mut self) -> bool {
        if self.state.status.is_running() {
            return false;
        }
        self.reset();
        true
    }

    /// Stop ticking for good (page teardown)
    pub fn shutdown(&mut self) {
        self.timer.stop();
        log::info!("Session stopped");
    }

    pub fn snapshot(&self) -> Snapshot {
        let game_over_reason = match self.state.status {
            GameStatus::GameOver(reason) => Some(reason),
            GameStatus::Running => None,
        };
        Snapshot {
            segments: self.state.snake.segments().to_vec(),
            food: self.state.food,
            board_size: self.state.grid.size,
            score: self.state.score,
            high_score: self.high_score.best(),
            game_over: game_over_reason.is_some(),
            game_over_reason,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn committed(&self) -> Direction {
        self.committed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    #[cfg(test)]
    fn set_state(&mut self, state: GameState) {
        self.committed = state.direction;
        self.state = state;
    }
}

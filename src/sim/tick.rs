//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step. The previous state is
//! never modified; a new state is returned alongside what happened.

use rand::Rng;

use super::food::place_food;
use super::state::{Direction, GameOverReason, GameState, GameStatus, TickEvent};

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    /// Committed heading at the moment the tick fires
    pub direction: Direction,
}

/// Result of advancing one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub state: GameState,
    pub events: Vec<TickEvent>,
}

impl TickOutcome {
    pub fn ate_food(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::AteFood { .. }))
    }

    pub fn game_over(&self) -> Option<GameOverReason> {
        self.events.iter().find_map(|e| match e {
            TickEvent::GameOver(reason) => Some(*reason),
            _ => None,
        })
    }
}

/// Advance the game state by one step
pub fn tick<R: Rng>(prev: &GameState, input: &TickInput, rng: &mut R) -> TickOutcome {
    let mut events = Vec::new();

    // Nothing moves once the run is over
    if prev.status.is_game_over() {
        return TickOutcome {
            state: prev.clone(),
            events,
        };
    }

    // A reversal would put the head straight into the neck; keep going straight
    let direction = if input.direction.is_opposite(prev.direction) {
        log::debug!(
            "Ignoring reversal {:?} while heading {:?}",
            input.direction,
            prev.direction
        );
        prev.direction
    } else {
        input.direction
    };

    let candidate = prev.snake.next_head(direction);

    let collision = if !prev.grid.in_bounds(candidate) {
        Some(GameOverReason::Wall)
    } else if prev.snake.collides(candidate) {
        Some(GameOverReason::SelfCollision)
    } else {
        None
    };

    if let Some(reason) = collision {
        let mut state = prev.clone();
        state.status = GameStatus::GameOver(reason);
        state.time_ticks += 1;
        events.push(TickEvent::GameOver(reason));
        return TickOutcome { state, events };
    }

    let grew = candidate == prev.food;
    let snake = prev.snake.advanced(direction, grew);

    let mut state = GameState {
        grid: prev.grid,
        snake,
        food: prev.food,
        direction,
        score: prev.score,
        status: GameStatus::Running,
        time_ticks: prev.time_ticks + 1,
    };

    if grew {
        state.score += 1;
        events.push(TickEvent::AteFood { at: candidate });

        match place_food(rng, &state.grid, state.snake.segments()) {
            Some(food) => state.food = food,
            None => {
                state.status = GameStatus::GameOver(GameOverReason::BoardFull);
                events.push(TickEvent::GameOver(GameOverReason::BoardFull));
            }
        }
    }

    TickOutcome { state, events }
}

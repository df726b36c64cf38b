//! Property tests for the simulation invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use snake_web::input::Key;
use snake_web::persistence::MemoryStore;
use snake_web::platform::ManualTimer;
use snake_web::sim::{Cell, Direction, GameState, TickInput, tick};
use snake_web::{GameConfig, GameSession};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn session(seed: u64, board_size: i32) -> GameSession<ManualTimer, MemoryStore> {
    let config = GameConfig::with_board_size(board_size);
    let mut session = GameSession::new(config, ManualTimer::new(), MemoryStore::new(), seed);
    session.reset();
    session
}

proptest! {
    #[test]
    fn chain_never_overlaps_while_running(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..300),
    ) {
        // Small board so the snake eats and turns into itself often
        let mut session = session(seed, 6);
        for dir in moves {
            session.on_key(Key::Arrow(dir));
            session.on_tick();
            let state = session.state();
            if state.status.is_running() {
                prop_assert!(state.snake.is_self_disjoint());
            }
            prop_assert!(!state.snake.contains(state.food) || state.status.is_game_over());
        }
    }

    #[test]
    fn food_is_never_placed_on_chain(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..300),
    ) {
        let mut session = session(seed, 5);
        for dir in moves {
            session.on_key(Key::Arrow(dir));
            let events = session.on_tick();
            let state = session.state();
            let ate = events.iter().any(|e| matches!(e, snake_web::sim::TickEvent::AteFood { .. }));
            if ate && state.status.is_running() {
                prop_assert!(!state.snake.contains(state.food));
                prop_assert!(state.grid.in_bounds(state.food));
            }
        }
    }

    #[test]
    fn straight_line_displacement(dir in direction(), n in 0usize..8) {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new(&GameConfig::default(), &mut rng);
        state.direction = dir;
        let start = state.snake.head();
        // Food beside the path, never on it
        let side = if dir.delta().x != 0 { Cell::new(0, 1) } else { Cell::new(1, 0) };
        state.food = start + side;

        for _ in 0..n {
            state = tick(&state, &TickInput { direction: dir }, &mut rng).state;
        }

        prop_assert!(state.status.is_running());
        prop_assert_eq!(state.snake.head(), start + dir.delta() * n as i32);
        prop_assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn eating_grows_by_exactly_one(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..200),
    ) {
        let mut session = session(seed, 8);
        for dir in moves {
            let before_len = session.state().snake.len();
            let before_score = session.state().score;
            let was_running = session.state().status.is_running();
            let food = session.state().food;

            session.on_key(Key::Arrow(dir));
            session.on_tick();
            let state = session.state();

            // Collisions leave the chain as it was
            if !was_running || (state.status.is_game_over() && state.snake.len() == before_len) {
                continue;
            }
            if state.snake.head() == food {
                prop_assert_eq!(state.snake.len(), before_len + 1);
                prop_assert_eq!(state.score, before_score + 1);
            } else {
                prop_assert_eq!(state.snake.len(), before_len);
                prop_assert_eq!(state.score, before_score);
            }
        }
    }

    #[test]
    fn reversal_is_rejected_while_running(seed in any::<u64>(), dir in direction()) {
        let mut session = session(seed, 20);
        prop_assume!(session.on_key(Key::Arrow(dir)).is_some());
        prop_assert_eq!(session.on_key(Key::Arrow(dir.opposite())), None);
        prop_assert_eq!(session.committed(), dir);
    }
}

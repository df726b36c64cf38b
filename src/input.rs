//! Keyboard input mapping

use crate::sim::{Direction, GameStatus};

/// A key the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    /// Enter/space: restart once the run is over
    Restart,
    Other,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Key {
        match key {
            "ArrowUp" => Key::Arrow(Direction::Up),
            "ArrowDown" => Key::Arrow(Direction::Down),
            "ArrowLeft" => Key::Arrow(Direction::Left),
            "ArrowRight" => Key::Arrow(Direction::Right),
            "Enter" | " " => Key::Restart,
            _ => Key::Other,
        }
    }
}

/// Direction a key press commits, if any.
///
/// Rejects the exact reverse of `committed`, anything while the game is
/// over, and non-arrow keys.
pub fn on_key(key: Key, committed: Direction, status: GameStatus) -> Option<Direction> {
    if status.is_game_over() {
        return None;
    }
    match key {
        Key::Arrow(direction) if direction.is_opposite(committed) => {
            log::debug!("Rejected reversal to {:?}", direction);
            None
        }
        Key::Arrow(direction) => Some(direction),
        Key::Restart | Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameOverReason;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(Key::from_dom("ArrowUp"), Key::Arrow(Direction::Up));
        assert_eq!(Key::from_dom("ArrowDown"), Key::Arrow(Direction::Down));
        assert_eq!(Key::from_dom("ArrowLeft"), Key::Arrow(Direction::Left));
        assert_eq!(Key::from_dom("ArrowRight"), Key::Arrow(Direction::Right));
        assert_eq!(Key::from_dom("Enter"), Key::Restart);
        assert_eq!(Key::from_dom("w"), Key::Other);
    }

    #[test]
    fn test_turns_accepted() {
        let running = GameStatus::Running;
        assert_eq!(
            on_key(Key::Arrow(Direction::Up), Direction::Right, running),
            Some(Direction::Up)
        );
        assert_eq!(
            on_key(Key::Arrow(Direction::Right), Direction::Right, running),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_reversal_rejected() {
        let running = GameStatus::Running;
        assert_eq!(on_key(Key::Arrow(Direction::Left), Direction::Right, running), None);
        assert_eq!(on_key(Key::Arrow(Direction::Down), Direction::Up, running), None);
    }

    #[test]
    fn test_ignored_when_game_over() {
        let over = GameStatus::GameOver(GameOverReason::Wall);
        assert_eq!(on_key(Key::Arrow(Direction::Up), Direction::Right, over), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(on_key(Key::Other, Direction::Right, GameStatus::Running), None);
        assert_eq!(on_key(Key::Restart, Direction::Right, GameStatus::Running), None);
    }
}

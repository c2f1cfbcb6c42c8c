use crate::debug_log;
use crate::storage::KeyValueStore;
use super::engine::GameEngine;
use super::types::{Coordinate, Direction};

/// Where the player is, from the point of view of whatever drives the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Start,
    Playing,
    Won,
    Lost,
}

/// Owned snapshot of everything a renderer reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub mode: GameMode,
    pub board_size: u32,
    /// Head first.
    pub body: Vec<Coordinate>,
    pub food: Coordinate,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Continue(Frame),
    Ended(Frame),
}

/// Engine plus the start/playing/won/lost mode that gates ticking and input.
pub struct GameSession<S: KeyValueStore> {
    engine: GameEngine<S>,
    mode: GameMode,
}

impl<S: KeyValueStore> GameSession<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine,
            mode: GameMode::Start,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// Leaves the start or end screen. Returns `false` if a game is already running.
    pub fn start(&mut self) -> bool {
        match self.mode {
            GameMode::Playing => false,
            GameMode::Start => {
                self.mode = GameMode::Playing;
                true
            }
            GameMode::Won | GameMode::Lost => {
                self.engine.reset_game();
                self.mode = GameMode::Playing;
                true
            }
        }
    }

    /// Applies a turn while playing, unless it would reverse straight into the neck.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        if direction.is_opposite(&self.engine.snake_direction()) {
            return false;
        }
        self.engine.set_snake_direction(direction);
        true
    }

    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.mode != GameMode::Playing {
            return None;
        }

        self.engine.advance_tick();

        if self.engine.is_game_won() {
            self.mode = GameMode::Won;
        } else if self.engine.is_game_over() {
            self.mode = GameMode::Lost;
        }

        let frame = self.frame();
        if self.mode == GameMode::Playing {
            Some(TickOutcome::Continue(frame))
        } else {
            debug_log!("Game finished as {:?} with score {}", self.mode, frame.score);
            Some(TickOutcome::Ended(frame))
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            mode: self.mode,
            board_size: self.engine.board_size(),
            body: self.engine.snake_body(),
            food: self.engine.food_location(),
            direction: self.engine.snake_direction(),
            score: self.engine.current_score(),
            high_score: self.engine.high_score(),
        }
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut GameEngine<S> {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::SnakeBody;
    use crate::storage::MemoryStore;

    fn create_session(board_size: u32) -> GameSession<MemoryStore> {
        let engine = GameEngine::new(board_size, Arc::new(MemoryStore::new()), SessionRng::new(5));
        GameSession::new(engine)
    }

    #[test]
    fn test_new_session_waits_on_start_screen() {
        let mut session = create_session(10);
        let before = session.engine().snake_body();

        assert_eq!(session.mode(), GameMode::Start);
        assert_eq!(session.tick(), None);
        assert_eq!(session.engine().snake_body(), before);
        assert!(!session.turn(Direction::Up));
    }

    #[test]
    fn test_start_only_from_non_playing_modes() {
        let mut session = create_session(10);
        assert!(session.start());
        assert_eq!(session.mode(), GameMode::Playing);
        assert!(!session.start());
    }

    #[test]
    fn test_turn_rejects_reversal() {
        let mut session = create_session(10);
        session.start();
        session.engine_mut().set_snake(SnakeBody::new(Coordinate::new(5, 5), Direction::Right));

        assert!(!session.turn(Direction::Left));
        assert_eq!(session.engine().snake_direction(), Direction::Right);
        assert!(session.turn(Direction::Up));
        assert!(session.turn(Direction::Left));
        assert_eq!(session.engine().snake_direction(), Direction::Left);
    }

    #[test]
    fn test_last_turn_before_tick_wins() {
        let mut session = create_session(10);
        session.start();
        session.engine_mut().set_snake(SnakeBody::new(Coordinate::new(5, 5), Direction::Right));
        session.engine_mut().set_food(Coordinate::new(0, 0));

        assert!(session.turn(Direction::Up));
        assert!(session.turn(Direction::Left));
        session.tick();

        assert_eq!(session.engine().snake_body(), vec![Coordinate::new(4, 5)]);
    }

    #[test]
    fn test_loss_then_restart_keeps_high_score() {
        let mut session = create_session(5);
        session.start();
        session.engine_mut().set_snake(SnakeBody::new(Coordinate::new(3, 2), Direction::Right));
        session.engine_mut().set_food(Coordinate::new(4, 2));

        let first = session.tick();
        assert!(matches!(first, Some(TickOutcome::Continue(ref frame)) if frame.score == 1));

        let second = session.tick();
        let Some(TickOutcome::Ended(frame)) = second else {
            panic!("expected the game to end, got {:?}", second);
        };
        assert_eq!(frame.mode, GameMode::Lost);
        assert_eq!(session.mode(), GameMode::Lost);
        assert_eq!(session.tick(), None);

        assert!(session.start());
        let frame = session.frame();
        assert_eq!(frame.mode, GameMode::Playing);
        assert_eq!(frame.score, 0);
        assert_eq!(frame.high_score, 1);
        assert_eq!(frame.body.len(), 1);
    }

    #[test]
    fn test_win_moves_to_won_mode() {
        let mut session = create_session(3);
        session.start();
        session.engine_mut().set_snake(SnakeBody::from_cells(
            &[
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(2, 1),
                Coordinate::new(1, 1),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
            ],
            Direction::Left,
        ));
        session.engine_mut().set_food(Coordinate::new(0, 0));

        let outcome = session.tick();

        assert!(matches!(
            outcome,
            Some(TickOutcome::Ended(ref frame)) if frame.mode == GameMode::Won
        ));
        assert_eq!(session.mode(), GameMode::Won);
    }
}

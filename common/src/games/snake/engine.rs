use std::sync::Arc;

use crate::debug_log;
use crate::games::SessionRng;
use crate::storage::KeyValueStore;
use super::food::Food;
use super::scoreboard::ScoreTracker;
use super::settings::MAX_BOARD_SIZE;
use super::snake::SnakeBody;
use super::types::{Coordinate, Direction};

/// Single-player snake on a square board.
///
/// Knows nothing about start screens or timers: it is ready to tick as soon as
/// it exists, and reports the end of a game through `is_game_over` / `is_game_won`.
pub struct GameEngine<S: KeyValueStore> {
    board_size: i32,
    snake: SnakeBody,
    food: Food,
    scoreboard: ScoreTracker<S>,
    store: Arc<S>,
    rng: SessionRng,
    game_over: bool,
    game_won: bool,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Sizes above `MAX_BOARD_SIZE` are clamped to it.
    pub fn new(board_size: u32, store: Arc<S>, mut rng: SessionRng) -> Self {
        let board_size = board_size.min(MAX_BOARD_SIZE) as i32;
        let snake = Self::spawn_snake(board_size, &mut rng);
        let scoreboard = ScoreTracker::new(store.clone());

        let mut engine = Self {
            board_size,
            snake,
            food: Food::default(),
            scoreboard,
            store,
            rng,
            game_over: false,
            game_won: false,
        };
        engine.respawn_food();
        engine
    }

    /// Starts on a random cell at least two cells away from every wall, facing a random way.
    fn spawn_snake(board_size: i32, rng: &mut SessionRng) -> SnakeBody {
        let start = Coordinate::new(
            rng.rand_int(2, board_size - 3),
            rng.rand_int(2, board_size - 3),
        );
        let direction = rng.random_direction();
        SnakeBody::new(start, direction)
    }

    /// Runs one simulation step. Does nothing once the game is over.
    pub fn advance_tick(&mut self) {
        if self.game_over {
            return;
        }

        self.snake.move_forward();

        if self.snake.is_self_collision() {
            debug_log!("Self collision at ({}, {})", self.snake.head().x, self.snake.head().y);
            self.game_over = true;
            return;
        }

        let head = self.snake.head();
        if !head.is_inside(self.board_size) {
            debug_log!("Wall collision at ({}, {})", head.x, head.y);
            self.game_over = true;
            return;
        }

        if head == self.food.location() {
            self.scoreboard.increment_score();
            self.snake.grow();

            if self.snake.len() == self.cell_count() {
                debug_log!("Board filled, score {}", self.scoreboard.score());
                self.game_won = true;
                self.game_over = true;
                return;
            }

            self.respawn_food();
        }
    }

    /// Moves the food to a uniformly random free cell.
    pub fn respawn_food(&mut self) {
        // Rejection sampling below never ends on a full board.
        if self.snake.occupied_cell_count() >= self.cell_count() {
            debug_log!("No free cell left for food");
            return;
        }

        let max = self.board_size - 1;
        let location = loop {
            let candidate = Coordinate::new(self.rng.rand_int(0, max), self.rng.rand_int(0, max));
            if !self.snake.occupies(candidate) {
                break candidate;
            }
        };

        self.food.set_location(location);
        debug_log!("Food spawned at ({}, {})", location.x, location.y);
    }

    /// Starts a fresh game in place. Only the stored high score carries over.
    pub fn reset_game(&mut self) {
        self.snake = Self::spawn_snake(self.board_size, &mut self.rng);
        self.food = Food::default();
        self.respawn_food();
        self.scoreboard = ScoreTracker::new(self.store.clone());
        self.game_over = false;
        self.game_won = false;
    }

    pub fn set_snake_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    pub fn snake_direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn snake_body(&self) -> Vec<Coordinate> {
        self.snake.body()
    }

    pub fn food_location(&self) -> Coordinate {
        self.food.location()
    }

    pub fn current_score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_game_won(&self) -> bool {
        self.game_won
    }

    pub fn board_size(&self) -> u32 {
        self.board_size as u32
    }

    fn cell_count(&self) -> usize {
        let side = self.board_size as usize;
        side * side
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: SnakeBody) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, location: Coordinate) {
        self.food.set_location(location);
    }

    #[cfg(test)]
    fn snake(&self) -> &SnakeBody {
        &self.snake
    }
}

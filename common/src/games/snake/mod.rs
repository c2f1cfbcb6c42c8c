mod engine;
mod food;
mod runner;
mod scoreboard;
mod session;
mod settings;
mod snake;
mod types;

pub use engine::GameEngine;
pub use food::Food;
pub use runner::{run_local_game, SessionCommand};
pub use scoreboard::{ScoreTracker, HIGH_SCORE_KEY};
pub use session::{Frame, GameMode, GameSession, TickOutcome};
pub use settings::{SnakeGameSettings, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use snake::SnakeBody;
pub use types::{Coordinate, Direction};

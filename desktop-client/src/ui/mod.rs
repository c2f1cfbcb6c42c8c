mod app;
mod board;
mod overlay;
mod scoreboard;

pub use app::SnakeApp;

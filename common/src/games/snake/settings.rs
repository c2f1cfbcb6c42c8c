use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const MIN_BOARD_SIZE: u32 = 5;
pub const MAX_BOARD_SIZE: u32 = 100;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct SnakeGameSettings {
    pub board_size: u32,
    pub tick_interval_ms: u32,
}

impl SnakeGameSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Validate for SnakeGameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        if self.tick_interval_ms < 20 || self.tick_interval_ms > 1000 {
            return Err(format!(
                "Tick interval must be between 20ms and 1000ms, got {}",
                self.tick_interval_ms
            ));
        }
        Ok(())
    }
}

impl Default for SnakeGameSettings {
    fn default() -> Self {
        Self {
            board_size: 40,
            tick_interval_ms: 66,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = SnakeGameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_interval(), Duration::from_millis(66));
    }

    #[test]
    fn test_board_size_limits() {
        let small = SnakeGameSettings { board_size: 4, ..SnakeGameSettings::default() };
        let large = SnakeGameSettings { board_size: 101, ..SnakeGameSettings::default() };
        let smallest = SnakeGameSettings { board_size: 5, ..SnakeGameSettings::default() };
        assert!(small.validate().is_err());
        assert!(large.validate().is_err());
        assert!(smallest.validate().is_ok());
    }

    #[test]
    fn test_tick_interval_limits() {
        let fast = SnakeGameSettings { tick_interval_ms: 10, ..SnakeGameSettings::default() };
        let slow = SnakeGameSettings { tick_interval_ms: 5000, ..SnakeGameSettings::default() };
        assert!(fast.validate().is_err());
        assert!(slow.validate().is_err());
    }
}

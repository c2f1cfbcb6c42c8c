use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::SnakeGameSettings;

use super::{ConfigManager, DisplayConfig, FileContentConfigProvider, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "snake_config.yaml";

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: SnakeGameSettings,
    pub display: DisplayConfig,
    pub high_score_file: String,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: SnakeGameSettings::default(),
            display: DisplayConfig::default(),
            high_score_file: "snake_high_score.yaml".to_string(),
        }
    }
}

mod display_config;
mod main_config;

pub(crate) use snake_common::config::{
    ConfigManager, FileContentConfigProvider, YamlConfigSerializer,
};

pub use display_config::DisplayConfig;
pub use main_config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};

use serde::{Deserialize, Serialize};
use snake_common::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DisplayConfig {
    pub cell_size: u32,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < 4 || self.cell_size > 64 {
            return Err(format!(
                "Cell size must be between 4 and 64 pixels, got {}",
                self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { cell_size: 20 }
    }
}

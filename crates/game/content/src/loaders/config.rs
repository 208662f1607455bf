//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.total_hearts() > GameConfig::MAX_HEART_SLOTS {
            return Err(anyhow::anyhow!(
                "config asks for {} heart slots but the display holds {}",
                config.total_hearts(),
                GameConfig::MAX_HEART_SLOTS
            ));
        }

        Ok(config)
    }
}

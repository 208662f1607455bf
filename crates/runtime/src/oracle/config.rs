//! Config oracle implementation for the runtime.

use game_core::{ConfigOracle, GameConfig};

/// Runtime implementation of ConfigOracle that wraps GameConfig.
#[derive(Debug)]
pub struct ConfigOracleImpl {
    config: GameConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// The wrapped configuration, for initial state construction.
    pub fn game_config(&self) -> &GameConfig {
        &self.config
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn max_life(&self) -> u32 {
        self.config.max_life
    }

    fn max_shield(&self) -> u32 {
        self.config.max_shield
    }

    fn coin_value(&self) -> u32 {
        self.config.coin_value
    }

    fn death_penalty(&self) -> u32 {
        self.config.death_penalty
    }

    fn walk_speed(&self) -> f32 {
        self.config.walk_speed
    }
}

//! Layout oracle implementation for the runtime.

use game_content::LevelSpec;
use game_core::{LayoutOracle, Vec2};

/// Runtime implementation of LayoutOracle backed by level content.
#[derive(Debug)]
pub struct LayoutOracleImpl {
    player_spawn: Vec2,
    respawn_point: Vec2,
}

impl LayoutOracleImpl {
    pub fn new(player_spawn: Vec2, respawn_point: Vec2) -> Self {
        Self {
            player_spawn,
            respawn_point,
        }
    }

    pub fn from_level(level: &LevelSpec) -> Self {
        Self::new(level.player_spawn, level.respawn_point)
    }
}

impl LayoutOracle for LayoutOracleImpl {
    fn player_spawn(&self) -> Vec2 {
        self.player_spawn
    }

    fn respawn_point(&self) -> Vec2 {
        self.respawn_point
    }
}

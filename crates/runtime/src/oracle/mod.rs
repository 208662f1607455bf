//! Runtime wrappers around static session content.
//!
//! These implementations expose the `game-core` oracle traits and bundle
//! them into an [`OracleManager`] so the session can build a
//! [`game_core::SessionEnv`] on demand. The data is immutable at runtime;
//! dynamic state lives in [`game_core::SessionState`].
mod config;
mod layout;
mod script;

use std::sync::Arc;

use game_content::LevelSpec;
use game_core::{Env, GameConfig, SessionEnv};

pub use config::ConfigOracleImpl;
pub use layout::LayoutOracleImpl;
pub use script::ScriptOracleImpl;

/// Manages all oracle implementations and provides unified access.
#[derive(Debug, Clone)]
pub struct OracleManager {
    pub(crate) config: Arc<ConfigOracleImpl>,
    pub(crate) layout: Arc<LayoutOracleImpl>,
    pub(crate) script: Arc<ScriptOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager.
    pub fn new(
        config: Arc<ConfigOracleImpl>,
        layout: Arc<LayoutOracleImpl>,
        script: Arc<ScriptOracleImpl>,
    ) -> Self {
        Self {
            config,
            layout,
            script,
        }
    }

    /// Builds the manager straight from loaded content.
    pub fn from_content(config: GameConfig, level: &LevelSpec) -> Self {
        Self::new(
            Arc::new(ConfigOracleImpl::new(config)),
            Arc::new(LayoutOracleImpl::from_level(level)),
            Arc::new(ScriptOracleImpl::from_guide(&level.guide)),
        )
    }

    /// Converts the oracle manager into a SessionEnv for game-core.
    pub fn as_env(&self) -> SessionEnv<'_> {
        Env::with_all(
            self.config.as_ref(),
            self.layout.as_ref(),
            self.script.as_ref(),
        )
        .into_session_env()
    }

    /// The wrapped game configuration.
    pub fn game_config(&self) -> &GameConfig {
        self.config.game_config()
    }
}

//! Authoritative session state representation.
//!
//! This module owns the data structures that describe the player, the guide
//! dialogue, and world-level switches. Host layers clone or query this state
//! but mutate it exclusively through the engine.
mod common;
mod dialogue;
mod hearts;
mod player;
mod world;

pub use common::{EntityId, ResourceMeter, Vec2};
pub use dialogue::{DialoguePhase, DialogueState};
pub use hearts::{HeartBar, HeartIcon, HeartSlot};
pub use player::PlayerState;
pub use world::WorldState;

use crate::config::GameConfig;

/// Errors surfaced while building the initial session state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("heart bar needs {requested} slots but capacity is {capacity}")]
    TooManyHearts { requested: usize, capacity: usize },
}

/// Canonical snapshot of the session state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    /// Health, shield, score, and motion of the player.
    pub player: PlayerState,
    /// The guide NPC's dialogue progress and displayed message.
    pub dialogue: DialogueState,
    /// World-level switches.
    pub world: WorldState,
}

impl SessionState {
    /// Creates the initial state: full-life player at `spawn`, fresh dialogue
    /// owned by `npc`, running clock.
    pub fn new(
        config: &GameConfig,
        spawn: Vec2,
        npc: EntityId,
    ) -> Result<Self, InitializationError> {
        Ok(Self {
            player: PlayerState::new(config, spawn)?,
            dialogue: DialogueState::new(npc),
            world: WorldState::default(),
        })
    }
}

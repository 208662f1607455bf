//! Level layout and guide dialogue definitions.

use game_core::Vec2;

/// The guide NPC's dialogue content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideSpec {
    /// Scripted lines shown in order on first contact.
    pub lines: Vec<String>,
    /// Fixed warning shown once the script has completed.
    pub warning: String,
}

impl Default for GuideSpec {
    fn default() -> Self {
        Self {
            lines: vec![
                "Be Careful As You Move Forward".to_owned(),
                "Watch out for dragons!".to_owned(),
            ],
            warning: "You Are Going The Wrong Way".to_owned(),
        }
    }
}

/// Static level layout consumed by the runtime oracles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    /// Position the player starts at.
    pub player_spawn: Vec2,
    /// Position the player is moved to after death.
    pub respawn_point: Vec2,
    /// The guide NPC's dialogue.
    pub guide: GuideSpec,
}

impl Default for LevelSpec {
    fn default() -> Self {
        Self {
            player_spawn: Vec2::ORIGIN,
            respawn_point: Vec2::ORIGIN,
            guide: GuideSpec::default(),
        }
    }
}

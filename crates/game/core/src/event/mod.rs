//! Event domain - transition-based contact handling.
//!
//! Physics callbacks arrive as [`Event`] values and are reduced over
//! [`SessionState`] by per-operation transition structs. Each transition runs
//! the three-phase pipeline (`pre_validate` → `apply` → `post_validate`);
//! post-validation holds the heart-bar/meter invariants after every mutation.
//!
//! # Module Structure
//!
//! - `error`: transition error types (TrackerError, DialogueError)
//! - `pickup`: coin, health, and shield pickups
//! - `damage`: enemy contact damage (shield absorbs before life)
//! - `respawn`: death handling and the score delta it applies
//! - `finish`: the level-end trigger
//! - `dialogue`: guide NPC contact, confirm input, and zone exit

pub mod damage;
pub mod dialogue;
pub mod error;
pub mod finish;
pub mod pickup;
pub mod respawn;

pub use damage::{DamageOutcome, DamageTransition};
pub use dialogue::{
    DialogueConfirmTransition, DialogueEnterTransition, DialogueEntered, DialogueExitTransition,
};
pub use error::{DialogueError, TrackerError};
pub use finish::FinishTransition;
pub use pickup::{CollectCoinTransition, CollectHealthTransition, CollectShieldTransition};
pub use respawn::RespawnTransition;

use crate::env::SessionEnv;
use crate::state::{EntityId, SessionState};
use crate::tag::ContactTag;

/// Externally-delivered occurrence the engine reduces over session state.
///
/// `listener` is the entity whose collider received the callback; `other` is
/// the entity on the far side of the contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A non-solid trigger zone owned by `listener` started overlapping `other`.
    TriggerEntered {
        listener: EntityId,
        other: EntityId,
        tag: ContactTag,
    },

    /// The overlap with `listener`'s trigger zone ended.
    TriggerExited {
        listener: EntityId,
        other: EntityId,
        tag: ContactTag,
    },

    /// A solid collision against `listener` began.
    CollisionEntered {
        listener: EntityId,
        other: EntityId,
        tag: ContactTag,
    },

    /// Discrete confirm input (mouse click / accept button).
    ConfirmPressed,
}

/// Defines how a concrete event variant mutates session state.
pub trait EventTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &SessionState,
        _env: &SessionEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the event by mutating the session state directly.
    fn apply(
        &self,
        state: &mut SessionState,
        env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(
        &self,
        _state: &SessionState,
        _env: &SessionEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Duties the host must carry out after an event resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Remove a consumed pickup from the scene.
    Despawn(EntityId),
    /// Stop the global simulation clock.
    PauseClock,
}

/// High-level result reported for each executed event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventResult {
    /// The player died and was respawned; `penalty` points were added.
    Respawned { penalty: u32 },
    /// A coin was collected and `value` points awarded.
    CoinCollected { value: u32 },
    /// The finish trigger fired.
    LevelFinished,
    /// A health pickup was consumed; `gained` is false at full life.
    HealthCollected { gained: bool },
    /// A shield pickup was consumed; `gained` is false at the shield cap.
    ShieldCollected { gained: bool },
    /// Enemy contact was resolved.
    DamageTaken {
        absorbed_by_shield: bool,
        respawned: bool,
    },
    /// The guide script started and froze the player.
    DialogueStarted,
    /// The confirm input advanced the script.
    DialogueAdvanced { finished: bool },
    /// A post-script contact showed the fixed warning.
    DialogueWarned,
    /// Leaving the guide's zone cleared the displayed message.
    MessageCleared,
    /// The event matched no handler.
    Ignored,
}

/// Checks the tracker invariants shared by every post-validation.
pub(crate) fn validate_tracker(state: &SessionState) -> Result<(), TrackerError> {
    let player = &state.player;

    if player.life.current > player.life.maximum {
        return Err(TrackerError::LifeOverflow {
            current: player.life.current,
            maximum: player.life.maximum,
        });
    }

    if player.shield.current > player.shield.maximum {
        return Err(TrackerError::ShieldOverflow {
            current: player.shield.current,
            maximum: player.shield.maximum,
        });
    }

    if !player.hearts.matches(player.life.current, player.shield.current) {
        return Err(TrackerError::HeartBarMismatch {
            life: player.life.current,
            shield: player.shield.current,
        });
    }

    Ok(())
}

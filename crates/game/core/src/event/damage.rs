//! Enemy contact damage.

use crate::env::SessionEnv;
use crate::state::SessionState;

use super::{EventTransition, RespawnTransition, TrackerError, validate_tracker};

/// How a point of damage was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    /// A shield heart absorbed the hit; life is untouched.
    pub absorbed_by_shield: bool,
    /// Life reached zero and the respawn ran.
    pub respawned: bool,
}

/// One point of incoming damage: shield hearts absorb before life hearts.
///
/// Life reaching exactly zero chains straight into [`RespawnTransition`], so
/// a zero-life state never persists past the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageTransition;

impl EventTransition for DamageTransition {
    type Error = TrackerError;
    type Result = DamageOutcome;

    fn pre_validate(&self, state: &SessionState, _env: &SessionEnv<'_>) -> Result<(), Self::Error> {
        if state.player.shield.is_empty() && state.player.life.is_empty() {
            return Err(TrackerError::LifeAlreadyEmpty);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut SessionState,
        env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        if state.player.absorb_with_shield() {
            return Ok(DamageOutcome {
                absorbed_by_shield: true,
                respawned: false,
            });
        }

        state.player.lose_life();
        if state.player.life.is_empty() {
            RespawnTransition.apply(state, env)?;
            return Ok(DamageOutcome {
                absorbed_by_shield: false,
                respawned: true,
            });
        }

        Ok(DamageOutcome {
            absorbed_by_shield: false,
            respawned: false,
        })
    }

    fn post_validate(&self, state: &SessionState, _env: &SessionEnv<'_>) -> Result<(), Self::Error> {
        if state.player.life.is_empty() {
            return Err(TrackerError::LifeAlreadyEmpty);
        }
        validate_tracker(state)
    }
}

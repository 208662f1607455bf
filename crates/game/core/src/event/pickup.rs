//! Pickup transitions: coins, health hearts, shield hearts.
//!
//! Every pickup is consumed on contact; health and shield only change the
//! meters when below their caps. The caller despawns the `item` entity.

use crate::env::SessionEnv;
use crate::state::{EntityId, SessionState};

use super::{EventTransition, TrackerError, validate_tracker};

/// Coin pickup: award the configured value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectCoinTransition {
    pub item: EntityId,
}

impl EventTransition for CollectCoinTransition {
    type Error = TrackerError;
    type Result = u32;

    fn apply(
        &self,
        state: &mut SessionState,
        env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let value = env.config()?.coin_value();
        state.player.add_points(value);
        Ok(value)
    }

    fn post_validate(&self, state: &SessionState, _env: &SessionEnv<'_>) -> Result<(), Self::Error> {
        validate_tracker(state)
    }
}

/// Health pickup: restore one life heart when a container is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectHealthTransition {
    pub item: EntityId,
}

impl EventTransition for CollectHealthTransition {
    type Error = TrackerError;
    type Result = bool;

    fn apply(
        &self,
        state: &mut SessionState,
        _env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        Ok(state.player.gain_life())
    }

    fn post_validate(&self, state: &SessionState, _env: &SessionEnv<'_>) -> Result<(), Self::Error> {
        validate_tracker(state)
    }
}

/// Shield pickup: reveal one shield heart when below the cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectShieldTransition {
    pub item: EntityId,
}

impl EventTransition for CollectShieldTransition {
    type Error = TrackerError;
    type Result = bool;

    fn apply(
        &self,
        state: &mut SessionState,
        _env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        Ok(state.player.gain_shield())
    }

    fn post_validate(&self, state: &SessionState, _env: &SessionEnv<'_>) -> Result<(), Self::Error> {
        validate_tracker(state)
    }
}

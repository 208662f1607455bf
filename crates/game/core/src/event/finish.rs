//! Level-end trigger.

use crate::env::SessionEnv;
use crate::state::SessionState;

use super::{EventTransition, TrackerError};

/// Finish trigger: pause the world clock. Re-entering is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinishTransition;

impl EventTransition for FinishTransition {
    type Error = TrackerError;
    type Result = ();

    fn apply(
        &self,
        state: &mut SessionState,
        _env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        state.world.clock_paused = true;
        Ok(())
    }
}

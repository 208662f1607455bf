//! Guide NPC dialogue transitions.
//!
//! The coroutine-style "wait for a click" of a scripted NPC becomes an
//! explicit suspended phase: entering the zone freezes the player and shows
//! the first line, each confirm input advances the script, and the final
//! line releases the player and marks the dialogue as triggered for good.

use crate::env::SessionEnv;
use crate::state::{DialoguePhase, SessionState};

use super::{DialogueError, EventTransition};

/// What a zone-enter contact resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogueEntered {
    /// First contact: the script started and the player froze.
    Started,
    /// The script is mid-sequence; the contact changes nothing.
    AlreadyRunning,
    /// Post-script contact: the fixed warning is displayed.
    Warned,
}

/// Player contact with the guide's trigger zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogueEnterTransition;

impl EventTransition for DialogueEnterTransition {
    type Error = DialogueError;
    type Result = DialogueEntered;

    fn apply(
        &self,
        state: &mut SessionState,
        env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        match state.dialogue.phase {
            DialoguePhase::Fresh => {
                let script = env.script()?;
                let first = script
                    .lines()
                    .first()
                    .ok_or(DialogueError::EmptyScript)?
                    .clone();

                state.dialogue.message = Some(first);
                state.player.move_speed = 0.0;
                state.dialogue.phase = DialoguePhase::AwaitingConfirmation { next: 1 };
                Ok(DialogueEntered::Started)
            }
            DialoguePhase::AwaitingConfirmation { .. } => Ok(DialogueEntered::AlreadyRunning),
            DialoguePhase::Triggered => {
                state.dialogue.message = Some(env.script()?.warning().to_owned());
                Ok(DialogueEntered::Warned)
            }
        }
    }
}

/// Confirm input advancing an awaiting dialogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogueConfirmTransition;

impl EventTransition for DialogueConfirmTransition {
    type Error = DialogueError;
    type Result = bool;

    fn pre_validate(&self, state: &SessionState, _env: &SessionEnv<'_>) -> Result<(), Self::Error> {
        if !state.dialogue.is_awaiting() {
            return Err(DialogueError::NotAwaiting);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut SessionState,
        env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let DialoguePhase::AwaitingConfirmation { mut next } = state.dialogue.phase else {
            return Err(DialogueError::NotAwaiting);
        };

        let script = env.script()?;
        if let Some(line) = script.lines().get(next) {
            state.dialogue.message = Some(line.clone());
            next += 1;
        }

        if next >= script.lines().len() {
            // Script exhausted: release the player and latch the dialogue.
            state.player.move_speed = env.config()?.walk_speed();
            state.dialogue.phase = DialoguePhase::Triggered;
            Ok(true)
        } else {
            state.dialogue.phase = DialoguePhase::AwaitingConfirmation { next };
            Ok(false)
        }
    }
}

/// Player left the guide's trigger zone. The message always clears; the
/// phase and a mid-script freeze are left as they are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogueExitTransition;

impl EventTransition for DialogueExitTransition {
    type Error = DialogueError;
    type Result = ();

    fn apply(
        &self,
        state: &mut SessionState,
        _env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        state.dialogue.message = None;
        Ok(())
    }
}

//! Event transition dispatch and execution logic.

use crate::env::SessionEnv;
use crate::event::{
    CollectCoinTransition, CollectHealthTransition, CollectShieldTransition, DamageTransition,
    DialogueConfirmTransition, DialogueEnterTransition, DialogueEntered, DialogueExitTransition,
    Effect, Event, EventResult, EventTransition, FinishTransition, RespawnTransition,
};
use crate::state::SessionState;
use crate::tag::ContactTag;

use super::Outcome;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the session state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut SessionState,
    env: &SessionEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: EventTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes an event to its transition and wraps the result in an [`Outcome`].
///
/// This is the internal implementation used by `Engine::execute()`. Events
/// that match no handler resolve to [`EventResult::Ignored`], mirroring the
/// silent fall-through of an unrecognized contact tag.
pub(super) fn execute_transition(
    event: &Event,
    state: &mut SessionState,
    env: &SessionEnv<'_>,
) -> Result<Outcome, ExecuteError> {
    match *event {
        Event::TriggerEntered {
            listener,
            other,
            tag,
        } if listener.is_player() => match tag {
            ContactTag::Death => {
                let penalty = drive_transition(&RespawnTransition, state, env)
                    .map_err(ExecuteError::Respawn)?;
                Ok(Outcome::new(EventResult::Respawned { penalty }))
            }
            ContactTag::Coin => {
                let transition = CollectCoinTransition { item: other };
                let value =
                    drive_transition(&transition, state, env).map_err(ExecuteError::CollectCoin)?;
                Ok(Outcome::new(EventResult::CoinCollected { value })
                    .with_effect(Effect::Despawn(transition.item)))
            }
            ContactTag::Finish => {
                drive_transition(&FinishTransition, state, env).map_err(ExecuteError::Finish)?;
                Ok(Outcome::new(EventResult::LevelFinished).with_effect(Effect::PauseClock))
            }
            ContactTag::Health => {
                let transition = CollectHealthTransition { item: other };
                let gained = drive_transition(&transition, state, env)
                    .map_err(ExecuteError::CollectHealth)?;
                Ok(Outcome::new(EventResult::HealthCollected { gained })
                    .with_effect(Effect::Despawn(transition.item)))
            }
            ContactTag::Shield => {
                let transition = CollectShieldTransition { item: other };
                let gained = drive_transition(&transition, state, env)
                    .map_err(ExecuteError::CollectShield)?;
                Ok(Outcome::new(EventResult::ShieldCollected { gained })
                    .with_effect(Effect::Despawn(transition.item)))
            }
            _ => Ok(Outcome::ignored()),
        },
        Event::TriggerEntered {
            listener,
            tag: ContactTag::Player,
            ..
        } if listener == state.dialogue.npc => {
            let entered = drive_transition(&DialogueEnterTransition, state, env)
                .map_err(ExecuteError::Dialogue)?;
            Ok(match entered {
                DialogueEntered::Started => Outcome::new(EventResult::DialogueStarted),
                DialogueEntered::Warned => Outcome::new(EventResult::DialogueWarned),
                DialogueEntered::AlreadyRunning => Outcome::ignored(),
            })
        }
        Event::TriggerExited {
            listener,
            tag: ContactTag::Player,
            ..
        } if listener == state.dialogue.npc => {
            drive_transition(&DialogueExitTransition, state, env)
                .map_err(ExecuteError::Dialogue)?;
            Ok(Outcome::new(EventResult::MessageCleared))
        }
        Event::CollisionEntered {
            listener,
            tag: ContactTag::Enemy,
            ..
        } if listener.is_player() => {
            let outcome = drive_transition(&DamageTransition, state, env)
                .map_err(ExecuteError::Damage)?;
            Ok(Outcome::new(EventResult::DamageTaken {
                absorbed_by_shield: outcome.absorbed_by_shield,
                respawned: outcome.respawned,
            }))
        }
        Event::ConfirmPressed if state.dialogue.is_awaiting() => {
            let finished = drive_transition(&DialogueConfirmTransition, state, env)
                .map_err(ExecuteError::Dialogue)?;
            Ok(Outcome::new(EventResult::DialogueAdvanced { finished }))
        }
        _ => Ok(Outcome::ignored()),
    }
}

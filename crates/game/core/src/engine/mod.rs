//! Event execution pipeline.
//!
//! The [`Engine`] is the authoritative reducer for [`SessionState`]. It
//! routes externally-delivered events through per-operation transitions and
//! surfaces rich error information for the host. All state mutation flows
//! through the same execute() pipeline.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::env::SessionEnv;
use crate::event::{Effect, Event, EventResult};
use crate::state::SessionState;

/// Complete outcome of event execution.
///
/// Contains the high-level result plus the effects the host must perform
/// (despawning consumed pickups, pausing the clock).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub result: EventResult,
    pub effects: Vec<Effect>,
}

impl Outcome {
    pub fn new(result: EventResult) -> Self {
        Self {
            result,
            effects: Vec::new(),
        }
    }

    pub fn ignored() -> Self {
        Self::new(EventResult::Ignored)
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Engine that reduces events over the session state.
///
/// Every handler executes atomically within one dispatch: the three-phase
/// transition pipeline (pre_validate → apply → post_validate) either
/// completes or reports which phase rejected the event.
pub struct Engine<'a> {
    state: &'a mut SessionState,
}

impl<'a> Engine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut SessionState) -> Self {
        Self { state }
    }

    /// Executes an event by routing it through the matching transition.
    ///
    /// Events that match no handler (unknown tag, confirm with no awaiting
    /// dialogue) resolve to [`EventResult::Ignored`] rather than an error.
    pub fn execute(
        &mut self,
        env: SessionEnv<'_>,
        event: &Event,
    ) -> Result<Outcome, ExecuteError> {
        transition::execute_transition(event, self.state, &env)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::env::{ConfigOracle, Env, LayoutOracle, ScriptOracle};
    use crate::state::{EntityId, Vec2};
    use crate::tag::ContactTag;

    use super::*;

    struct TestConfig;

    impl ConfigOracle for TestConfig {
        fn max_life(&self) -> u32 {
            3
        }
        fn max_shield(&self) -> u32 {
            6
        }
        fn coin_value(&self) -> u32 {
            5
        }
        fn death_penalty(&self) -> u32 {
            20
        }
        fn walk_speed(&self) -> f32 {
            5.0
        }
    }

    struct TestLayout;

    impl LayoutOracle for TestLayout {
        fn player_spawn(&self) -> Vec2 {
            Vec2::ORIGIN
        }
        fn respawn_point(&self) -> Vec2 {
            Vec2::new(2.0, 0.0)
        }
    }

    struct TestScript {
        lines: Vec<String>,
        warning: String,
    }

    impl ScriptOracle for TestScript {
        fn lines(&self) -> &[String] {
            &self.lines
        }
        fn warning(&self) -> &str {
            &self.warning
        }
    }

    const NPC: EntityId = EntityId(9);

    fn fixtures() -> (TestConfig, TestLayout, TestScript) {
        (
            TestConfig,
            TestLayout,
            TestScript {
                lines: vec!["one".to_owned(), "two".to_owned()],
                warning: "warned".to_owned(),
            },
        )
    }

    fn state() -> SessionState {
        SessionState::new(&GameConfig::default(), Vec2::ORIGIN, NPC).unwrap()
    }

    #[test]
    fn coin_trigger_awards_points_and_despawns_the_coin() {
        let (config, layout, script) = fixtures();
        let env = Env::with_all(&config, &layout, &script);
        let mut state = state();
        let coin = EntityId(12);

        let outcome = Engine::new(&mut state)
            .execute(env.as_session_env(), &Event::TriggerEntered {
                listener: EntityId::PLAYER,
                other: coin,
                tag: ContactTag::Coin,
            })
            .unwrap();

        assert_eq!(outcome.result, EventResult::CoinCollected { value: 5 });
        assert_eq!(outcome.effects, vec![Effect::Despawn(coin)]);
        assert_eq!(state.player.score, 5);
    }

    #[test]
    fn death_trigger_respawns_and_adds_the_penalty() {
        let (config, layout, script) = fixtures();
        let env = Env::with_all(&config, &layout, &script);
        let mut state = state();
        state.player.lose_life();

        let outcome = Engine::new(&mut state)
            .execute(env.as_session_env(), &Event::TriggerEntered {
                listener: EntityId::PLAYER,
                other: EntityId(30),
                tag: ContactTag::Death,
            })
            .unwrap();

        assert_eq!(outcome.result, EventResult::Respawned { penalty: 20 });
        assert!(state.player.life.is_full());
        assert_eq!(state.player.position, Vec2::new(2.0, 0.0));
        assert_eq!(state.player.score, 20);
    }

    #[test]
    fn finish_trigger_pauses_the_clock() {
        let (config, layout, script) = fixtures();
        let env = Env::with_all(&config, &layout, &script);
        let mut state = state();

        let outcome = Engine::new(&mut state)
            .execute(env.as_session_env(), &Event::TriggerEntered {
                listener: EntityId::PLAYER,
                other: EntityId(31),
                tag: ContactTag::Finish,
            })
            .unwrap();

        assert_eq!(outcome.result, EventResult::LevelFinished);
        assert_eq!(outcome.effects, vec![Effect::PauseClock]);
        assert!(state.world.clock_paused);
    }

    #[test]
    fn unknown_tags_fall_through_silently() {
        let (config, layout, script) = fixtures();
        let env = Env::with_all(&config, &layout, &script);
        let mut state = state();

        let outcome = Engine::new(&mut state)
            .execute(env.as_session_env(), &Event::TriggerEntered {
                listener: EntityId::PLAYER,
                other: EntityId(32),
                tag: ContactTag::Respawn,
            })
            .unwrap();

        assert_eq!(outcome.result, EventResult::Ignored);
        assert!(outcome.effects.is_empty());
    }

    #[test]
    fn confirm_without_an_awaiting_dialogue_is_ignored() {
        let (config, layout, script) = fixtures();
        let env = Env::with_all(&config, &layout, &script);
        let mut state = state();

        let outcome = Engine::new(&mut state)
            .execute(env.as_session_env(), &Event::ConfirmPressed)
            .unwrap();

        assert_eq!(outcome.result, EventResult::Ignored);
    }

    #[test]
    fn npc_zone_contact_drives_the_dialogue() {
        let (config, layout, script) = fixtures();
        let env = Env::with_all(&config, &layout, &script);
        let mut state = state();

        let enter = Event::TriggerEntered {
            listener: NPC,
            other: EntityId::PLAYER,
            tag: ContactTag::Player,
        };

        let outcome = Engine::new(&mut state).execute(env.as_session_env(), &enter).unwrap();
        assert_eq!(outcome.result, EventResult::DialogueStarted);

        let outcome = Engine::new(&mut state)
            .execute(env.as_session_env(), &Event::ConfirmPressed)
            .unwrap();
        assert_eq!(
            outcome.result,
            EventResult::DialogueAdvanced { finished: true }
        );

        let outcome = Engine::new(&mut state).execute(env.as_session_env(), &enter).unwrap();
        assert_eq!(outcome.result, EventResult::DialogueWarned);

        let outcome = Engine::new(&mut state)
            .execute(env.as_session_env(), &Event::TriggerExited {
                listener: NPC,
                other: EntityId::PLAYER,
                tag: ContactTag::Player,
            })
            .unwrap();
        assert_eq!(outcome.result, EventResult::MessageCleared);
        assert_eq!(state.dialogue.message, None);
    }
}

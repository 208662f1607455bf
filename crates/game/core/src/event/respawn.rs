//! Death handling.

use crate::env::SessionEnv;
use crate::state::{SessionState, Vec2};

use super::{EventTransition, TrackerError, validate_tracker};

/// Respawn: refill every life heart, reset motion, move the player to the
/// respawn point, then apply the death score delta.
///
/// Shield hearts are never replenished here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RespawnTransition;

impl EventTransition for RespawnTransition {
    type Error = TrackerError;
    type Result = u32;

    fn apply(
        &self,
        state: &mut SessionState,
        env: &SessionEnv<'_>,
    ) -> Result<Self::Result, Self::Error> {
        let penalty = env.config()?.death_penalty();
        let respawn_point = env.layout()?.respawn_point();

        state.player.refill_life();
        state.player.velocity = Vec2::ORIGIN;
        state.player.position = respawn_point;
        state.player.add_points(penalty);

        Ok(penalty)
    }

    fn post_validate(&self, state: &SessionState, _env: &SessionEnv<'_>) -> Result<(), Self::Error> {
        if !state.player.life.is_full() {
            return Err(TrackerError::HeartBarMismatch {
                life: state.player.life.current,
                shield: state.player.shield.current,
            });
        }
        validate_tracker(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::env::{ConfigOracle, Env, LayoutOracle, ScriptOracle};
    use crate::state::EntityId;

    use super::*;

    struct FixedConfig(GameConfig);

    impl ConfigOracle for FixedConfig {
        fn max_life(&self) -> u32 {
            self.0.max_life
        }
        fn max_shield(&self) -> u32 {
            self.0.max_shield
        }
        fn coin_value(&self) -> u32 {
            self.0.coin_value
        }
        fn death_penalty(&self) -> u32 {
            self.0.death_penalty
        }
        fn walk_speed(&self) -> f32 {
            self.0.walk_speed
        }
    }

    struct FixedLayout;

    impl LayoutOracle for FixedLayout {
        fn player_spawn(&self) -> Vec2 {
            Vec2::ORIGIN
        }
        fn respawn_point(&self) -> Vec2 {
            Vec2::new(4.0, 1.0)
        }
    }

    struct NoScript;

    impl ScriptOracle for NoScript {
        fn lines(&self) -> &[String] {
            &[]
        }
        fn warning(&self) -> &str {
            ""
        }
    }

    #[test]
    fn respawn_refills_life_and_moves_the_player() {
        let config = FixedConfig(GameConfig::default());
        let layout = FixedLayout;
        let script = NoScript;
        let env = Env::with_all(&config, &layout, &script).into_session_env();

        let mut state =
            SessionState::new(&GameConfig::default(), Vec2::ORIGIN, EntityId(7)).unwrap();
        state.player.lose_life();
        state.player.lose_life();
        state.player.velocity = Vec2::new(3.0, -2.0);
        state.player.gain_shield();

        let penalty = RespawnTransition.apply(&mut state, &env).unwrap();
        RespawnTransition.post_validate(&state, &env).unwrap();

        assert_eq!(penalty, 20);
        assert_eq!(state.player.score, 20);
        assert!(state.player.life.is_full());
        assert_eq!(state.player.shield.current, 1);
        assert_eq!(state.player.velocity, Vec2::ORIGIN);
        assert_eq!(state.player.position, Vec2::new(4.0, 1.0));
    }
}

//! Error types for the event execution pipeline.

use crate::event::{
    CollectCoinTransition, CollectHealthTransition, CollectShieldTransition, DamageTransition,
    DialogueEnterTransition, EventTransition, FinishTransition, RespawnTransition,
};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an event through the engine.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ExecuteError {
    #[error("respawn failed: {0}")]
    Respawn(TransitionPhaseError<<RespawnTransition as EventTransition>::Error>),

    #[error("coin pickup failed: {0}")]
    CollectCoin(TransitionPhaseError<<CollectCoinTransition as EventTransition>::Error>),

    #[error("health pickup failed: {0}")]
    CollectHealth(TransitionPhaseError<<CollectHealthTransition as EventTransition>::Error>),

    #[error("shield pickup failed: {0}")]
    CollectShield(TransitionPhaseError<<CollectShieldTransition as EventTransition>::Error>),

    #[error("finish trigger failed: {0}")]
    Finish(TransitionPhaseError<<FinishTransition as EventTransition>::Error>),

    #[error("damage failed: {0}")]
    Damage(TransitionPhaseError<<DamageTransition as EventTransition>::Error>),

    #[error("dialogue failed: {0}")]
    Dialogue(TransitionPhaseError<<DialogueEnterTransition as EventTransition>::Error>),
}

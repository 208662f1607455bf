//! Deterministic session logic for the platformer, shared across hosts.
//!
//! `game-core` defines the canonical rules (events, engine, session state) and
//! exposes pure APIs with no engine or I/O dependency. All state mutation
//! flows through [`engine::Engine`], and supporting crates depend on the
//! types re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod event;
pub mod state;
pub mod tag;

pub use config::GameConfig;
pub use engine::{Engine, ExecuteError, Outcome, TransitionPhase, TransitionPhaseError};
pub use env::{ConfigOracle, Env, LayoutOracle, OracleError, ScriptOracle, SessionEnv};
pub use event::{
    CollectCoinTransition, CollectHealthTransition, CollectShieldTransition, DamageOutcome,
    DamageTransition, DialogueConfirmTransition, DialogueEnterTransition, DialogueError,
    DialogueExitTransition, Effect, Event, EventResult, EventTransition, FinishTransition,
    RespawnTransition, TrackerError,
};
pub use state::{
    DialoguePhase, DialogueState, EntityId, HeartBar, HeartIcon, HeartSlot, InitializationError,
    PlayerState, ResourceMeter, SessionState, Vec2, WorldState,
};
pub use tag::ContactTag;

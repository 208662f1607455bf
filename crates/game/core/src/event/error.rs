//! Error types for event transitions.

use crate::env::OracleError;

/// Errors surfaced by the health/score tracker transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("life count {current} exceeds maximum {maximum}")]
    LifeOverflow { current: u32, maximum: u32 },

    #[error("shield count {current} exceeds maximum {maximum}")]
    ShieldOverflow { current: u32, maximum: u32 },

    #[error("heart bar out of sync with life {life} / shield {shield}")]
    HeartBarMismatch { life: u32, shield: u32 },

    #[error("damage received while life was already empty")]
    LifeAlreadyEmpty,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Errors surfaced by the dialogue transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    #[error("dialogue script has no lines")]
    EmptyScript,

    #[error("confirm received while no dialogue was awaiting input")]
    NotAwaiting,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

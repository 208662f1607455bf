//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from session construction and engine execution so hosts
//! can bubble them up with consistent context.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires oracles to be configured before building")]
    MissingOracles,

    #[error("session requires a scene registry before building")]
    MissingRegistry,

    #[error("scene binding '{name}' not registered")]
    MissingBinding { name: String },

    #[error("failed to initialize session state")]
    InitialState(#[source] game_core::InitializationError),

    #[error(transparent)]
    Execute(#[from] game_core::ExecuteError),
}

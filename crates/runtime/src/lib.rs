//! Host-side orchestration for the session logic.
//!
//! This crate wires together oracle access, the scene/UI registry, and the
//! event bus into a cohesive runtime API. Hosts embed [`Session`] and feed it
//! the physics callbacks and input events their engine dispatches; the
//! session runs the core engine, mirrors the resulting state into a
//! [`UiModel`], and publishes typed events for subscribers.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] provides data adapters over static content
//! - [`registry`] resolves named scene bindings at initialization
//! - [`ui`] mirrors label text and the heart row for the host to render
pub mod error;
pub mod events;
pub mod oracle;
pub mod registry;
pub mod session;
pub mod ui;

pub use error::{Result, RuntimeError};
pub use events::{BusEvent, EventBus, SessionEvent, Topic, UiEvent};
pub use oracle::{ConfigOracleImpl, LayoutOracleImpl, OracleManager, ScriptOracleImpl};
pub use registry::{MESSAGE_LABEL, SCORE_LABEL, SceneRegistry, WidgetId};
pub use session::{Session, SessionBuilder, SessionConfig};
pub use ui::UiModel;

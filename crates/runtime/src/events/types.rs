//! Typed events published by the session.

use game_core::{EntityId, EventResult};

use crate::registry::WidgetId;

/// Events published on the `Session` topic.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// An event resolved with this result.
    Resolved(EventResult),

    /// A consumed pickup must leave the scene.
    EntityDespawned { entity: EntityId },

    /// The global simulation clock must stop.
    ClockPaused,
}

/// Events published on the `Ui` topic.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A label's text changed (empty text means the label shows nothing).
    LabelChanged { widget: WidgetId, text: String },

    /// The heart row changed; read the new slots from the UI model.
    HeartRowChanged,
}

//! High-level session orchestrator.
//!
//! The session owns the authoritative state, wires oracle access and the
//! event bus together, and exposes a builder-based API for hosts to feed
//! their engine's callbacks into the reducer.

use game_core::{
    ContactTag, Effect, Engine, EntityId, Event, EventResult, LayoutOracle, SessionState,
};
use tokio::sync::broadcast;

use crate::error::{Result, RuntimeError};
use crate::events::{BusEvent, EventBus, SessionEvent, Topic, UiEvent};
use crate::oracle::OracleManager;
use crate::registry::{MESSAGE_LABEL, SCORE_LABEL, SceneRegistry, WidgetId};
use crate::ui::UiModel;

/// Session configuration shared across the orchestrator and bus.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub event_buffer_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
        }
    }
}

/// Main runtime object hosts embed and feed engine callbacks into.
///
/// Dispatch is synchronous: each call runs one event through the core
/// engine, performs the resulting host duties, refreshes the UI mirror, and
/// publishes bus events for subscribers.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    oracles: OracleManager,
    ui: UiModel,
    bus: EventBus,
    message_widget: WidgetId,
    score_widget: WidgetId,
}

impl Session {
    /// Create a new session builder.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Read access to the authoritative state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Read access to the UI mirror.
    pub fn ui(&self) -> &UiModel {
        &self.ui
    }

    /// Widget handle of the dialogue message label.
    pub fn message_widget(&self) -> WidgetId {
        self.message_widget
    }

    /// Widget handle of the score label.
    pub fn score_widget(&self) -> WidgetId {
        self.score_widget
    }

    /// Subscribe to a bus topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BusEvent> {
        self.bus.subscribe(topic)
    }

    /// Executes one event through the engine.
    ///
    /// Host duties coming out of the engine (pickup despawns, clock pause)
    /// are published on the `Session` topic; UI mirror changes on the `Ui`
    /// topic.
    pub fn dispatch(&mut self, event: Event) -> Result<EventResult> {
        let outcome = Engine::new(&mut self.state).execute(self.oracles.as_env(), &event)?;

        for effect in &outcome.effects {
            match effect {
                Effect::Despawn(entity) => {
                    self.bus
                        .publish(BusEvent::Session(SessionEvent::EntityDespawned {
                            entity: *entity,
                        }));
                }
                Effect::PauseClock => {
                    self.bus.publish(BusEvent::Session(SessionEvent::ClockPaused));
                }
            }
        }

        self.refresh_ui();
        self.bus
            .publish(BusEvent::Session(SessionEvent::Resolved(outcome.result)));
        tracing::debug!(?event, result = ?outcome.result, "event dispatched");

        Ok(outcome.result)
    }

    /// The player's collider entered a trigger zone tagged `tag`.
    pub fn player_trigger_entered(&mut self, other: EntityId, tag: ContactTag) -> Result<EventResult> {
        self.dispatch(Event::TriggerEntered {
            listener: EntityId::PLAYER,
            other,
            tag,
        })
    }

    /// The player's collider hit a solid object tagged `tag`.
    pub fn player_collision_entered(
        &mut self,
        other: EntityId,
        tag: ContactTag,
    ) -> Result<EventResult> {
        self.dispatch(Event::CollisionEntered {
            listener: EntityId::PLAYER,
            other,
            tag,
        })
    }

    /// The player entered the guide NPC's trigger zone.
    pub fn npc_zone_entered(&mut self) -> Result<EventResult> {
        self.dispatch(Event::TriggerEntered {
            listener: self.state.dialogue.npc,
            other: EntityId::PLAYER,
            tag: ContactTag::Player,
        })
    }

    /// The player left the guide NPC's trigger zone.
    pub fn npc_zone_exited(&mut self) -> Result<EventResult> {
        self.dispatch(Event::TriggerExited {
            listener: self.state.dialogue.npc,
            other: EntityId::PLAYER,
            tag: ContactTag::Player,
        })
    }

    /// The discrete confirm input fired (mouse click / accept button).
    pub fn confirm_pressed(&mut self) -> Result<EventResult> {
        self.dispatch(Event::ConfirmPressed)
    }

    /// Brings the UI mirror in line with the state, publishing a `Ui` event
    /// per element that actually changed.
    fn refresh_ui(&mut self) {
        let message = self
            .state
            .dialogue
            .message
            .clone()
            .unwrap_or_default();
        if self.ui.set_label(self.message_widget, message.clone()) {
            self.bus.publish(BusEvent::Ui(UiEvent::LabelChanged {
                widget: self.message_widget,
                text: message,
            }));
        }

        let score = self.state.player.score_text();
        if self.ui.set_label(self.score_widget, score.clone()) {
            self.bus.publish(BusEvent::Ui(UiEvent::LabelChanged {
                widget: self.score_widget,
                text: score,
            }));
        }

        if self.ui.sync_hearts(&self.state.player.hearts) {
            self.bus.publish(BusEvent::Ui(UiEvent::HeartRowChanged));
        }
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: SessionConfig,
    oracles: Option<OracleManager>,
    registry: Option<SceneRegistry>,
    guide_npc: EntityId,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            oracles: None,
            registry: None,
            guide_npc: EntityId(1),
        }
    }

    /// Override session configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager.
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required scene registry.
    pub fn registry(mut self, registry: SceneRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Entity whose trigger zone drives the guide dialogue (default `#1`).
    pub fn guide_npc(mut self, npc: EntityId) -> Self {
        self.guide_npc = npc;
        self
    }

    /// Validates the configuration and constructs the initial session.
    ///
    /// # Errors
    ///
    /// - `MissingOracles` / `MissingRegistry` when a required part was not
    ///   supplied
    /// - `MissingBinding` when the registry lacks the message or score label
    /// - `InitialState` when the configuration cannot lay out the heart bar
    pub fn build(self) -> Result<Session> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let registry = self.registry.ok_or(RuntimeError::MissingRegistry)?;

        let message_widget = registry.resolve(MESSAGE_LABEL)?;
        let score_widget = registry.resolve(SCORE_LABEL)?;

        let config = oracles.game_config().clone();
        let spawn = oracles.layout.player_spawn();
        let state = SessionState::new(&config, spawn, self.guide_npc)
            .map_err(RuntimeError::InitialState)?;

        let mut ui = UiModel::new();
        ui.set_label(message_widget, String::new());
        ui.set_label(score_widget, state.player.score_text());
        ui.sync_hearts(&state.player.hearts);

        tracing::info!(
            max_life = config.max_life,
            max_shield = config.max_shield,
            guide = %self.guide_npc,
            "session initialized"
        );

        Ok(Session {
            state,
            oracles,
            ui,
            bus: EventBus::with_capacity(self.config.event_buffer_size),
            message_widget,
            score_widget,
        })
    }
}

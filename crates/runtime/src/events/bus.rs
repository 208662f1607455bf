//! Topic-based event bus implementation.

use std::collections::HashMap;

use tokio::sync::broadcast;

use super::types::{SessionEvent, UiEvent};

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Session results and host duties (despawns, clock pause).
    Session,
    /// UI mirror changes (labels, heart row).
    Ui,
}

/// Event wrapper that carries the topic and typed event.
#[derive(Debug, Clone)]
pub enum BusEvent {
    Session(SessionEvent),
    Ui(UiEvent),
}

impl BusEvent {
    pub fn topic(&self) -> Topic {
        match self {
            BusEvent::Session(_) => Topic::Session,
            BusEvent::Ui(_) => Topic::Ui,
        }
    }
}

/// Topic-based event bus.
///
/// Allows consumers to subscribe to specific topics and only receive the
/// events they care about. Publishing is best-effort: a topic without
/// subscribers simply drops the event.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: HashMap<Topic, broadcast::Sender<BusEvent>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();

        // Pre-create channels for each topic
        channels.insert(Topic::Session, broadcast::channel(capacity).0);
        channels.insert(Topic::Ui, broadcast::channel(capacity).0);

        Self { channels }
    }

    /// Publish an event to its corresponding topic.
    pub fn publish(&self, event: BusEvent) {
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic.
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BusEvent> {
        self.channels
            .get(&topic)
            .expect("Topic channel not initialized")
            .subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_only_see_their_topic() {
        let bus = EventBus::new();
        let mut session_rx = bus.subscribe(Topic::Session);
        let mut ui_rx = bus.subscribe(Topic::Ui);

        bus.publish(BusEvent::Session(SessionEvent::ClockPaused));

        assert!(matches!(
            session_rx.try_recv(),
            Ok(BusEvent::Session(SessionEvent::ClockPaused))
        ));
        assert!(ui_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(BusEvent::Ui(UiEvent::HeartRowChanged));
    }
}

//! Guide NPC dialogue state.

use super::EntityId;

/// Progress of the guide's one-shot scripted dialogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialoguePhase {
    /// No contact yet; the first player contact starts the script.
    Fresh,
    /// Script running; the next confirm input shows line `next`.
    AwaitingConfirmation { next: usize },
    /// Script finished; further contact shows the fixed warning.
    Triggered,
}

/// State owned by the guide NPC's trigger zone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueState {
    /// Entity whose trigger zone drives this dialogue.
    pub npc: EntityId,
    pub phase: DialoguePhase,
    /// Message currently displayed, if any.
    pub message: Option<String>,
}

impl DialogueState {
    pub fn new(npc: EntityId) -> Self {
        Self {
            npc,
            phase: DialoguePhase::Fresh,
            message: None,
        }
    }

    #[inline]
    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, DialoguePhase::AwaitingConfirmation { .. })
    }
}

//! Scene binding registry.
//!
//! Hosts register the UI elements their scene provides under well-known
//! names before the session is built; the session resolves what it needs at
//! initialization and fails with a typed error when a binding is missing.
//! This replaces runtime scene lookups by name, turning a hidden
//! startup-only failure mode into an explicit precondition.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, RuntimeError};

/// Well-known name of the dialogue message label.
pub const MESSAGE_LABEL: &str = "Message";

/// Well-known name of the score label.
pub const SCORE_LABEL: &str = "Score";

/// Opaque handle to a host-owned UI element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u32);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Registry of named scene bindings.
#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    bindings: HashMap<String, WidgetId>,
    next_id: u32,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` and returns its widget handle.
    ///
    /// Registering the same name twice returns the existing handle.
    pub fn register(&mut self, name: &str) -> WidgetId {
        if let Some(id) = self.bindings.get(name) {
            return *id;
        }

        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.bindings.insert(name.to_owned(), id);
        id
    }

    /// Resolves a binding by name.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::MissingBinding` if the name was never
    /// registered.
    pub fn resolve(&self, name: &str) -> Result<WidgetId> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::MissingBinding {
                name: name.to_owned(),
            })
    }

    /// Check if a binding exists.
    pub fn has(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of registered bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

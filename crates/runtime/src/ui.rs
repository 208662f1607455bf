//! Host-facing UI mirror.
//!
//! The session never touches real UI components; it keeps this model in sync
//! with the state after every dispatch and the host renders from it. Labels
//! hold plain text; the heart row mirrors the core heart bar slot for slot.

use std::collections::HashMap;

use game_core::{HeartBar, HeartSlot};

use crate::registry::WidgetId;

/// Mirror of the UI elements the session drives.
#[derive(Clone, Debug, Default)]
pub struct UiModel {
    labels: HashMap<WidgetId, String>,
    hearts: Vec<HeartSlot>,
}

impl UiModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a label's text. Returns whether the text changed.
    pub fn set_label(&mut self, widget: WidgetId, text: String) -> bool {
        match self.labels.get(&widget) {
            Some(current) if *current == text => false,
            _ => {
                self.labels.insert(widget, text);
                true
            }
        }
    }

    /// Current text of a label, if it was ever set.
    pub fn label(&self, widget: WidgetId) -> Option<&str> {
        self.labels.get(&widget).map(String::as_str)
    }

    /// Mirrors the heart bar. Returns whether the row changed.
    pub fn sync_hearts(&mut self, bar: &HeartBar) -> bool {
        if self.hearts == bar.slots() {
            return false;
        }

        self.hearts.clear();
        self.hearts.extend_from_slice(bar.slots());
        true
    }

    /// The mirrored heart row, life slots first.
    pub fn hearts(&self) -> &[HeartSlot] {
        &self.hearts
    }
}

#[cfg(test)]
mod tests {
    use game_core::HeartIcon;

    use super::*;

    #[test]
    fn set_label_reports_changes_only() {
        let mut ui = UiModel::new();
        let widget = WidgetId(0);

        assert!(ui.set_label(widget, "0000".to_owned()));
        assert!(!ui.set_label(widget, "0000".to_owned()));
        assert!(ui.set_label(widget, "0005".to_owned()));
        assert_eq!(ui.label(widget), Some("0005"));
    }

    #[test]
    fn heart_row_mirrors_the_bar() {
        let mut ui = UiModel::new();
        let mut bar = HeartBar::new(3, 6).unwrap();

        assert!(ui.sync_hearts(&bar));
        assert!(!ui.sync_hearts(&bar));
        assert_eq!(ui.hearts().len(), 9);

        bar.deplete_life(2);
        assert!(ui.sync_hearts(&bar));
        assert_eq!(ui.hearts()[2].icon, HeartIcon::Container);
    }
}

mod history;

use std::collections::HashMap;

use egui::Key;

use crate::tools::ToolMode;

pub use history::History;

/// Edge-triggered actions a user can request of the draw session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Change the active tool
    SelectMode(ToolMode),
    /// Fill the canvas with the background colour (undoable)
    Clear,
    Undo,
    Redo,
    /// Write the canvas to the save path
    Save,
    /// Auto-save and end the session
    Quit,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Self::SelectMode(mode) => mode.name(),
            Self::Clear => "Clear",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::Save => "Save",
            Self::Quit => "Quit",
        }
    }
}

/// Keyboard shortcuts for [`Action`]s
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<Key, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = [
            (Key::R, Action::SelectMode(ToolMode::Rectangle)),
            (Key::C, Action::SelectMode(ToolMode::Ellipse)),
            (Key::L, Action::SelectMode(ToolMode::Line)),
            (Key::E, Action::SelectMode(ToolMode::Eraser)),
            (Key::Z, Action::Undo),
            (Key::Y, Action::Redo),
            (Key::X, Action::Clear),
            (Key::S, Action::Save),
            (Key::Escape, Action::Quit),
        ];
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }
}

impl KeyBindings {
    /// A map with no shortcuts at all
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key`, replacing whatever it was bound to
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.bindings.remove(&key)
    }

    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Shortcut help lines, sorted by key name
    pub fn describe(&self) -> Vec<String> {
        let mut lines: Vec<_> = self
            .bindings
            .iter()
            .map(|(key, action)| format!("{} - {}", key.name(), action.label()))
            .collect();
        lines.sort();
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for(Key::C), Some(Action::SelectMode(ToolMode::Ellipse)));
        assert_eq!(keys.action_for(Key::Z), Some(Action::Undo));
        assert_eq!(keys.action_for(Key::Y), Some(Action::Redo));
        assert_eq!(keys.action_for(Key::Escape), Some(Action::Quit));
        assert_eq!(keys.action_for(Key::Q), None);
    }

    #[test]
    fn test_rebind() {
        let mut keys = KeyBindings::default();
        assert_eq!(keys.bind(Key::Z, Action::Redo), Some(Action::Undo));
        assert_eq!(keys.action_for(Key::Z), Some(Action::Redo));
        assert_eq!(keys.unbind(Key::S), Some(Action::Save));
        assert_eq!(keys.action_for(Key::S), None);
    }

    #[test]
    fn test_describe_lists_every_binding() {
        assert_eq!(KeyBindings::default().describe().len(), 9);
        assert!(KeyBindings::empty().describe().is_empty());
    }
}

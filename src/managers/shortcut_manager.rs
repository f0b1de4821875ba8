//! Keyboard shortcuts for the shell.
//!
//! Binds key combos to toolbar actions with conflict detection and
//! platform-specific modifier key adaptation.

use std::collections::HashMap;

use crate::types::action::ToolbarAction;
use crate::types::errors::ShortcutError;

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError>;
    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError>;
    fn get_shortcut(&self, action: &str) -> Option<&str>;
    fn list_shortcuts(&self) -> &HashMap<String, String>;
    fn reset_to_defaults(&mut self);
    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String>;
    fn action_for(&self, keys: &str) -> Option<ToolbarAction>;
}

/// Action names that can be bound, in display order.
const BINDABLE_ACTIONS: &[&str] = &[
    "new_tab",
    "close_tab",
    "reload",
    "back",
    "forward",
    "home",
    "bookmark_page",
    "toggle_dark_mode",
    "next_tab",
    "prev_tab",
];

/// Shortcut manager with in-memory storage and platform adaptation.
pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        Self {
            shortcuts: Self::default_shortcuts(),
        }
    }

    pub fn default_shortcuts() -> HashMap<String, String> {
        let defaults = [
            ("new_tab", "Ctrl+T"),
            ("close_tab", "Ctrl+W"),
            ("reload", "Ctrl+R"),
            ("back", "Alt+Left"),
            ("forward", "Alt+Right"),
            ("home", "Alt+Home"),
            ("bookmark_page", "Ctrl+D"),
            ("toggle_dark_mode", "Ctrl+Shift+D"),
            ("next_tab", "Ctrl+Tab"),
            ("prev_tab", "Ctrl+Shift+Tab"),
        ];

        defaults
            .into_iter()
            .map(|(a, k)| (a.to_string(), Self::adapt_for_platform(k)))
            .collect()
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }

    fn action_from_name(name: &str) -> Option<ToolbarAction> {
        let action = match name {
            "new_tab" => ToolbarAction::NewTab { url: None },
            "close_tab" => ToolbarAction::CloseActiveTab,
            "reload" => ToolbarAction::Reload,
            "back" => ToolbarAction::Back,
            "forward" => ToolbarAction::Forward,
            "home" => ToolbarAction::Home,
            "bookmark_page" => ToolbarAction::AddBookmark,
            "toggle_dark_mode" => ToolbarAction::ToggleDarkMode,
            "next_tab" => ToolbarAction::NextTab,
            "prev_tab" => ToolbarAction::PrevTab,
            _ => return None,
        };
        Some(action)
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        if keys.trim().is_empty() {
            return Err(ShortcutError::InvalidKeys("Keys cannot be empty".to_string()));
        }
        if !BINDABLE_ACTIONS.contains(&action) {
            return Err(ShortcutError::NotFound(action.to_string()));
        }
        if let Some(conflicting_action) = self.has_conflict(keys, Some(action)) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'",
                keys, conflicting_action
            )));
        }

        self.shortcuts
            .insert(action.to_string(), Self::adapt_for_platform(keys));
        Ok(())
    }

    fn unregister_shortcut(&mut self, action: &str) -> Result<(), ShortcutError> {
        self.shortcuts
            .remove(action)
            .map(|_| ())
            .ok_or_else(|| ShortcutError::NotFound(action.to_string()))
    }

    fn get_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    fn list_shortcuts(&self) -> &HashMap<String, String> {
        &self.shortcuts
    }

    fn reset_to_defaults(&mut self) {
        self.shortcuts = Self::default_shortcuts();
    }

    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String> {
        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts
            .iter()
            .find(|(action, bound)| **bound == adapted && Some(action.as_str()) != exclude_action)
            .map(|(action, _)| action.clone())
    }

    fn action_for(&self, keys: &str) -> Option<ToolbarAction> {
        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts
            .iter()
            .find(|(_, bound)| **bound == adapted)
            .and_then(|(action, _)| Self::action_from_name(action))
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Window-wide style selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Immutable palette applied to the browser chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStyle {
    pub window_bg: &'static str,
    pub window_fg: &'static str,
    pub toolbar_bg: &'static str,
    pub button_fg: &'static str,
    pub button_hover_bg: &'static str,
    pub tab_bg: &'static str,
    pub tab_selected_bg: &'static str,
    pub tab_fg: &'static str,
    pub pane_border: &'static str,
    pub input_bg: &'static str,
    pub input_fg: &'static str,
    pub input_border: &'static str,
    pub bookmark_bg: &'static str,
    pub bookmark_hover_bg: &'static str,
    pub bookmark_border: &'static str,
}

impl ThemeStyle {
    pub const LIGHT: ThemeStyle = ThemeStyle {
        window_bg: "#f0f0f0",
        window_fg: "#000000",
        toolbar_bg: "#f0f0f0",
        button_fg: "#000000",
        button_hover_bg: "#e0e0e0",
        tab_bg: "#e1e1e1",
        tab_selected_bg: "#ffffff",
        tab_fg: "#000000",
        pane_border: "#c4c4c4",
        input_bg: "#ffffff",
        input_fg: "#000000",
        input_border: "#7a7a7a",
        bookmark_bg: "#1e1e1e",
        bookmark_hover_bg: "#3a3a3a",
        bookmark_border: "#444444",
    };

    pub const DARK: ThemeStyle = ThemeStyle {
        window_bg: "#121212",
        window_fg: "#ffffff",
        toolbar_bg: "#1e1e1e",
        button_fg: "#ffffff",
        button_hover_bg: "#333333",
        tab_bg: "#2c2c2c",
        tab_selected_bg: "#3a3a3a",
        tab_fg: "#ffffff",
        pane_border: "#444444",
        input_bg: "#2a2a2a",
        input_fg: "#ffffff",
        input_border: "#555555",
        bookmark_bg: "#1e1e1e",
        bookmark_hover_bg: "#3a3a3a",
        bookmark_border: "#444444",
    };

    /// CSS custom properties consumed by the chrome page.
    pub fn to_css_variables(&self) -> HashMap<String, String> {
        [
            ("--window-bg", self.window_bg),
            ("--window-fg", self.window_fg),
            ("--toolbar-bg", self.toolbar_bg),
            ("--button-fg", self.button_fg),
            ("--button-hover-bg", self.button_hover_bg),
            ("--tab-bg", self.tab_bg),
            ("--tab-selected-bg", self.tab_selected_bg),
            ("--tab-fg", self.tab_fg),
            ("--pane-border", self.pane_border),
            ("--input-bg", self.input_bg),
            ("--input-fg", self.input_fg),
            ("--input-border", self.input_border),
            ("--bookmark-bg", self.bookmark_bg),
            ("--bookmark-hover-bg", self.bookmark_hover_bg),
            ("--bookmark-border", self.bookmark_border),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }
}

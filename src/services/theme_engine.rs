//! Theme Engine: window-wide light/dark style selection.
//!
//! The current theme is an explicit value, and each theme maps to one
//! immutable `ThemeStyle`. Nothing is persisted.

use std::collections::HashMap;

use crate::types::theme::{Theme, ThemeStyle};

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn apply_theme(&mut self, theme: Theme) -> &'static ThemeStyle;
    fn toggle(&mut self) -> Theme;
    fn current(&self) -> Theme;
    fn style(&self) -> &'static ThemeStyle;
    fn get_css_variables(&self) -> HashMap<String, String>;
}

pub struct ThemeEngine {
    current_theme: Theme,
}

impl ThemeEngine {
    pub fn new(theme: Theme) -> Self {
        Self { current_theme: theme }
    }

    pub fn style_for(theme: Theme) -> &'static ThemeStyle {
        match theme {
            Theme::Light => &ThemeStyle::LIGHT,
            Theme::Dark => &ThemeStyle::DARK,
        }
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn apply_theme(&mut self, theme: Theme) -> &'static ThemeStyle {
        self.current_theme = theme;
        Self::style_for(theme)
    }

    fn toggle(&mut self) -> Theme {
        let next = self.current_theme.toggled();
        self.apply_theme(next);
        next
    }

    fn current(&self) -> Theme {
        self.current_theme
    }

    fn style(&self) -> &'static ThemeStyle {
        Self::style_for(self.current_theme)
    }

    fn get_css_variables(&self) -> HashMap<String, String> {
        self.style().to_css_variables()
    }
}

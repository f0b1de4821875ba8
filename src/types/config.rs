use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// Fixed shell configuration. There is no config file; the binary always
/// starts from `ShellConfig::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub home_url: String,
    /// Prefix the encoded query is appended to for address bar searches.
    pub search_url: String,
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
    /// Height in logical pixels of the chrome strip above the page.
    pub chrome_height: f64,
    pub initial_theme: Theme,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
            window_title: "Tabbed Browser".to_string(),
            window_width: 1200.0,
            window_height: 800.0,
            chrome_height: 116.0,
            initial_theme: Theme::Light,
        }
    }
}

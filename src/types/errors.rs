use thiserror::Error;

use super::tab::TabId;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(TabId),
    /// The container holds no tabs at all.
    #[error("No active tab")]
    NoActiveTab,
}

// === ShortcutError ===

/// Errors related to keyboard shortcut management.
#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("Invalid shortcut keys: {0}")]
    InvalidKeys(String),
    #[error("Shortcut conflict: {0}")]
    Conflict(String),
    #[error("Shortcut not found: {0}")]
    NotFound(String),
}

// === IpcError ===

/// Errors decoding messages posted by the chrome or tab pages.
#[derive(Debug, Error)]
pub enum IpcError {
    #[error("Malformed IPC message: {0}")]
    Malformed(#[from] serde_json::Error),
}

// === ShellError ===

/// Failures bringing up the native window and its web views.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Failed to create window: {0}")]
    Window(String),
    #[error("Failed to create web view: {0}")]
    WebView(String),
}

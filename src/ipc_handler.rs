//! Decoding of messages posted by the chrome page and tab pages.
//!
//! Every message is a JSON object with a `cmd` field. Toolbar commands map
//! straight onto `ToolbarAction`; `ui_ready` and `shortcut` are handled
//! by the window itself.

use serde::Deserialize;
use serde_json::Value;

use crate::types::action::ToolbarAction;
use crate::types::chrome::ChromeState;
use crate::types::errors::IpcError;

/// Forwards key combos pressed inside a page to the shell.
const SHORTCUT_JS: &str = include_str!("../resources/ui/shortcuts.js");

/// A decoded IPC message.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellMessage {
    /// The chrome page finished loading and wants the current state.
    UiReady,
    /// A key combo pressed inside a page or the chrome.
    Shortcut(String),
    Action(ToolbarAction),
}

#[derive(Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum ControlMessage {
    UiReady,
    Shortcut { combo: String },
}

/// Parse one IPC message body.
pub fn parse_message(body: &str) -> Result<ShellMessage, IpcError> {
    let value: Value = serde_json::from_str(body)?;
    let cmd = value.get("cmd").and_then(Value::as_str).unwrap_or_default();

    let message = match cmd {
        "ui_ready" | "shortcut" => match serde_json::from_value(value)? {
            ControlMessage::UiReady => ShellMessage::UiReady,
            ControlMessage::Shortcut { combo } => ShellMessage::Shortcut(combo),
        },
        _ => ShellMessage::Action(serde_json::from_value(value)?),
    };
    Ok(message)
}

/// Script that pushes `state` into the chrome page.
pub fn chrome_update_script(state: &ChromeState) -> Result<String, IpcError> {
    let json = serde_json::to_string(state)?;
    Ok(format!("if(window.__shell_update)window.__shell_update({})", json))
}

/// Initialization script for the chrome and every tab page. Combos in
/// `bound` have the engine's own handling suppressed.
pub fn shortcut_init_script<'a>(bound: impl IntoIterator<Item = &'a str>) -> Result<String, IpcError> {
    let mut combos: Vec<&str> = bound.into_iter().collect();
    combos.sort_unstable();
    let json = serde_json::to_string(&combos)?;
    Ok(format!("window.__shell_bound_combos = {};\n{}", json, SHORTCUT_JS))
}

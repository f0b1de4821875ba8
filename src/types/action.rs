use serde::{Deserialize, Serialize};

use super::tab::TabId;

/// Everything the navigation toolbar, tab strip and bookmark bar can ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ToolbarAction {
    Back,
    Forward,
    Reload,
    Home,
    NewTab {
        #[serde(default)]
        url: Option<String>,
    },
    CloseTab { id: TabId },
    CloseActiveTab,
    SwitchTab { id: TabId },
    NextTab,
    PrevTab,
    /// Address bar submission; `input` is resolved to a URL.
    Navigate { input: String },
    AddBookmark,
    OpenBookmark { url: String },
    ToggleDarkMode,
}

use std::collections::HashMap;

use serde::Serialize;

use super::bookmark::Bookmark;
use super::tab::TabId;
use super::theme::Theme;

/// Snapshot of everything the chrome page draws: tab strip, address field,
/// bookmark bar and palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeState {
    pub tabs: Vec<TabSummary>,
    pub active_id: Option<TabId>,
    pub address: String,
    pub bookmarks: Vec<Bookmark>,
    pub theme: Theme,
    pub css_variables: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSummary {
    pub id: TabId,
    pub title: String,
    pub active: bool,
    pub loading: bool,
    pub load_failed: bool,
}

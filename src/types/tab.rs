use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle naming one tab for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A browser tab owning its render surface.
#[derive(Debug)]
pub struct Tab<S> {
    pub id: TabId,
    pub surface: S,
    pub title: String,
    pub loading: bool,
    pub load_failed: bool,
    pub created_at: i64,
}

/// Label shown for a tab before its page reports a title.
pub const NEW_TAB_TITLE: &str = "New Tab";

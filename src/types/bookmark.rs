use serde::{Deserialize, Serialize};

/// A bookmarked page shown as a shortcut on the bookmark bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}

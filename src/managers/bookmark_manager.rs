//! Bookmark bar for the shell.
//!
//! An insertion-ordered map from URL to `Bookmark`. Each URL can be
//! bookmarked once; adding it again is a silent no-op. Bookmarks live only as
//! long as the window and cannot be removed.

use std::time::{SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;
use uuid::Uuid;

use crate::types::bookmark::Bookmark;

/// Title used when the page has not reported one.
pub const UNTITLED: &str = "Untitled";

/// Trait defining bookmark bar operations.
pub trait BookmarkBarTrait {
    /// Returns `true` if a new bookmark was inserted.
    fn add(&mut self, url: &str, title: &str) -> bool;
    fn get(&self, url: &str) -> Option<&Bookmark>;
    fn contains(&self, url: &str) -> bool;
    fn list(&self) -> Vec<&Bookmark>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct BookmarkBar {
    bookmarks: IndexMap<String, Bookmark>,
}

impl BookmarkBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl BookmarkBarTrait for BookmarkBar {
    fn add(&mut self, url: &str, title: &str) -> bool {
        if self.bookmarks.contains_key(url) {
            return false;
        }
        let title = if title.trim().is_empty() { UNTITLED } else { title };
        self.bookmarks.insert(
            url.to_string(),
            Bookmark {
                id: Uuid::new_v4().to_string(),
                url: url.to_string(),
                title: title.to_string(),
                created_at: Self::now(),
            },
        );
        true
    }

    fn get(&self, url: &str) -> Option<&Bookmark> {
        self.bookmarks.get(url)
    }

    fn contains(&self, url: &str) -> bool {
        self.bookmarks.contains_key(url)
    }

    fn list(&self) -> Vec<&Bookmark> {
        self.bookmarks.values().collect()
    }

    fn len(&self) -> usize {
        self.bookmarks.len()
    }

    fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

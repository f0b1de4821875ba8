use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabId, NEW_TAB_TITLE};

/// Trait defining the tab management interface.
pub trait TabManagerTrait<S> {
    fn create_tab(&mut self, id: TabId, surface: S) -> TabId;
    fn close_tab(&mut self, tab_id: TabId) -> Result<bool, TabError>;
    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn next_tab(&mut self) -> Result<TabId, TabError>;
    fn prev_tab(&mut self) -> Result<TabId, TabError>;
    fn current(&self) -> Result<&Tab<S>, TabError>;
    fn current_mut(&mut self) -> Result<&mut Tab<S>, TabError>;
    fn get_tab(&self, tab_id: TabId) -> Option<&Tab<S>>;
    fn get_all_tabs(&self) -> Vec<&Tab<S>>;
    fn get_tab_order(&self) -> Vec<TabId>;
    fn active_id(&self) -> Option<TabId>;
    fn active_index(&self) -> Option<usize>;
    fn tab_count(&self) -> usize;
    fn update_tab_title(&mut self, tab_id: TabId, title: &str) -> Result<(), TabError>;
    fn set_loading(&mut self, tab_id: TabId, loading: bool) -> Result<(), TabError>;
    fn mark_load_finished(&mut self, tab_id: TabId, success: bool) -> Result<(), TabError>;
}

/// Ordered, in-memory tab container.
///
/// Once the first tab exists the container never becomes empty again:
/// closing the last remaining tab is refused.
pub struct TabManager<S> {
    tabs: Vec<Tab<S>>,
    active_tab_id: Option<TabId>,
}

impl<S> TabManager<S> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Tabs in strip order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tab<S>> {
        self.tabs.iter_mut()
    }

    fn find_tab_index(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn tab_mut_or_err(&mut self, tab_id: TabId) -> Result<&mut Tab<S>, TabError> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or(TabError::NotFound(tab_id))
    }

    /// Moves the selection `offset` places along the strip, wrapping around.
    fn select_relative(&mut self, offset: isize) -> Result<TabId, TabError> {
        let idx = self.active_index().ok_or(TabError::NoActiveTab)?;
        let len = self.tabs.len() as isize;
        let next = (idx as isize + offset).rem_euclid(len) as usize;
        let id = self.tabs[next].id;
        self.active_tab_id = Some(id);
        Ok(id)
    }
}

impl<S> Default for TabManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TabManagerTrait<S> for TabManager<S> {
    /// Append a tab and make it active.
    fn create_tab(&mut self, id: TabId, surface: S) -> TabId {
        self.tabs.push(Tab {
            id,
            surface,
            title: NEW_TAB_TITLE.to_string(),
            loading: true,
            load_failed: false,
            created_at: Self::now(),
        });
        self.active_tab_id = Some(id);
        id
    }

    /// Close a tab. Returns `Ok(false)` without touching anything when it is
    /// the last tab. If the active tab is closed, the tab that slides into its
    /// slot (the right neighbor) becomes active, or the new last tab when the
    /// rightmost one was closed.
    fn close_tab(&mut self, tab_id: TabId) -> Result<bool, TabError> {
        let tab_idx = self
            .find_tab_index(tab_id)
            .ok_or(TabError::NotFound(tab_id))?;

        if self.tabs.len() == 1 {
            return Ok(false);
        }

        let need_switch = self.active_tab_id == Some(tab_id);

        // Dropping the tab drops its surface along with any pending work.
        self.tabs.remove(tab_idx);

        if need_switch {
            let new_idx = tab_idx.min(self.tabs.len() - 1);
            self.active_tab_id = Some(self.tabs[new_idx].id);
        }

        Ok(true)
    }

    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id));
        }
        self.active_tab_id = Some(tab_id);
        Ok(())
    }

    fn next_tab(&mut self) -> Result<TabId, TabError> {
        self.select_relative(1)
    }

    fn prev_tab(&mut self) -> Result<TabId, TabError> {
        self.select_relative(-1)
    }

    fn current(&self) -> Result<&Tab<S>, TabError> {
        self.active_tab_id
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
            .ok_or(TabError::NoActiveTab)
    }

    fn current_mut(&mut self) -> Result<&mut Tab<S>, TabError> {
        let id = self.active_tab_id.ok_or(TabError::NoActiveTab)?;
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TabError::NoActiveTab)
    }

    fn get_tab(&self, tab_id: TabId) -> Option<&Tab<S>> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab<S>> {
        self.tabs.iter().collect()
    }

    fn get_tab_order(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    fn active_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    fn active_index(&self) -> Option<usize> {
        self.active_tab_id.and_then(|id| self.find_tab_index(id))
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn update_tab_title(&mut self, tab_id: TabId, title: &str) -> Result<(), TabError> {
        self.tab_mut_or_err(tab_id)?.title = title.to_string();
        Ok(())
    }

    fn set_loading(&mut self, tab_id: TabId, loading: bool) -> Result<(), TabError> {
        let tab = self.tab_mut_or_err(tab_id)?;
        tab.loading = loading;
        if loading {
            tab.load_failed = false;
        }
        Ok(())
    }

    fn mark_load_finished(&mut self, tab_id: TabId, success: bool) -> Result<(), TabError> {
        let tab = self.tab_mut_or_err(tab_id)?;
        tab.loading = false;
        tab.load_failed = !success;
        Ok(())
    }
}

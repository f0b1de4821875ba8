// Stateful shell components: tabs, the address field, bookmarks, shortcuts.

pub mod address_bar;
pub mod bookmark_manager;
pub mod shortcut_manager;
pub mod tab_manager;

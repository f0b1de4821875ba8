//! tabshell: a minimal tabbed web-browser shell.
//!
//! Page rendering is delegated to the platform web view through `wry`; this
//! crate manages tabs, the address field, bookmarks and the window theme.
//! The library exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod ipc_handler;
pub mod managers;
pub mod services;
pub mod surface;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;

//! tabshell: a minimal tabbed web-browser shell.
//!
//! Entry point: opens one browser window on the home page.
//! When built without the `gui` feature, runs a console demo over headless
//! surfaces instead.

use tabshell::types::config::ShellConfig;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    if let Err(e) = tabshell::ui::webview_app::run(ShellConfig::default()) {
        tracing::error!(error = %e, "browser failed to start");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    if let Err(e) = demo(ShellConfig::default()) {
        tracing::error!(error = %e, "demo failed");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn demo(config: ShellConfig) -> Result<(), tabshell::types::errors::ShellError> {
    use tabshell::app::BrowserWindow;
    use tabshell::managers::bookmark_manager::BookmarkBarTrait;
    use tabshell::managers::tab_manager::TabManagerTrait;
    use tabshell::surface::headless::HeadlessFactory;
    use tabshell::types::action::ToolbarAction;
    use tracing::info;

    let factory = HeadlessFactory::new();
    let events = factory.events();
    let mut window = BrowserWindow::new(config, factory)?;
    window.dispatch_pending(&events);
    info!(address = window.address_text(), "first tab on home page");

    window.perform(ToolbarAction::Navigate { input: "rust-lang.org".into() });
    window.perform(ToolbarAction::NewTab { url: Some("https://docs.rs".into()) });
    window.perform(ToolbarAction::Navigate { input: "tabbed browser shell".into() });
    window.dispatch_pending(&events);
    info!(tabs = window.tabs().tab_count(), address = window.address_text(), "two tabs open");

    window.perform(ToolbarAction::AddBookmark);
    window.perform(ToolbarAction::AddBookmark);
    info!(bookmarks = window.bookmarks().len(), "bookmarked the search page twice");

    window.perform(ToolbarAction::PrevTab);
    window.perform(ToolbarAction::Back);
    window.dispatch_pending(&events);
    info!(address = window.address_text(), "went back in the first tab");

    window.perform(ToolbarAction::ToggleDarkMode);
    info!(theme = window.theme().name(), "toggled dark mode");

    window.perform(ToolbarAction::CloseActiveTab);
    window.perform(ToolbarAction::CloseActiveTab);
    window.dispatch_pending(&events);
    info!(tabs = window.tabs().tab_count(), address = window.address_text(), "closing stops at the last tab");
    Ok(())
}

//! The browser window.
//!
//! `BrowserWindow` owns the tabs, the address field, the bookmark bar and the
//! theme, and is the only place that reacts to toolbar actions and surface
//! notifications. It is generic over the `SurfaceFactory` so the same logic
//! drives real `wry` web views and the headless engine used in tests.

use tracing::{debug, info, trace, warn};

use crate::ipc_handler::ShellMessage;
use crate::managers::address_bar::AddressBar;
use crate::managers::bookmark_manager::{BookmarkBar, BookmarkBarTrait};
use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::services::url_resolver::UrlResolver;
use crate::surface::{EventQueue, RenderSurface, SurfaceFactory};
use crate::types::action::ToolbarAction;
use crate::types::chrome::{ChromeState, TabSummary};
use crate::types::config::ShellConfig;
use crate::types::errors::ShellError;
use crate::types::event::{SurfaceEvent, SurfaceEventKind};
use crate::types::tab::TabId;
use crate::types::theme::{Theme, ThemeStyle};

pub struct BrowserWindow<F: SurfaceFactory> {
    config: ShellConfig,
    factory: F,
    tabs: TabManager<F::Surface>,
    address_bar: AddressBar,
    bookmarks: BookmarkBar,
    theme_engine: ThemeEngine,
    shortcuts: ShortcutManager,
    resolver: UrlResolver,
}

impl<F: SurfaceFactory> BrowserWindow<F> {
    /// Builds the window with its first tab on the home page.
    pub fn new(config: ShellConfig, factory: F) -> Result<Self, ShellError> {
        let resolver = UrlResolver::from_config(&config);
        let theme_engine = ThemeEngine::new(config.initial_theme);
        let home = config.home_url.clone();

        let mut window = Self {
            config,
            factory,
            tabs: TabManager::new(),
            address_bar: AddressBar::new(),
            bookmarks: BookmarkBar::new(),
            theme_engine,
            shortcuts: ShortcutManager::new(),
            resolver,
        };
        window.open_tab(&home)?;
        info!(home = %home, "browser window ready");
        Ok(window)
    }

    // ─── Accessors ───

    pub fn tabs(&self) -> &TabManager<F::Surface> {
        &self.tabs
    }

    pub fn address_text(&self) -> &str {
        self.address_bar.text()
    }

    pub fn bookmarks(&self) -> &BookmarkBar {
        &self.bookmarks
    }

    pub fn theme(&self) -> Theme {
        self.theme_engine.current()
    }

    pub fn theme_style(&self) -> &'static ThemeStyle {
        self.theme_engine.style()
    }

    pub fn shortcuts_mut(&mut self) -> &mut ShortcutManager {
        &mut self.shortcuts
    }

    /// Every tab's surface, in strip order.
    pub fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut F::Surface> {
        self.tabs.iter_mut().map(|t| &mut t.surface)
    }

    // ─── Tab lifecycle ───

    fn open_tab(&mut self, url: &str) -> Result<TabId, ShellError> {
        let id = TabId::new();
        let surface = self.factory.create(id, url)?;
        self.tabs.create_tab(id, surface);
        info!(tab = %id, url, "opened tab");
        self.on_active_tab_changed();
        Ok(id)
    }

    /// Opens a tab on `url`, or on the home page, and makes it active.
    pub fn new_tab(&mut self, url: Option<&str>) -> Option<TabId> {
        let url = url
            .map(str::to_string)
            .unwrap_or_else(|| self.config.home_url.clone());
        match self.open_tab(&url) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, url = %url, "could not open tab");
                None
            }
        }
    }

    pub fn close_tab(&mut self, id: TabId) {
        let before = self.tabs.active_id();
        match self.tabs.close_tab(id) {
            Ok(true) => {
                info!(tab = %id, remaining = self.tabs.tab_count(), "closed tab");
                if self.tabs.active_id() != before {
                    self.on_active_tab_changed();
                }
            }
            Ok(false) => debug!(tab = %id, "refusing to close the last tab"),
            Err(e) => debug!(error = %e, "close ignored"),
        }
    }

    pub fn close_active_tab(&mut self) {
        if let Some(id) = self.tabs.active_id() {
            self.close_tab(id);
        }
    }

    pub fn activate(&mut self, id: TabId) {
        match self.tabs.switch_tab(id) {
            Ok(()) => self.on_active_tab_changed(),
            Err(e) => debug!(error = %e, "activate ignored"),
        }
    }

    pub fn next_tab(&mut self) {
        if self.tabs.next_tab().is_ok() {
            self.on_active_tab_changed();
        }
    }

    pub fn prev_tab(&mut self) {
        if self.tabs.prev_tab().is_ok() {
            self.on_active_tab_changed();
        }
    }

    /// Shows only the active surface and re-reads the address from it.
    fn on_active_tab_changed(&mut self) {
        let active = self.tabs.active_id();
        for tab in self.tabs.iter_mut() {
            tab.surface.set_visible(Some(tab.id) == active);
        }
        if let Ok(tab) = self.tabs.current() {
            let url = tab.surface.url();
            debug!(tab = %tab.id, url = %url, "active tab changed");
            self.address_bar.show_url(&url);
        }
    }

    // ─── Navigation toolbar ───

    /// Runs `f` on the active surface. Loading state is only touched once
    /// the surface reports `LoadStarted`.
    fn with_current(&mut self, f: impl FnOnce(&mut F::Surface)) {
        match self.tabs.current_mut() {
            Ok(tab) => f(&mut tab.surface),
            Err(e) => debug!(error = %e, "no surface to act on"),
        }
    }

    pub fn back(&mut self) {
        self.with_current(|s| s.go_back());
    }

    pub fn forward(&mut self) {
        self.with_current(|s| s.go_forward());
    }

    pub fn reload(&mut self) {
        self.with_current(|s| s.reload());
    }

    pub fn home(&mut self) {
        let home = self.config.home_url.clone();
        self.with_current(|s| s.navigate(&home));
    }

    /// Address field submission. The resolved target is shown right away so
    /// a failed load still leaves the attempted URL visible.
    pub fn submit_address(&mut self, input: &str) {
        self.address_bar.edit(input);
        let target = self.resolver.resolve(self.address_bar.submission());
        debug!(input, target = %target, "address submitted");
        self.address_bar.show_url(&target);
        self.with_current(|s| s.navigate(&target));
    }

    /// Bookmarks the active page. Returns `false` for a duplicate URL.
    pub fn add_bookmark(&mut self) -> bool {
        let Ok(tab) = self.tabs.current() else {
            return false;
        };
        let url = tab.surface.url();
        let title = tab.surface.title();
        let added = self.bookmarks.add(&url, &title);
        if added {
            info!(url = %url, "bookmarked page");
        } else {
            debug!(url = %url, "already bookmarked");
        }
        added
    }

    /// Bookmark shortcuts open their page in a new tab.
    pub fn open_bookmark(&mut self, url: &str) -> Option<TabId> {
        if !self.bookmarks.contains(url) {
            debug!(url, "no bookmark for url");
            return None;
        }
        self.new_tab(Some(url))
    }

    pub fn toggle_dark_mode(&mut self) -> Theme {
        let next = self.theme_engine.toggle();
        info!(theme = next.name(), "toggled dark mode");
        next
    }

    pub fn perform(&mut self, action: ToolbarAction) {
        trace!(?action, "toolbar action");
        match action {
            ToolbarAction::Back => self.back(),
            ToolbarAction::Forward => self.forward(),
            ToolbarAction::Reload => self.reload(),
            ToolbarAction::Home => self.home(),
            ToolbarAction::NewTab { url } => {
                self.new_tab(url.as_deref());
            }
            ToolbarAction::CloseTab { id } => self.close_tab(id),
            ToolbarAction::CloseActiveTab => self.close_active_tab(),
            ToolbarAction::SwitchTab { id } => self.activate(id),
            ToolbarAction::NextTab => self.next_tab(),
            ToolbarAction::PrevTab => self.prev_tab(),
            ToolbarAction::Navigate { input } => self.submit_address(&input),
            ToolbarAction::AddBookmark => {
                self.add_bookmark();
            }
            ToolbarAction::OpenBookmark { url } => {
                self.open_bookmark(&url);
            }
            ToolbarAction::ToggleDarkMode => {
                self.toggle_dark_mode();
            }
        }
    }

    /// Runs the action bound to `combo`. Returns `false` if nothing is bound.
    pub fn handle_shortcut(&mut self, combo: &str) -> bool {
        match self.shortcuts.action_for(combo) {
            Some(action) => {
                self.perform(action);
                true
            }
            None => {
                trace!(combo, "unbound shortcut");
                false
            }
        }
    }

    pub fn handle_message(&mut self, message: ShellMessage) {
        match message {
            ShellMessage::UiReady => debug!("chrome ready"),
            ShellMessage::Shortcut(combo) => {
                self.handle_shortcut(&combo);
            }
            ShellMessage::Action(action) => self.perform(action),
        }
    }

    // ─── Surface notifications ───

    /// Applies one surface notification.
    ///
    /// Whether the sender is the active tab is decided here, when the event
    /// is handled, not when the surface was created: a URL change from a
    /// background tab never reaches the address field.
    pub fn dispatch(&mut self, event: SurfaceEvent) {
        let source = event.source;
        if self.tabs.get_tab(source).is_none() {
            debug!(tab = %source, "dropping event from closed tab");
            return;
        }
        let is_active = self.tabs.active_id() == Some(source);

        match event.kind {
            SurfaceEventKind::LoadStarted => {
                let _ = self.tabs.set_loading(source, true);
            }
            SurfaceEventKind::UrlChanged(url) => {
                if is_active {
                    self.address_bar.show_url(&url);
                } else {
                    trace!(tab = %source, url = %url, "ignoring url change from background tab");
                }
            }
            SurfaceEventKind::TitleChanged(title) => {
                if !title.is_empty() {
                    let _ = self.tabs.update_tab_title(source, &title);
                }
            }
            SurfaceEventKind::LoadFinished(success) => {
                let _ = self.tabs.mark_load_finished(source, success);
                if !success {
                    let url = self
                        .tabs
                        .get_tab(source)
                        .map(|t| t.surface.url())
                        .unwrap_or_default();
                    warn!(tab = %source, url = %url, "page failed to load");
                }
            }
        }
    }

    /// Dispatches everything queued so far. Returns how many events ran.
    pub fn dispatch_pending(&mut self, events: &EventQueue) -> usize {
        let mut count = 0;
        while let Some(event) = events.pop() {
            self.dispatch(event);
            count += 1;
        }
        count
    }

    /// Everything the chrome page needs to redraw.
    pub fn chrome_state(&self) -> ChromeState {
        let active = self.tabs.active_id();
        ChromeState {
            tabs: self
                .tabs
                .get_all_tabs()
                .into_iter()
                .map(|t| TabSummary {
                    id: t.id,
                    title: t.title.clone(),
                    active: Some(t.id) == active,
                    loading: t.loading,
                    load_failed: t.load_failed,
                })
                .collect(),
            active_id: active,
            address: self.address_bar.text().to_string(),
            bookmarks: self.bookmarks.list().into_iter().cloned().collect(),
            theme: self.theme_engine.current(),
            css_variables: self.theme_engine.get_css_variables(),
        }
    }
}

//! In-process stand-in for the rendering engine.
//!
//! Keeps a back/forward history and reports navigation the way a real engine
//! does: asynchronously, through the shared `EventQueue`.

use url::Url;

use super::{EventQueue, RenderSurface, SurfaceFactory};
use crate::types::errors::ShellError;
use crate::types::event::SurfaceEvent;
use crate::types::tab::TabId;

#[derive(Debug)]
pub struct HeadlessSurface {
    id: TabId,
    history: Vec<String>,
    cursor: usize,
    title: String,
    visible: bool,
    events: EventQueue,
}

impl HeadlessSurface {
    pub fn new(id: TabId, url: &str, events: EventQueue) -> Self {
        let mut surface = Self {
            id,
            history: Vec::new(),
            cursor: 0,
            title: String::new(),
            visible: false,
            events,
        };
        surface.navigate(url);
        surface
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// "Loads" the entry under the cursor and reports the outcome.
    fn load_current(&mut self) {
        let Some(url) = self.history.get(self.cursor).cloned() else {
            return;
        };
        self.events.push(SurfaceEvent::load_started(self.id));
        self.events.push(SurfaceEvent::url_changed(self.id, url.as_str()));

        match Url::parse(&url) {
            Ok(parsed) => {
                let title = parsed
                    .host_str()
                    .map(|h| h.trim_start_matches("www.").to_string())
                    .unwrap_or_else(|| url.clone());
                if title != self.title {
                    self.title = title.clone();
                    self.events.push(SurfaceEvent::title_changed(self.id, title));
                }
                self.events.push(SurfaceEvent::load_finished(self.id, true));
            }
            Err(_) => {
                self.events.push(SurfaceEvent::load_finished(self.id, false));
            }
        }
    }
}

impl RenderSurface for HeadlessSurface {
    fn navigate(&mut self, url: &str) {
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(url.to_string());
        self.cursor = self.history.len() - 1;
        self.load_current();
    }

    fn go_back(&mut self) {
        if self.can_go_back() {
            self.cursor -= 1;
            self.load_current();
        }
    }

    fn go_forward(&mut self) {
        if self.can_go_forward() {
            self.cursor += 1;
            self.load_current();
        }
    }

    fn reload(&mut self) {
        self.load_current();
    }

    fn url(&self) -> String {
        self.history.get(self.cursor).cloned().unwrap_or_default()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Factory handing every headless surface the same event queue.
#[derive(Debug, Clone, Default)]
pub struct HeadlessFactory {
    events: EventQueue,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> EventQueue {
        self.events.clone()
    }
}

impl SurfaceFactory for HeadlessFactory {
    type Surface = HeadlessSurface;

    fn create(&mut self, id: TabId, url: &str) -> Result<HeadlessSurface, ShellError> {
        Ok(HeadlessSurface::new(id, url, self.events.clone()))
    }
}

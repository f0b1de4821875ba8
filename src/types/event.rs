use serde::Serialize;

use super::tab::TabId;

/// A notification raised by a tab's render surface.
///
/// Every event carries the id of the tab that produced it so the window can
/// tell foreground changes apart from background ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceEvent {
    pub source: TabId,
    pub kind: SurfaceEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SurfaceEventKind {
    /// The engine began loading a page; no-op history moves never send it.
    LoadStarted,
    UrlChanged(String),
    TitleChanged(String),
    LoadFinished(bool),
}

impl SurfaceEvent {
    pub fn load_started(source: TabId) -> Self {
        Self { source, kind: SurfaceEventKind::LoadStarted }
    }

    pub fn url_changed(source: TabId, url: impl Into<String>) -> Self {
        Self { source, kind: SurfaceEventKind::UrlChanged(url.into()) }
    }

    pub fn title_changed(source: TabId, title: impl Into<String>) -> Self {
        Self { source, kind: SurfaceEventKind::TitleChanged(title.into()) }
    }

    pub fn load_finished(source: TabId, success: bool) -> Self {
        Self { source, kind: SurfaceEventKind::LoadFinished(success) }
    }
}

//! Boundary to the embedded rendering engine.
//!
//! A `RenderSurface` is one page view owned by one tab. Surfaces never call
//! back into the window directly: they report through an event sink, and the
//! window dispatches those `SurfaceEvent`s later on the same thread.

pub mod headless;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::types::errors::ShellError;
use crate::types::event::SurfaceEvent;
use crate::types::tab::TabId;

/// Operations the shell needs from an embedded web view.
pub trait RenderSurface {
    fn navigate(&mut self, url: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn url(&self) -> String;
    fn title(&self) -> String;
    /// Only the active tab's surface is shown.
    fn set_visible(&mut self, visible: bool);
}

/// Builds the surface for a new tab and wires its notifications.
pub trait SurfaceFactory {
    type Surface: RenderSurface;

    fn create(&mut self, id: TabId, url: &str) -> Result<Self::Surface, ShellError>;
}

/// Single-threaded FIFO of pending surface notifications.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<VecDeque<SurfaceEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: SurfaceEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    pub fn pop(&self) -> Option<SurfaceEvent> {
        self.inner.borrow_mut().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

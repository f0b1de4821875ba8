//! `RenderSurface` backed by a child `wry::WebView`.

use std::cell::RefCell;
use std::rc::Rc;

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::warn;
use wry::dpi::{LogicalPosition, LogicalSize, Position, Size};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use super::webview_app::{forward_ipc, UserEvent};
use crate::ipc_handler::ShellMessage;
use crate::surface::{RenderSurface, SurfaceFactory};
use crate::types::action::ToolbarAction;
use crate::types::errors::ShellError;
use crate::types::event::SurfaceEvent;
use crate::types::tab::TabId;

pub struct WrySurface {
    webview: WebView,
    requested_url: String,
    title: Rc<RefCell<String>>,
}

impl WrySurface {
    pub fn set_bounds(&self, bounds: Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(error = %e, "could not resize page view");
        }
    }

    fn run_script(&self, js: &str) {
        if let Err(e) = self.webview.evaluate_script(js) {
            warn!(error = %e, script = js, "page script failed");
        }
    }
}

impl RenderSurface for WrySurface {
    fn navigate(&mut self, url: &str) {
        self.requested_url = url.to_string();
        if let Err(e) = self.webview.load_url(url) {
            warn!(error = %e, url, "engine rejected navigation");
        }
    }

    fn go_back(&mut self) {
        self.run_script("history.back()");
    }

    fn go_forward(&mut self) {
        self.run_script("history.forward()");
    }

    fn reload(&mut self) {
        self.run_script("location.reload()");
    }

    /// The engine's URL, or the last requested one while nothing has
    /// committed yet.
    fn url(&self) -> String {
        self.webview
            .url()
            .ok()
            .filter(|u| !u.is_empty() && u != "about:blank")
            .unwrap_or_else(|| self.requested_url.clone())
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_visible(&mut self, visible: bool) {
        if let Err(e) = self.webview.set_visible(visible) {
            warn!(error = %e, "could not change page visibility");
        }
    }
}

/// Area below the chrome strip, in logical pixels.
pub fn page_bounds(window: &Window, chrome_height: f64) -> Rect {
    let (width, height) = logical_size(window);
    Rect {
        position: Position::Logical(LogicalPosition::new(0.0, chrome_height)),
        size: Size::Logical(LogicalSize::new(width, (height - chrome_height).max(0.0))),
    }
}

/// The chrome strip along the top of the window.
pub fn chrome_bounds(window: &Window, chrome_height: f64) -> Rect {
    let (width, _) = logical_size(window);
    Rect {
        position: Position::Logical(LogicalPosition::new(0.0, 0.0)),
        size: Size::Logical(LogicalSize::new(width, chrome_height)),
    }
}

fn logical_size(window: &Window) -> (f64, f64) {
    let size = window.inner_size();
    let scale = window.scale_factor();
    (size.width as f64 / scale, size.height as f64 / scale)
}

pub struct WryFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
    chrome_height: f64,
    init_script: String,
}

impl WryFactory {
    pub fn new(
        window: Rc<Window>,
        proxy: EventLoopProxy<UserEvent>,
        chrome_height: f64,
        init_script: String,
    ) -> Self {
        Self { window, proxy, chrome_height, init_script }
    }
}

impl SurfaceFactory for WryFactory {
    type Surface = WrySurface;

    // On Linux child web views need an X11 session.
    fn create(&mut self, id: TabId, url: &str) -> Result<WrySurface, ShellError> {
        let title = Rc::new(RefCell::new(String::new()));

        let load_proxy = self.proxy.clone();
        let title_proxy = self.proxy.clone();
        let ipc_proxy = self.proxy.clone();
        let nw_proxy = self.proxy.clone();
        let title_slot = title.clone();

        let webview = WebViewBuilder::new()
            .with_url(url)
            .with_bounds(page_bounds(&self.window, self.chrome_height))
            .with_visible(false)
            .with_initialization_script(self.init_script.as_str())
            .with_on_page_load_handler(move |event, url| {
                let send = |e: SurfaceEvent| {
                    let _ = load_proxy.send_event(UserEvent::Surface(e));
                };
                match event {
                    PageLoadEvent::Started => {
                        send(SurfaceEvent::load_started(id));
                        send(SurfaceEvent::url_changed(id, url));
                    }
                    PageLoadEvent::Finished => {
                        send(SurfaceEvent::url_changed(id, url));
                        send(SurfaceEvent::load_finished(id, true));
                    }
                }
            })
            .with_document_title_changed_handler(move |page_title| {
                *title_slot.borrow_mut() = page_title.clone();
                let _ = title_proxy.send_event(UserEvent::Surface(SurfaceEvent::title_changed(id, page_title)));
            })
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                forward_ipc(&ipc_proxy, msg.body());
            })
            .with_new_window_req_handler(move |url, _features| {
                if url.starts_with("http://") || url.starts_with("https://") {
                    let action = ToolbarAction::NewTab { url: Some(url) };
                    let _ = nw_proxy.send_event(UserEvent::Message(ShellMessage::Action(action)));
                }
                wry::NewWindowResponse::Deny
            })
            .with_devtools(cfg!(debug_assertions))
            .build_as_child(&*self.window)
            .map_err(|e| ShellError::WebView(e.to_string()))?;

        Ok(WrySurface {
            webview,
            requested_url: url.to_string(),
            title,
        })
    }
}

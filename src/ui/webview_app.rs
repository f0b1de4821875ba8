//! Event loop for the native shell.
//!
//! Architecture:
//! - The chrome page (`resources/ui/chrome.html`) is loaded with `with_html`
//!   into a child web view across the top of the window.
//! - Each tab is a `WrySurface` child web view below the chrome.
//! - IPC from either page arrives as JSON via `window.ipc.postMessage()` and
//!   is forwarded as a `UserEvent` so it is handled on the event loop thread.
//! - After every handled event the chrome state is pushed back into the
//!   chrome page with `evaluate_script`.

use std::rc::Rc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use tracing::{info, warn};
use wry::{WebView, WebViewBuilder};

use super::surface::{chrome_bounds, page_bounds, WryFactory};
use crate::app::BrowserWindow;
use crate::ipc_handler::{chrome_update_script, parse_message, shortcut_init_script, ShellMessage};
use crate::managers::shortcut_manager::ShortcutManager;
use crate::managers::tab_manager::TabManagerTrait;
use crate::types::config::ShellConfig;
use crate::types::errors::ShellError;
use crate::types::event::SurfaceEvent;

const CHROME_HTML: &str = include_str!("../../resources/ui/chrome.html");

#[derive(Debug)]
pub enum UserEvent {
    /// A notification from one tab's web view.
    Surface(SurfaceEvent),
    /// A decoded IPC message from the chrome or a page.
    Message(ShellMessage),
}

/// Decode an IPC body and hand it to the event loop.
pub(crate) fn forward_ipc(proxy: &EventLoopProxy<UserEvent>, body: &str) {
    match parse_message(body) {
        Ok(message) => {
            let _ = proxy.send_event(UserEvent::Message(message));
        }
        Err(e) => {
            let preview: String = body.chars().take(200).collect();
            warn!(error = %e, body = %preview, "ignoring ipc message");
        }
    }
}

fn push_chrome_state(chrome: &WebView, browser: &BrowserWindow<WryFactory>) {
    match chrome_update_script(&browser.chrome_state()) {
        Ok(js) => {
            if let Err(e) = chrome.evaluate_script(&js) {
                warn!(error = %e, "could not update chrome");
            }
        }
        Err(e) => warn!(error = %e, "could not serialize chrome state"),
    }
}

// ─── Main entry point ───

pub fn run(config: ShellConfig) -> Result<(), ShellError> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(tao::dpi::LogicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
        .map_err(|e| ShellError::Window(e.to_string()))?;
    let window = Rc::new(window);
    let chrome_height = config.chrome_height;
    let init_script = shortcut_init_script(
        ShortcutManager::default_shortcuts().values().map(String::as_str),
    )
    .map_err(|e| ShellError::WebView(e.to_string()))?;

    let chrome_proxy = proxy.clone();
    let chrome = WebViewBuilder::new()
        .with_html(CHROME_HTML)
        .with_bounds(chrome_bounds(&window, chrome_height))
        .with_initialization_script(init_script.as_str())
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            forward_ipc(&chrome_proxy, msg.body());
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(&*window)
        .map_err(|e| ShellError::WebView(e.to_string()))?;

    let factory = WryFactory::new(window.clone(), proxy, chrome_height, init_script);
    let mut browser = BrowserWindow::new(config, factory)?;
    push_chrome_state(&chrome, &browser);
    info!("event loop starting");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(tabs = browser.tabs().tab_count(), "window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                if let Err(e) = chrome.set_bounds(chrome_bounds(&window, chrome_height)) {
                    warn!(error = %e, "could not resize chrome");
                }
                for surface in browser.surfaces_mut() {
                    surface.set_bounds(page_bounds(&window, chrome_height));
                }
            }

            Event::UserEvent(user_event) => {
                match user_event {
                    UserEvent::Surface(event) => browser.dispatch(event),
                    UserEvent::Message(message) => browser.handle_message(message),
                }
                push_chrome_state(&chrome, &browser);
            }

            _ => {}
        }
    })
}

//! Native shell built on `wry` + `tao`.
//!
//! One `tao` window holds a chrome web view (toolbar, tab strip, bookmark
//! bar) along the top and one child web view per tab below it. Only the
//! active tab's view is visible. All engine callbacks are forwarded through
//! the event loop proxy and handled on the event loop thread.

pub mod surface;
pub mod webview_app;

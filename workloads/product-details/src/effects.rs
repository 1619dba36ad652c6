//! Side effects the page asks its host to perform.
//!
//! The page never touches a router, toast system or window directly. Hosts
//! hand it implementations of these traits; the server uses the recording
//! versions below and turns what they captured into the HTTP response.

use std::cell::{Cell, RefCell};

use crate::routes::Route;

/// Moves the shopper to another view.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Shows a short message to the shopper.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Scrolls the page.
pub trait Viewport {
    /// Smoothly bring the page's top into view, leaving `header_offset`
    /// pixels above it.
    fn scroll_to_page_top(&self, header_offset: f64);
}

/// Navigator that records every navigation.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All navigations, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.history.borrow().clone()
    }

    /// Most recent navigation.
    pub fn last(&self) -> Option<Route> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.history.borrow_mut().push(route);
    }
}

/// Notifier that keeps messages for later display.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    messages: RefCell<Vec<String>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Viewport that renders the requested scroll as an inline script.
#[derive(Debug, Default)]
pub struct ScriptViewport {
    requested: Cell<Option<f64>>,
    count: Cell<usize>,
}

impl ScriptViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scroll requests received.
    pub fn request_count(&self) -> usize {
        self.count.get()
    }

    /// Script performing the last requested scroll, if any.
    pub fn script(&self) -> Option<String> {
        let offset = self.requested.get()?;
        Some(format!(
            r#"<script>(function(){{var el=document.getElementById("pdp-root");if(!el)return;var top=el.getBoundingClientRect().top+window.pageYOffset-{offset};window.scrollTo({{top:top,behavior:"smooth"}});}})();</script>"#,
            offset = offset
        ))
    }
}

impl Viewport for ScriptViewport {
    fn scroll_to_page_top(&self, header_offset: f64) {
        self.requested.set(Some(header_offset));
        self.count.set(self.count.get() + 1);
    }
}

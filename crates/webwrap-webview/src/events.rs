//! WebView event types.

use serde::{Deserialize, Serialize};

/// Which of the shell's two webviews an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewRole {
    /// The button strip at the top of the window.
    NavBar,
    /// The browsing view below it.
    Content,
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Navigation has settled.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Frame a page asked to navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFrame {
    /// No existing frame, i.e. a new window or tab (`target="_blank"`, `window.open`).
    None,
    MainFrame,
    Subframe,
}

/// A page's request to open a secondary browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRequest {
    pub url: Option<String>,
    pub target: TargetFrame,
}

impl PopupRequest {
    /// A request for a brand-new window, as reported by the engine's
    /// new-window hook.
    pub fn new_window(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            target: TargetFrame::None,
        }
    }

    /// URL to load into the existing view instead, if this request should be
    /// redirected there.
    pub fn redirect_url(&self) -> Option<&str> {
        match self.target {
            TargetFrame::None | TargetFrame::Subframe => self.url.as_deref(),
            TargetFrame::MainFrame => None,
        }
    }
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view: ViewRole,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { view: ViewRole, title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { view: ViewRole, body: String },
    /// A navigation passed the allowlist.
    NavigationRequested { view: ViewRole, url: String },
    /// A navigation was refused by the allowlist.
    NavigationBlocked { view: ViewRole, url: String },
    /// The page asked for a new window. The engine was told not to create one.
    NewWindowRequested { view: ViewRole, request: PopupRequest },
}

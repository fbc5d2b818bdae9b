//! Routes drained webview events to the main view controller.

use webwrap_webview::ipc::{KIND_BAR_READY, KIND_NAV_CLICK, KIND_PAGE_SHOWN};
use webwrap_webview::{IpcMessage, ViewRole, WebViewEvent};

use super::core::WebWrapApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the navigation bar.
const NAVBAR_IPC_KINDS: &[&str] = &[KIND_NAV_CLICK, KIND_BAR_READY];

/// Allowed IPC message kinds from the content view. The manager has already
/// dropped reports without the view's token.
const CONTENT_IPC_KINDS: &[&str] = &[KIND_PAGE_SHOWN];

/// Check whether `view` may send an IPC message of `kind`.
///
/// Any message with a `kind` not in the view's list is rejected and logged.
pub fn is_ipc_kind_allowed(view: ViewRole, kind: &str) -> bool {
    match view {
        ViewRole::NavBar => NAVBAR_IPC_KINDS.contains(&kind),
        ViewRole::Content => CONTENT_IPC_KINDS.contains(&kind),
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl WebWrapApp {
    /// Handle a single event drained from the webview sink.
    pub(super) fn dispatch(&mut self, event: WebViewEvent) {
        match event {
            // Button state follows the content script's `page_shown`
            // report, which also fires for pages restored from cache.
            WebViewEvent::PageLoad { view, state, url } => {
                tracing::debug!(?view, ?state, url = %url, "Page load event");
            }
            WebViewEvent::TitleChanged { view, title } => {
                if view == ViewRole::Content {
                    self.update_window_title(&title);
                }
            }
            WebViewEvent::IpcMessage { view, body } => {
                self.handle_ipc_message(view, &body);
            }
            WebViewEvent::NavigationRequested { view, url } => {
                tracing::debug!(?view, url = %url, "Navigation requested");
            }
            WebViewEvent::NavigationBlocked { view, url } => {
                tracing::warn!(?view, url = %url, "Navigation blocked by scheme allowlist");
                self.controller.navigation_blocked(&url);
            }
            WebViewEvent::NewWindowRequested { view, request } => {
                tracing::debug!(?view, ?request, "New window requested");
                self.controller.popup_requested(&request);
            }
        }
    }

    /// Handle a single IPC message from one of the views.
    fn handle_ipc_message(&mut self, view: ViewRole, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        if !is_ipc_kind_allowed(view, &msg.kind) {
            tracing::warn!(?view, kind = %msg.kind, "IPC message rejected: kind not allowed");
            return;
        }

        tracing::debug!(?view, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            KIND_NAV_CLICK => match msg.nav_action() {
                Some(action) => self.controller.press(action),
                None => tracing::warn!(payload = ?msg.payload, "nav_click with unknown action"),
            },
            KIND_BAR_READY => self.controller.bar_ready(),
            KIND_PAGE_SHOWN => match msg.page_shown() {
                Some(shown) => self
                    .controller
                    .navigation_finished(&shown.url, shown.navigation),
                None => tracing::warn!(payload = ?msg.payload, "page_shown without a URL"),
            },
            _ => {
                // Shouldn't happen, allowlist checked above
                tracing::warn!(kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

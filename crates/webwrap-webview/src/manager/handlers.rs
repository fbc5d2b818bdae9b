use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, PopupRequest, ViewRole, WebViewEvent};
use crate::ipc::KIND_PAGE_SHOWN;
use crate::policy::NavigationPolicy;

use super::WebViewManager;

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

/// Whether a content message came from our init script: a `page_shown`
/// report carrying the session token.
fn is_trusted_report(body: &str, token: &str) -> bool {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return false;
    };
    value.get("kind").and_then(|k| k.as_str()) == Some(KIND_PAGE_SHOWN)
        && value.get("token").and_then(|t| t.as_str()) == Some(token)
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(?view, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(?view, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { view, body });
        })
    }

    /// Content pages can post arbitrary messages; only the init script's
    /// reports get through.
    pub(super) fn attach_content_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewRole,
        token: String,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();
            if !is_trusted_report(body, &token) {
                warn!(?view, body_len = body.len(), "IPC message rejected: not a page report");
                return;
            }
            push(
                &events,
                WebViewEvent::IpcMessage {
                    view,
                    body: body.clone(),
                },
            );
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?view, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { view, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(?view, title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { view, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        policy: Arc<NavigationPolicy>,
        view: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !policy.allows(&url) {
                warn!(?view, url = %url, "navigation blocked: scheme not in allowlist");
                push(&events, WebViewEvent::NavigationBlocked { view, url });
                return false;
            }

            debug!(?view, url = %url, "navigation allowed");
            push(&events, WebViewEvent::NavigationRequested { view, url });
            true
        })
    }

    /// The engine never gets to open a window; the request is forwarded to the
    /// controller, which decides where the URL goes.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewRole,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(?view, url = %url, "new window requested");
            push(
                &events,
                WebViewEvent::NewWindowRequested {
                    view,
                    request: PopupRequest::new_window(url),
                },
            );
            false
        })
    }
}

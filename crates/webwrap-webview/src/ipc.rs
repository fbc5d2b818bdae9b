//! IPC protocol between Rust and the two webviews' JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the bar calls `window.webwrap.ipc.send(kind, payload)`,
//!   which posts JSON through `window.ipc.postMessage` to the `ipc_handler`.
//!   Content pages post a single `page_shown` report from an init script.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to dispatch
//!   to handlers registered with `window.webwrap.ipc.on(kind, fn)`.

use serde::{Deserialize, Serialize};
use webwrap_common::NavAction;

use crate::history::NavigationKind;

/// Kind posted by the bar when a button is clicked. Payload: the action key.
pub const KIND_NAV_CLICK: &str = "nav_click";
/// Kind posted by the bar once its script has run.
pub const KIND_BAR_READY: &str = "bar_ready";
/// Kind sent to the bar with the enabled state of every button.
pub const KIND_BUTTONS: &str = "buttons";
/// Kind sent to the bar with a status line (or `null` to clear it).
pub const KIND_STATUS: &str = "status";
/// Kind sent to the bar with new button rects after a window resize.
pub const KIND_LAYOUT: &str = "layout";
/// Kind posted by content pages on `pageshow`. Payload: `{url, navigation}`.
pub const KIND_PAGE_SHOWN: &str = "page_shown";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload.
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a simple string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
}

/// A content page finished showing: its URL and how the engine got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShown {
    pub url: String,
    pub navigation: NavigationKind,
}

#[derive(Deserialize)]
struct PageShownPayload {
    url: String,
    navigation: String,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    #[cfg(test)]
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    /// The report carried by a `page_shown` message.
    pub fn page_shown(&self) -> Option<PageShown> {
        if self.kind != KIND_PAGE_SHOWN {
            return None;
        }
        let IpcPayload::Json(value) = &self.payload else {
            return None;
        };
        let raw = PageShownPayload::deserialize(value).ok()?;
        Some(PageShown {
            url: raw.url,
            navigation: NavigationKind::from_timing_type(&raw.navigation),
        })
    }

    /// The navigation action carried by a `nav_click` message.
    pub fn nav_action(&self) -> Option<NavAction> {
        if self.kind != KIND_NAV_CLICK {
            return None;
        }
        match &self.payload {
            IpcPayload::Text(key) => NavAction::from_key(key),
            _ => None,
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script, so it runs before the bar's own script.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.webwrap = window.webwrap || {};
    window.webwrap.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Init script for the content view. Reports every shown document with its
/// Navigation Timing type; pages restored from the back/forward cache do not
/// get a new timing entry, so `persisted` marks them as traversals.
///
/// `token` is kept in the closure, out of reach of page scripts, and lets the
/// IPC handler drop messages the page posts itself.
pub fn content_init_script(token: &str) -> String {
    let token = serde_json::to_string(token).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
(function() {{
    if (window.top !== window || !window.ipc) {{
        return;
    }}
    var post = window.ipc.postMessage.bind(window.ipc);
    var token = {token};
    function navigationType(persisted) {{
        if (persisted) {{
            return 'back_forward';
        }}
        var entries = performance.getEntriesByType ? performance.getEntriesByType('navigation') : [];
        if (entries.length > 0) {{
            return entries[0].type;
        }}
        var legacy = performance.navigation ? performance.navigation.type : 0;
        return legacy === 1 ? 'reload' : legacy === 2 ? 'back_forward' : 'navigate';
    }}
    window.addEventListener('pageshow', function(event) {{
        post(JSON.stringify({{
            kind: '{kind}',
            token: token,
            payload: {{ url: location.href, navigation: navigationType(event.persisted) }}
        }}));
    }});
}})();
"#,
        token = token,
        kind = KIND_PAGE_SHOWN,
    )
}

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.webwrap.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

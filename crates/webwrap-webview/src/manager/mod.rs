//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances for the shell's two
//! views and collects their callbacks into a shared event sink.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;
use crate::policy::NavigationPolicy;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Creates webviews and owns the event sink they report into.
pub struct WebViewManager {
    /// Event sink. Handlers push here, the main event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Allowlist applied to content navigations.
    policy: Arc<NavigationPolicy>,
    content_token: String,
}

impl WebViewManager {
    pub fn new(policy: NavigationPolicy) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            policy: Arc::new(policy),
            content_token: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    pub(crate) fn content_token(&self) -> &str {
        &self.content_token
    }

    #[cfg(test)]
    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(NavigationPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ViewRole;

    #[test]
    fn drain_empties_sink() {
        let manager = WebViewManager::default();
        manager.push_event(WebViewEvent::TitleChanged {
            view: ViewRole::Content,
            title: "Example".into(),
        });
        manager.push_event(WebViewEvent::IpcMessage {
            view: ViewRole::NavBar,
            body: "{}".into(),
        });

        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn each_manager_gets_its_own_token() {
        let a = WebViewManager::default();
        let b = WebViewManager::default();
        assert!(!a.content_token().is_empty());
        assert_ne!(a.content_token(), b.content_token());
    }

    #[test]
    fn policy_is_exposed() {
        let manager = WebViewManager::new(NavigationPolicy::new(["https"]));
        assert!(manager.policy().allows("https://example.com"));
        assert!(!manager.policy().allows("http://example.com"));
    }
}

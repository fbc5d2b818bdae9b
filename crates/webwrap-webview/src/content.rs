//! `wry`-backed content view.

use tracing::debug;

use crate::error::WebViewError;
use crate::history::{NavigationKind, SessionHistory, Traversal};
use crate::manager::WebViewHandle;
use crate::policy::NavigationPolicy;
use crate::view::ContentView;

/// The browsing view. Loads go straight to the engine; back/forward use the
/// page's `history` object, which is the only traversal `wry` exposes.
pub struct WryContentView {
    handle: WebViewHandle,
    history: SessionHistory,
    policy: NavigationPolicy,
}

impl WryContentView {
    pub fn new(handle: WebViewHandle, policy: NavigationPolicy) -> Self {
        Self {
            handle,
            history: SessionHistory::new(),
            policy,
        }
    }

    pub fn handle(&self) -> &WebViewHandle {
        &self.handle
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }
}

impl ContentView for WryContentView {
    fn load(&mut self, url: &str) -> Result<(), WebViewError> {
        if !self.policy.allows(url) {
            return Err(WebViewError::Blocked(url.to_string()));
        }
        self.handle.load_url(url)?;
        self.history.begin(Traversal::Load);
        debug!(url, "content load issued");
        Ok(())
    }

    fn go_back(&mut self) -> Result<(), WebViewError> {
        self.handle.evaluate_script("history.back();")?;
        self.history.begin(Traversal::Back);
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), WebViewError> {
        self.handle.evaluate_script("history.forward();")?;
        self.history.begin(Traversal::Forward);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn navigation_finished(&mut self, url: &str, kind: NavigationKind) {
        let commit = self.history.commit(url, kind);
        debug!(url, ?kind, ?commit, entries = self.history.len(), "history updated");
    }
}

//! Graceful shutdown: unmount the views and drop the event sink.

use super::core::WebWrapApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl WebWrapApp {
    /// Tear down in reverse order of creation. Dropping the webview handles
    /// destroys the native views, so this runs before the window goes away.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.controller.view_did_unload();
        self.webviews = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::WebWrapApp;
    use crate::controller::Phase;
    use webwrap_config::schema::WebWrapConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = WebWrapApp::new(WebWrapConfig::default());

        app.shutdown();

        assert!(app.should_exit);
        assert!(app.webviews.is_none());
        assert!(app.controller.content().is_none());
        assert_eq!(app.controller.phase(), Phase::Initializing);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = WebWrapApp::new(WebWrapConfig::default());

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(app.should_exit);
    }
}

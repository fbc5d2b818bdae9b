//! Event polling and deferred work.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use webwrap_webview::WebViewEvent;

use super::core::WebWrapApp;
use super::types::POLL_INTERVAL;

impl WebWrapApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        // Tasks queued while the views were being attached run on the
        // following pass, not this one.
        self.controller.run_deferred();

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            self.dispatch(event);
        }
    }
}

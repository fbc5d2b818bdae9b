//! Window title management: optionally mirrors the page title.

use super::core::WebWrapApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

/// Title to show for a page title. Blank page titles fall back to the app title.
fn window_title(app_title: &str, page_title: &str) -> String {
    let page_title = page_title.trim();
    if page_title.is_empty() {
        app_title.to_string()
    } else {
        page_title.to_string()
    }
}

impl WebWrapApp {
    /// Reflect the content view's document title, if `window.dynamic_title` is set.
    pub(super) fn update_window_title(&self, page_title: &str) {
        if !self.config.window.dynamic_title {
            return;
        }
        let Some(ref window) = self.window else {
            return;
        };

        window.set_title(&window_title(&self.config.window.title, page_title));
    }
}

// =============================================================================
// TESTS
// =============================================================================

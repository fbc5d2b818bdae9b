//! Keeps both webviews and the bar buttons in step with the window size.

use crate::layout::{to_wry, ShellLayout};

use super::core::WebWrapApp;

impl WebWrapApp {
    /// Recompute the shell layout from the current window size and apply it.
    pub(super) fn sync_view_bounds(&self) {
        let Some(ref window) = self.window else {
            return;
        };

        let (width, height) = self.logical_size(window);
        let layout = ShellLayout::compute(width, height, &self.config.navbar);

        if let Some(bar) = self.controller.bar() {
            if let Err(e) = bar.handle().set_bounds(to_wry(&layout.bar)) {
                tracing::warn!(error = %e, "Failed to resize navigation bar");
            }
            if let Err(e) = bar.update_layout(&self.placed_buttons(&layout)) {
                tracing::warn!(error = %e, "Failed to move navigation buttons");
            }
        }

        if let Some(content) = self.controller.content() {
            if let Err(e) = content.handle().set_bounds(to_wry(&layout.content)) {
                tracing::warn!(error = %e, "Failed to resize content view");
            }
        }

        tracing::debug!(width, height, "View bounds synced");
    }
}

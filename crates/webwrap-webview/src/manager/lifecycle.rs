use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::error::WebViewError;
use crate::events::ViewRole;
use crate::ipc::{content_init_script, IPC_INIT_SCRIPT};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The bar gets the IPC bridge; the content view gets page-load, title,
    /// allowlist and new-window handlers.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        role: ViewRole,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, WebViewError> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(config.focused);

        if let Some(c) = config.background {
            builder = builder.with_background_color((c.r, c.g, c.b, c.a));
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        match role {
            ViewRole::NavBar => {
                builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
                builder = Self::attach_ipc_handler(builder, Arc::clone(&events), role);
            }
            ViewRole::Content => {
                builder =
                    builder.with_initialization_script(&content_init_script(self.content_token()));
                builder = Self::attach_content_ipc_handler(
                    builder,
                    Arc::clone(&events),
                    role,
                    self.content_token().to_string(),
                );
                builder = Self::attach_page_load_handler(builder, Arc::clone(&events), role);
                builder = Self::attach_title_handler(builder, Arc::clone(&events), role);
                builder = Self::attach_navigation_handler(
                    builder,
                    Arc::clone(&events),
                    Arc::clone(&self.policy),
                    role,
                );
                builder = Self::attach_new_window_handler(builder, Arc::clone(&events), role);
            }
        }

        let initial;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial = url.as_str();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial = "inline html";
        } else {
            initial = "empty";
        }

        let webview = builder.build_as_child(window)?;

        debug!(?role, initial, "WebView created");

        Ok(WebViewHandle { webview })
    }
}

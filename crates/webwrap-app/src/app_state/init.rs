//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use webwrap_common::{Color, WebWrapError};
use webwrap_webview::{
    render_html, BarStyle, NavigationPolicy, PlacedButton, ViewRole, WebViewConfig,
    WebViewError, WebViewHandle, WebViewManager, WryContentView, WryNavBar,
};

use crate::layout::{to_wry, ShellLayout};

use super::core::WebWrapApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl WebWrapApp {
    /// Create the window and both webviews, then hand them to the controller.
    /// On error nothing is mounted and the event loop should exit.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> webwrap_common::Result<()> {
        let win = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(win.title.clone())
            .with_resizable(win.resizable)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(win.width),
                f64::from(win.height),
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| WebWrapError::Window(e.to_string()))?;

        let policy = NavigationPolicy::new(&self.config.webview.allowed_schemes);
        let manager = WebViewManager::new(policy.clone());

        let (width, height) = self.logical_size(&window);
        let layout = ShellLayout::compute(width, height, &self.config.navbar);

        let bar = self.create_bar(&manager, &window, &layout)?;
        let content = self.create_content(&manager, &window, &layout)?;

        self.controller
            .view_did_load(WryContentView::new(content, policy), WryNavBar::new(bar));
        self.webviews = Some(manager);
        self.window = Some(window);
        tracing::info!(width, height, "Window and webviews created");
        Ok(())
    }

    fn create_bar(
        &self,
        manager: &WebViewManager,
        window: &Window,
        layout: &ShellLayout,
    ) -> Result<WebViewHandle, WebViewError> {
        let navbar = &self.config.navbar;
        let defaults = BarStyle::default();
        let style = BarStyle {
            fill: Color::from_hex(&navbar.fill).unwrap_or(defaults.fill),
            border: Color::from_hex(&navbar.border).unwrap_or(defaults.border),
            border_width: f64::from(navbar.border_width),
        };

        let html = render_html(&style, &self.placed_buttons(layout));
        manager.create(
            ViewRole::NavBar,
            window,
            to_wry(&layout.bar),
            WebViewConfig {
                devtools: false,
                background: Some(style.fill),
                ..WebViewConfig::with_html(html)
            },
        )
    }

    /// The content view starts blank; the home page is loaded by the
    /// controller's deferred task.
    fn create_content(
        &self,
        manager: &WebViewManager,
        window: &Window,
        layout: &ShellLayout,
    ) -> Result<WebViewHandle, WebViewError> {
        let section = &self.config.webview;
        manager.create(
            ViewRole::Content,
            window,
            to_wry(&layout.content),
            WebViewConfig {
                devtools: section.devtools,
                user_agent: section.user_agent.clone(),
                background: Color::from_hex(&self.config.window.background),
                focused: true,
                ..WebViewConfig::default()
            },
        )
    }

    pub(super) fn placed_buttons<'a>(&'a self, layout: &ShellLayout) -> Vec<PlacedButton<'a>> {
        self.controller
            .buttons()
            .iter()
            .map(|button| PlacedButton {
                button,
                rect: layout.button(button.on_click),
            })
            .collect()
    }

    pub(super) fn logical_size(&self, window: &Window) -> (f64, f64) {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        (size.width, size.height)
    }
}

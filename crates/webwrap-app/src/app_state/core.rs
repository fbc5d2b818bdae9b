//! WebWrapApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use webwrap_config::schema::WebWrapConfig;
use webwrap_webview::{WebViewManager, WryContentView, WryNavBar};

use crate::controller::{ControllerSettings, MainViewController};

/// Top-level application state.
pub struct WebWrapApp {
    pub(super) config: WebWrapConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Event sink shared with the wry callbacks
    pub(super) webviews: Option<WebViewManager>,

    pub(super) controller: MainViewController<WryContentView, WryNavBar>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl WebWrapApp {
    pub fn new(config: WebWrapConfig) -> Self {
        let controller = MainViewController::new(ControllerSettings::from_config(&config));
        Self {
            config,
            window: None,
            webviews: None,
            controller,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

//! WebView layer for the WebWrap shell.
//!
//! Wraps the `wry` crate to provide:
//! - The [`ContentView`] / [`NavBarView`] seams the controller drives
//! - A session-history mirror for back/forward availability
//! - The navigation-bar button factory and its HTML rendition
//! - Bidirectional IPC (Rust <-> JavaScript) with the bar, and page reports
//!   from the content view
//! - Event collection (page load, title change, popups, navigation)

pub mod button;
pub mod content;
pub mod error;
pub mod events;
pub mod history;
pub mod ipc;
pub mod manager;
pub mod navbar;
pub mod policy;
pub mod view;

pub use button::{make_button, ButtonOptions, NavigationButton};
pub use content::WryContentView;
pub use error::WebViewError;
pub use events::{PageLoadState, PopupRequest, TargetFrame, ViewRole, WebViewEvent};
pub use history::{Commit, NavigationKind, SessionHistory, Traversal};
pub use ipc::{IpcMessage, IpcPayload, PageShown};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use navbar::{render_html, BarStyle, PlacedButton, WryNavBar};
pub use policy::NavigationPolicy;
pub use view::{ContentView, NavBarView};

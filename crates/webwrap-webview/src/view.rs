//! The two view seams the main view controller drives.
//!
//! Production uses the `wry`-backed [`WryContentView`](crate::WryContentView)
//! and [`WryNavBar`](crate::WryNavBar); tests substitute recording doubles.

use crate::button::NavigationButton;
use crate::error::WebViewError;
use crate::history::NavigationKind;

/// The embedded browsing view.
pub trait ContentView {
    /// Start loading `url`, superseding any in-flight navigation.
    fn load(&mut self, url: &str) -> Result<(), WebViewError>;

    /// Step one entry back in session history.
    fn go_back(&mut self) -> Result<(), WebViewError>;

    /// Step one entry forward in session history.
    fn go_forward(&mut self) -> Result<(), WebViewError>;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// Told when a main-frame navigation has settled on `url`, reached by
    /// `kind`, before the controller reads `can_go_back` / `can_go_forward`.
    fn navigation_finished(&mut self, url: &str, kind: NavigationKind);
}

/// The strip that displays the navigation buttons.
pub trait NavBarView {
    /// Show the current label/enabled state of every button.
    fn update_buttons(&mut self, buttons: &[NavigationButton]) -> Result<(), WebViewError>;

    /// Show a one-line status message, or clear it with `None`.
    fn show_status(&mut self, message: Option<&str>) -> Result<(), WebViewError>;
}

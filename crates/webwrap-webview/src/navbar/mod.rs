//! The navigation bar: an HTML strip rendered in its own webview.

mod markup;

pub use markup::{render_html, BarStyle, PlacedButton};

use serde::Serialize;
use webwrap_common::NavAction;

use crate::button::NavigationButton;
use crate::error::WebViewError;
use crate::ipc::{KIND_BUTTONS, KIND_LAYOUT, KIND_STATUS};
use crate::manager::WebViewHandle;
use crate::view::NavBarView;

#[derive(Debug, Serialize)]
struct ButtonState<'a> {
    action: NavAction,
    label: &'a str,
    enabled: bool,
}

#[derive(Debug, Serialize)]
struct ButtonRect {
    action: NavAction,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// `wry`-backed bar. Updates are pushed to the page script over IPC.
pub struct WryNavBar {
    handle: WebViewHandle,
}

impl WryNavBar {
    pub fn new(handle: WebViewHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &WebViewHandle {
        &self.handle
    }

    /// Move the buttons after the bar was resized.
    pub fn update_layout(&self, buttons: &[PlacedButton<'_>]) -> Result<(), WebViewError> {
        self.handle.send_ipc(KIND_LAYOUT, &layout_payload(buttons))?;
        Ok(())
    }
}

pub fn layout_payload(buttons: &[PlacedButton<'_>]) -> serde_json::Value {
    let rects: Vec<ButtonRect> = buttons
        .iter()
        .map(|p| ButtonRect {
            action: p.button.on_click,
            x: p.rect.x,
            y: p.rect.y,
            width: p.rect.width,
            height: p.rect.height,
        })
        .collect();
    serde_json::to_value(rects).unwrap_or(serde_json::Value::Null)
}

/// JSON payload for the bar's `buttons` handler.
pub fn buttons_payload(buttons: &[NavigationButton]) -> serde_json::Value {
    let states: Vec<ButtonState<'_>> = buttons
        .iter()
        .map(|b| ButtonState {
            action: b.on_click,
            label: &b.label,
            enabled: b.enabled,
        })
        .collect();
    serde_json::to_value(states).unwrap_or(serde_json::Value::Null)
}

impl NavBarView for WryNavBar {
    fn update_buttons(&mut self, buttons: &[NavigationButton]) -> Result<(), WebViewError> {
        self.handle.send_ipc(KIND_BUTTONS, &buttons_payload(buttons))?;
        Ok(())
    }

    fn show_status(&mut self, message: Option<&str>) -> Result<(), WebViewError> {
        let payload = match message {
            Some(m) => serde_json::Value::String(m.to_string()),
            None => serde_json::Value::Null,
        };
        self.handle.send_ipc(KIND_STATUS, &payload)?;
        Ok(())
    }
}

//! Navigation button factory.

use webwrap_common::{Color, NavAction};

/// Styling for a new button. Unset fields take the factory defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonOptions {
    pub label: String,
    pub color: Color,
    pub corner_radius: f64,
    pub text_color: Color,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            label: "Button".into(),
            color: Color::ACCENT_PINK,
            corner_radius: 10.0,
            text_color: Color::WHITE,
        }
    }
}

/// A styled, clickable bar button.
///
/// `on_click` is the action dispatched when the button is pressed; the
/// controller decides whether a press takes effect.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationButton {
    pub label: String,
    pub color: Color,
    pub corner_radius: f64,
    pub text_color: Color,
    pub enabled: bool,
    pub on_click: NavAction,
}

impl NavigationButton {
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Build an enabled button with the given styling and click action.
pub fn make_button(options: ButtonOptions, on_click: NavAction) -> NavigationButton {
    NavigationButton {
        label: options.label,
        color: options.color,
        corner_radius: options.corner_radius,
        text_color: options.text_color,
        enabled: true,
        on_click,
    }
}

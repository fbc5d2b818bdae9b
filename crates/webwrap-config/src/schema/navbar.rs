//! Navigation bar geometry and button styling.

use serde::{Deserialize, Serialize};

/// Visual style shared by the three navigation buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyleConfig {
    /// Button fill, hex `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    pub text_color: String,
    /// Corner radius in logical units (valid range: 0-15).
    pub corner_radius: f64,
}

impl Default for ButtonStyleConfig {
    fn default() -> Self {
        Self {
            color: "#ff3399".into(),
            text_color: "#ffffff".into(),
            corner_radius: 10.0,
        }
    }
}

/// The strip above the content view holding Back / Home / Forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBarConfig {
    /// Bar height in logical units (valid range: 40-200).
    pub height: u32,
    /// Bar background.
    pub fill: String,
    /// Bar border color.
    pub border: String,
    pub border_width: u32,
    pub button_height: u32,
    /// Distance of Back / Forward from the bar edges.
    pub edge_margin: u32,
    /// Width of Back and Forward.
    pub side_button_width: u32,
    pub home_button_width: u32,
    pub button: ButtonStyleConfig,
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            height: 70,
            fill: "#ececec".into(),
            border: "#8a8a8e".into(),
            border_width: 1,
            button_height: 30,
            edge_margin: 30,
            side_button_width: 80,
            home_button_width: 120,
            button: ButtonStyleConfig::default(),
        }
    }
}

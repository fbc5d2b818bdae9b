//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Root window settings.
///
/// The shell presents a single fixed-size window; `resizable` exists for
/// development and keeps the bar/content split when enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Logical width (valid range: 320-4096).
    pub width: u32,
    /// Logical height (valid range: 240-4096).
    pub height: u32,
    pub resizable: bool,
    /// Replace the title with the loaded document's title.
    pub dynamic_title: bool,
    /// Root view background, hex `#rrggbb` or `#rrggbbaa`.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "WebWrap".into(),
            width: 836,
            height: 644,
            resizable: false,
            dynamic_title: false,
            background: "#ffffff".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "WebWrap");
        assert_eq!(config.width, 836);
        assert_eq!(config.height, 644);
        assert!(!config.resizable);
        assert!(!config.dynamic_title);
        assert_eq!(config.background, "#ffffff");
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Intranet"
dynamic_title = true
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Intranet");
        assert!(config.dynamic_title);
        // Defaults preserved
        assert_eq!(config.width, 836);
        assert_eq!(config.height, 644);
    }
}

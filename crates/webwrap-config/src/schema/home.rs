//! Home page configuration.

use serde::{Deserialize, Serialize};

/// The page loaded on startup and whenever Home is pressed.
///
/// Leaving `url` unset is allowed: the shell then starts with an empty
/// content view and the Home button does nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub url: Option<String>,
}

impl HomeConfig {
    /// The configured URL with surrounding whitespace removed, if non-empty.
    pub fn url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}

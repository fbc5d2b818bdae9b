//! Button label selection.

use serde::{Deserialize, Serialize};

/// Chooses the locale for button labels and optionally overrides single keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Locale tag, e.g. `en`, `de-CH`. Unknown locales fall back to `en`.
    pub locale: String,
    pub back: Option<String>,
    pub home: Option<String>,
    pub forward: Option<String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            locale: "en".into(),
            back: None,
            home: None,
            forward: None,
        }
    }
}

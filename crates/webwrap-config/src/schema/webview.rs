//! Content webview behavior.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSection {
    /// Enable the engine's inspector (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// URL schemes the content view may navigate to.
    pub allowed_schemes: Vec<String>,
}

impl Default for WebViewSection {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            allowed_schemes: vec!["https".into(), "http".into(), "about".into()],
        }
    }
}

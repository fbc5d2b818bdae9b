use serde::{Deserialize, Serialize};

/// A navigation-bar action. Each bar button dispatches exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    Back,
    Home,
    Forward,
}

impl NavAction {
    /// All actions in bar order, left to right.
    pub const ALL: [NavAction; 3] = [NavAction::Back, NavAction::Home, NavAction::Forward];

    /// Stable identifier used for localization keys, DOM ids and IPC payloads.
    pub fn key(&self) -> &'static str {
        match self {
            NavAction::Back => "back",
            NavAction::Home => "home",
            NavAction::Forward => "forward",
        }
    }

    /// Parse an identifier produced by [`NavAction::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "back" => Some(NavAction::Back),
            "home" => Some(NavAction::Home),
            "forward" => Some(NavAction::Forward),
            _ => None,
        }
    }

    /// Whether the action depends on session history being non-empty in its direction.
    pub fn is_history_traversal(&self) -> bool {
        !matches!(self, NavAction::Home)
    }
}

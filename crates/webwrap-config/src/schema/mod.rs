//! Configuration schema types for WebWrap.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod home;
mod labels;
mod logging;
mod navbar;
mod webview;
mod window;

pub use home::*;
pub use labels::*;
pub use logging::*;
pub use navbar::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebWrapConfig {
    pub home: HomeConfig,
    pub window: WindowConfig,
    pub navbar: NavBarConfig,
    pub labels: LabelsConfig,
    pub webview: WebViewSection,
    pub logging: LoggingConfig,
}

//! WebWrap configuration system.
//!
//! TOML-based configuration with full validation and localized button
//! labels. All config sections use defaults so partial configs work out
//! of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use webwrap_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod strings;
pub mod toml_loader;
pub mod validation;

pub use schema::{WebWrapConfig, CONFIG_SCHEMA_VERSION};
pub use strings::Strings;

use std::path::Path;

use webwrap_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created with a commented template if missing; an
/// explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<WebWrapConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WebWrapConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

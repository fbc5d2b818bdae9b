//! Full configuration validation.
//!
//! Validates numeric ranges, layout fit, color formats and the home URL.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`. [`repair`] resets the
//! offending fields of an invalid config one by one.

mod colors;
mod geometry;
mod helpers;
mod misc;
mod repair;


pub use repair::repair;

use crate::schema::WebWrapConfig;
use webwrap_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WebWrapConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    geometry::validate_window(&mut errors, config);
    geometry::validate_navbar(&mut errors, config);
    colors::validate_colors(&mut errors, config);
    misc::validate_home(&mut errors, config);
    misc::validate_webview(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

pub mod actions;
pub mod errors;
pub mod types;

pub use actions::NavAction;
pub use errors::{ConfigError, WebWrapError};
pub use types::{Color, Rect};

pub type Result<T> = std::result::Result<T, WebWrapError>;

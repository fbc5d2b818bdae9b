//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the webview event sink and the main view
//! controller.

mod bounds;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod title;
mod types;

pub use core::WebWrapApp;

//! Window and navigation-bar geometry validation.

use crate::schema::WebWrapConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) const WINDOW_WIDTH: (u32, u32) = (320, 4096);
pub(crate) const WINDOW_HEIGHT: (u32, u32) = (240, 4096);
pub(crate) const BAR_HEIGHT: (u32, u32) = (40, 200);
pub(crate) const BORDER_WIDTH: (u32, u32) = (0, 10);
pub(crate) const BUTTON_WIDTH: (u32, u32) = (24, 400);
pub(crate) const CORNER_RADIUS: (f64, f64) = (0.0, 15.0);

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &WebWrapConfig) {
    let (min_w, max_w) = WINDOW_WIDTH;
    let (min_h, max_h) = WINDOW_HEIGHT;
    validate_range(errors, "window.width", config.window.width, min_w, max_w);
    validate_range(errors, "window.height", config.window.height, min_h, max_h);
}

/// The bar must leave room for content, and the three buttons must fit side
/// by side without overlapping.
pub(crate) fn validate_navbar(errors: &mut Vec<String>, config: &WebWrapConfig) {
    let nav = &config.navbar;
    validate_range(errors, "navbar.height", nav.height, BAR_HEIGHT.0, BAR_HEIGHT.1);
    validate_range(
        errors,
        "navbar.border_width",
        nav.border_width,
        BORDER_WIDTH.0,
        BORDER_WIDTH.1,
    );
    validate_range(
        errors,
        "navbar.side_button_width",
        nav.side_button_width,
        BUTTON_WIDTH.0,
        BUTTON_WIDTH.1,
    );
    validate_range(
        errors,
        "navbar.home_button_width",
        nav.home_button_width,
        BUTTON_WIDTH.0,
        BUTTON_WIDTH.1,
    );
    validate_range_f64(
        errors,
        "navbar.button.corner_radius",
        nav.button.corner_radius,
        CORNER_RADIUS.0,
        CORNER_RADIUS.1,
    );

    if !button_height_fits(config) {
        errors.push(format!(
            "navbar.button_height = {} must be between 1 and navbar.height ({})",
            nav.button_height, nav.height
        ));
    }

    if !bar_leaves_content(config) {
        errors.push(format!(
            "navbar.height = {} leaves no room for content in a {}-unit window",
            nav.height, config.window.height
        ));
    }

    if !buttons_fit(config) {
        errors.push(format!(
            "navbar buttons need {} units but window.width is {}",
            buttons_width(config),
            config.window.width
        ));
    }
}

pub(crate) fn button_height_fits(config: &WebWrapConfig) -> bool {
    let nav = &config.navbar;
    nav.button_height > 0 && nav.button_height <= nav.height
}

pub(crate) fn bar_leaves_content(config: &WebWrapConfig) -> bool {
    config.navbar.height < config.window.height
}

/// Back and Forward hug the edges, Home is centred: each half of the bar
/// holds one side button plus half of Home.
fn buttons_width(config: &WebWrapConfig) -> u32 {
    let nav = &config.navbar;
    (nav.edge_margin + nav.side_button_width + nav.home_button_width / 2) * 2
}

pub(crate) fn buttons_fit(config: &WebWrapConfig) -> bool {
    buttons_width(config) <= config.window.width
}

//! Field-level repair of an invalid config.
//!
//! Each field that fails validation is reset to its default on its own, so
//! one bad value never discards the rest of the file.

use webwrap_common::Color;

use crate::schema::WebWrapConfig;

use super::colors::color_fields;
use super::geometry::{
    bar_leaves_content, button_height_fits, buttons_fit, BAR_HEIGHT, BORDER_WIDTH, BUTTON_WIDTH,
    CORNER_RADIUS, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use super::misc::{home_is_loadable, is_valid_scheme};

/// Reset every invalid field to its default. Returns the config paths of the
/// fields that were reset, in the order they were checked.
pub fn repair(config: &mut WebWrapConfig) -> Vec<&'static str> {
    let defaults = WebWrapConfig::default();
    let mut reset = Vec::new();

    let mut fix_u32 = |name: &'static str, value: &mut u32, default: u32, (min, max): (u32, u32)| {
        if *value < min || *value > max {
            *value = default;
            reset.push(name);
        }
    };
    fix_u32(
        "window.width",
        &mut config.window.width,
        defaults.window.width,
        WINDOW_WIDTH,
    );
    fix_u32(
        "window.height",
        &mut config.window.height,
        defaults.window.height,
        WINDOW_HEIGHT,
    );
    let nav = &mut config.navbar;
    let nav_defaults = &defaults.navbar;
    fix_u32("navbar.height", &mut nav.height, nav_defaults.height, BAR_HEIGHT);
    fix_u32(
        "navbar.border_width",
        &mut nav.border_width,
        nav_defaults.border_width,
        BORDER_WIDTH,
    );
    fix_u32(
        "navbar.side_button_width",
        &mut nav.side_button_width,
        nav_defaults.side_button_width,
        BUTTON_WIDTH,
    );
    fix_u32(
        "navbar.home_button_width",
        &mut nav.home_button_width,
        nav_defaults.home_button_width,
        BUTTON_WIDTH,
    );

    let (min_r, max_r) = CORNER_RADIUS;
    if !(min_r..=max_r).contains(&nav.button.corner_radius) {
        nav.button.corner_radius = nav_defaults.button.corner_radius;
        reset.push("navbar.button.corner_radius");
    }

    // Cross-field rules: reset the dependent field first, then widen the
    // reset until the rule holds.
    if !bar_leaves_content(config) {
        config.navbar.height = defaults.navbar.height;
        reset.push("navbar.height");
        if !bar_leaves_content(config) {
            config.window.height = defaults.window.height;
            reset.push("window.height");
        }
    }
    if !button_height_fits(config) {
        config.navbar.button_height = defaults.navbar.button_height.min(config.navbar.height);
        reset.push("navbar.button_height");
    }
    if !buttons_fit(config) {
        config.navbar.edge_margin = defaults.navbar.edge_margin;
        config.navbar.side_button_width = defaults.navbar.side_button_width;
        config.navbar.home_button_width = defaults.navbar.home_button_width;
        reset.push("navbar.edge_margin");
        reset.push("navbar.side_button_width");
        reset.push("navbar.home_button_width");
        if !buttons_fit(config) {
            config.window.width = defaults.window.width;
            reset.push("window.width");
        }
    }

    let default_colors = {
        let mut d = defaults.clone();
        color_fields(&mut d).map(|(_, value)| value.clone())
    };
    for ((name, value), default) in color_fields(config).into_iter().zip(default_colors) {
        if Color::from_hex(value).is_none() {
            *value = default;
            reset.push(name);
        }
    }

    let schemes = &mut config.webview.allowed_schemes;
    if schemes.is_empty() || !schemes.iter().all(|s| is_valid_scheme(s)) {
        schemes.retain(|s| is_valid_scheme(s));
        if schemes.is_empty() {
            schemes.clone_from(&defaults.webview.allowed_schemes);
        }
        reset.push("webview.allowed_schemes");
    }

    if !home_is_loadable(config) {
        config.home.url = None;
        reset.push("home.url");
    }

    reset
}

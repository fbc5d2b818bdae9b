//! Color format validation.

use webwrap_common::Color;

use crate::schema::WebWrapConfig;

/// Every color field, by config path.
pub(crate) fn color_fields(config: &mut WebWrapConfig) -> [(&'static str, &mut String); 5] {
    [
        ("window.background", &mut config.window.background),
        ("navbar.fill", &mut config.navbar.fill),
        ("navbar.border", &mut config.navbar.border),
        ("navbar.button.color", &mut config.navbar.button.color),
        ("navbar.button.text_color", &mut config.navbar.button.text_color),
    ]
}

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &WebWrapConfig) {
    let fields = [
        ("window.background", &config.window.background),
        ("navbar.fill", &config.navbar.fill),
        ("navbar.border", &config.navbar.border),
        ("navbar.button.color", &config.navbar.button.color),
        ("navbar.button.text_color", &config.navbar.button.text_color),
    ];
    for (name, value) in fields {
        if Color::from_hex(value).is_none() {
            errors.push(format!("{name} = {value:?} is not a hex color"));
        }
    }
}

//! Commented default config written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r##"# WebWrap Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[home]
# Page loaded on startup and by the Home button. Leave unset for an empty view.
# url = "https://example.com"

[window]
# title = "WebWrap"
# width = 836            # 320-4096
# height = 644           # 240-4096
# resizable = false
# dynamic_title = false  # follow the page title
# background = "#ffffff"

[navbar]
# height = 70            # 40-200
# fill = "#ececec"
# border = "#8a8a8e"
# border_width = 1
# button_height = 30
# edge_margin = 30
# side_button_width = 80
# home_button_width = 120

[navbar.button]
# color = "#ff3399"
# text_color = "#ffffff"
# corner_radius = 10.0   # 0-15

[labels]
# locale = "en"          # en, de, fr, es, ru
# back = "Back"
# home = "Home"
# forward = "Forward"

[webview]
# devtools = false
# user_agent = "WebWrap/0.1"
# allowed_schemes = ["https", "http", "about"]

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}

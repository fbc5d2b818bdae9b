//! HTML rendition of the navigation bar.

use std::fmt::Write;

use webwrap_common::{Color, Rect};

use crate::button::NavigationButton;
use crate::ipc::{KIND_BAR_READY, KIND_BUTTONS, KIND_LAYOUT, KIND_NAV_CLICK, KIND_STATUS};

/// Bar chrome around the buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    pub fill: Color,
    pub border: Color,
    pub border_width: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba(236, 236, 236, 255),
            border: Color::from_rgba(138, 138, 142, 255),
            border_width: 1.0,
        }
    }
}

/// A button and its rect relative to the bar's top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct PlacedButton<'a> {
    pub button: &'a NavigationButton,
    pub rect: Rect,
}

/// Render the complete bar document.
pub fn render_html(style: &BarStyle, buttons: &[PlacedButton<'_>]) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><style>\n");
    let _ = write!(
        html,
        "html, body {{ margin: 0; height: 100%; overflow: hidden; \
         font: 13px -apple-system, BlinkMacSystemFont, \"Segoe UI\", sans-serif; \
         user-select: none; -webkit-user-select: none; }}\n\
         body {{ background: {fill}; box-sizing: border-box; \
         border: {bw}px solid {border}; position: relative; }}\n",
        fill = style.fill.to_css(),
        border = style.border.to_css(),
        bw = style.border_width,
    );
    html.push_str(
        ".nav-btn { position: absolute; border: none; padding: 0; margin: 0; \
         overflow: hidden; cursor: pointer; font: inherit; }\n\
         .nav-btn:disabled { opacity: 0.45; cursor: default; }\n\
         .nav-btn:not(:disabled):active { filter: brightness(0.85); }\n\
         #status { position: absolute; left: 0; right: 0; bottom: 2px; \
         text-align: center; font-size: 10px; color: #b00020; \
         white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }\n",
    );
    html.push_str("</style></head><body>\n");

    for placed in buttons {
        let b = placed.button;
        let r = placed.rect;
        let _ = writeln!(
            html,
            "<button id=\"nav-{key}\" class=\"nav-btn\" data-action=\"{key}\"{disabled} \
             style=\"left: {x}px; top: {y}px; width: {w}px; height: {h}px; \
             background: {bg}; color: {fg}; border-radius: {radius}px;\">{label}</button>",
            key = b.on_click.key(),
            disabled = if b.enabled { "" } else { " disabled" },
            x = r.x,
            y = r.y,
            w = r.width,
            h = r.height,
            bg = b.color.to_css(),
            fg = b.text_color.to_css(),
            radius = b.corner_radius,
            label = escape_html(&b.label),
        );
    }

    html.push_str("<div id=\"status\"></div>\n<script>\n");
    let _ = write!(
        html,
        r#"(function() {{
    var ipc = window.webwrap.ipc;
    document.querySelectorAll('.nav-btn').forEach(function(btn) {{
        btn.addEventListener('click', function() {{
            if (!btn.disabled) {{
                ipc.send('{click}', btn.dataset.action);
            }}
        }});
    }});
    ipc.on('{buttons}', function(states) {{
        (states || []).forEach(function(s) {{
            var btn = document.getElementById('nav-' + s.action);
            if (btn) {{
                btn.disabled = !s.enabled;
                btn.textContent = s.label;
            }}
        }});
    }});
    ipc.on('{layout}', function(rects) {{
        (rects || []).forEach(function(r) {{
            var btn = document.getElementById('nav-' + r.action);
            if (btn) {{
                btn.style.left = r.x + 'px';
                btn.style.top = r.y + 'px';
                btn.style.width = r.width + 'px';
                btn.style.height = r.height + 'px';
            }}
        }});
    }});
    ipc.on('{status}', function(message) {{
        document.getElementById('status').textContent = message || '';
    }});
    ipc.send('{ready}', null);
}})();
"#,
        click = KIND_NAV_CLICK,
        buttons = KIND_BUTTONS,
        status = KIND_STATUS,
        layout = KIND_LAYOUT,
        ready = KIND_BAR_READY,
    );
    html.push_str("</script></body></html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{make_button, ButtonOptions};
    use webwrap_common::NavAction;

    fn button(label: &str, action: NavAction, enabled: bool) -> NavigationButton {
        let mut b = make_button(
            ButtonOptions {
                label: label.into(),
                ..Default::default()
            },
            action,
        );
        b.set_enabled(enabled);
        b
    }

    #[test]
    fn renders_each_button_with_geometry_and_style() {
        let back = button("Back", NavAction::Back, false);
        let home = button("Home", NavAction::Home, true);
        let html = render_html(
            &BarStyle::default(),
            &[
                PlacedButton {
                    button: &back,
                    rect: Rect::new(30.0, 20.0, 80.0, 30.0),
                },
                PlacedButton {
                    button: &home,
                    rect: Rect::new(358.0, 20.0, 120.0, 30.0),
                },
            ],
        );

        assert!(html.contains("id=\"nav-back\""));
        assert!(html.contains("id=\"nav-home\""));
        assert!(html.contains("left: 30px; top: 20px; width: 80px; height: 30px;"));
        assert!(html.contains("left: 358px; top: 20px; width: 120px;"));
        assert!(html.contains("background: rgba(255, 51, 153, 1.000)"));
        assert!(html.contains("border-radius: 10px;"));
        assert!(html.contains(">Back</button>"));
    }

    #[test]
    fn disabled_buttons_carry_attribute() {
        let back = button("Back", NavAction::Back, false);
        let home = button("Home", NavAction::Home, true);
        let html = render_html(
            &BarStyle::default(),
            &[
                PlacedButton {
                    button: &back,
                    rect: Rect::default(),
                },
                PlacedButton {
                    button: &home,
                    rect: Rect::default(),
                },
            ],
        );
        assert!(html.contains("data-action=\"back\" disabled"));
        assert!(!html.contains("data-action=\"home\" disabled"));
    }

    #[test]
    fn labels_are_escaped() {
        let b = button("<b>&\"x\"</b>", NavAction::Home, true);
        let html = render_html(
            &BarStyle::default(),
            &[PlacedButton {
                button: &b,
                rect: Rect::default(),
            }],
        );
        assert!(html.contains("&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>&"));
    }

    #[test]
    fn script_wires_ipc_kinds() {
        let html = render_html(&BarStyle::default(), &[]);
        assert!(html.contains("ipc.send('nav_click', btn.dataset.action)"));
        assert!(html.contains("ipc.on('buttons'"));
        assert!(html.contains("ipc.on('status'"));
        assert!(html.contains("ipc.send('bar_ready', null)"));
        assert!(html.contains("id=\"status\""));
    }

    #[test]
    fn bar_chrome_uses_style() {
        let style = BarStyle {
            fill: Color::WHITE,
            border: Color::from_rgba(0, 0, 0, 255),
            border_width: 2.0,
        };
        let html = render_html(&style, &[]);
        assert!(html.contains("background: rgba(255, 255, 255, 1.000)"));
        assert!(html.contains("border: 2px solid rgba(0, 0, 0, 1.000)"));
    }
}

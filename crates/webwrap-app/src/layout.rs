//! Fixed shell geometry: a top bar with three buttons over the content view.

use webwrap_common::{NavAction, Rect};
use webwrap_config::schema::NavBarConfig;

// =============================================================================
// LAYOUT
// =============================================================================

/// All rects in window-relative logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellLayout {
    pub bar: Rect,
    pub content: Rect,
    pub back: Rect,
    pub home: Rect,
    pub forward: Rect,
}

impl ShellLayout {
    /// Lay out a window of `width` x `height`. Back hugs the left edge,
    /// Forward the right, Home is centred; all three are vertically centred
    /// in the bar. The content view takes whatever height is left.
    pub fn compute(width: f64, height: f64, navbar: &NavBarConfig) -> Self {
        let bar_h = f64::from(navbar.height);
        let btn_h = f64::from(navbar.button_height);
        let margin = f64::from(navbar.edge_margin);
        let side_w = f64::from(navbar.side_button_width);
        let home_w = f64::from(navbar.home_button_width);
        let y = (bar_h - btn_h) / 2.0;

        Self {
            bar: Rect::new(0.0, 0.0, width, bar_h),
            content: Rect::new(0.0, bar_h, width, (height - bar_h).max(0.0)),
            back: Rect::new(margin, y, side_w, btn_h),
            home: Rect::new(width / 2.0 - home_w / 2.0, y, home_w, btn_h),
            forward: Rect::new(width - margin - side_w, y, side_w, btn_h),
        }
    }

    /// Button rect, relative to the bar.
    pub fn button(&self, action: NavAction) -> Rect {
        match action {
            NavAction::Back => self.back,
            NavAction::Home => self.home,
            NavAction::Forward => self.forward,
        }
    }
}

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a shell `Rect` (f64 logical coords) to a wry `Rect`.
pub fn to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Colors and sizes for the title bar.

use gpui::{Hsla, Rgba, hsla, rgb};

// Layout
pub const TITLE_BAR_HEIGHT: f32 = 40.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 14.0;

// macOS traffic lights
pub const MAC_BUTTON_SIZE: f32 = 12.0;
pub const MAC_BUTTON_GAP: f32 = 8.0;
pub const MAC_PADDING: f32 = 12.0;
pub const MAC_ICON_SIZE: f32 = 9.0;

// Windows caption buttons
pub const WIN_BUTTON_WIDTH: f32 = 46.0;
pub const WIN_BUTTON_HEIGHT: f32 = TITLE_BAR_HEIGHT;
pub const WIN_ICON_SIZE: f32 = 10.0;

pub fn title_bar_bg() -> Rgba {
    rgb(0x1e293b)
}

pub fn body_bg() -> Rgba {
    rgb(0x0f172a)
}

pub fn text_white() -> Rgba {
    rgb(0xf8fafc)
}

pub fn text_muted() -> Rgba {
    rgb(0x94a3b8)
}

pub fn mac_close() -> Rgba {
    rgb(0xff544d)
}

pub fn mac_close_pressed() -> Rgba {
    rgb(0xbf403a)
}

pub fn mac_minimize() -> Rgba {
    rgb(0xffbd2e)
}

pub fn mac_minimize_pressed() -> Rgba {
    rgb(0xbf9122)
}

pub fn mac_zoom() -> Rgba {
    rgb(0x28c93f)
}

pub fn mac_zoom_pressed() -> Rgba {
    rgb(0x1e9930)
}

/// Glyph color drawn on top of the traffic lights.
pub fn mac_icon() -> Rgba {
    rgb(0x4d0000)
}

pub fn win_hover() -> Hsla {
    hsla(0.0, 0.0, 1.0, 0.06)
}

pub fn win_pressed() -> Hsla {
    hsla(0.0, 0.0, 1.0, 0.1)
}

pub fn win_close_hover() -> Rgba {
    rgb(0xc42b1c)
}

pub fn win_close_pressed() -> Rgba {
    rgb(0xa52a1e)
}

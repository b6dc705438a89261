//! macOS traffic-light buttons.
//!
//! Icons appear only while the pointer is over the button row. The zoom
//! glyph follows the modifier key.

use gpui::{ClickEvent, Context, IntoElement, MouseButton, Rgba, div, prelude::*, px};
use titlebar_core::{ButtonView, MacButton, MacControls};

use crate::theme;
use crate::views::title_bar::TitleBarView;

pub fn render_mac_controls(
    controls: &MacControls,
    cx: &mut Context<TitleBarView>,
) -> impl IntoElement {
    let buttons: Vec<_> = controls
        .buttons()
        .into_iter()
        .map(|button_view| render_mac_button(button_view, cx))
        .collect();

    div()
        .id("mac-controls")
        .flex()
        .items_center()
        .gap(px(theme::MAC_BUTTON_GAP))
        .px(px(theme::MAC_PADDING))
        .h_full()
        .on_hover(cx.listener(|view, hovered: &bool, _, cx| {
            view.on_mac_hover(*hovered, cx);
        }))
        .children(buttons)
}

fn colors(button: MacButton) -> (Rgba, Rgba) {
    match button {
        MacButton::Close => (theme::mac_close(), theme::mac_close_pressed()),
        MacButton::Minimize => (theme::mac_minimize(), theme::mac_minimize_pressed()),
        MacButton::Zoom => (theme::mac_zoom(), theme::mac_zoom_pressed()),
    }
}

fn render_mac_button(
    button_view: ButtonView<MacButton>,
    cx: &mut Context<TitleBarView>,
) -> impl IntoElement + use<> {
    let button = button_view.button;
    let (color, pressed) = colors(button);

    div()
        .id(button.id())
        .size(px(theme::MAC_BUTTON_SIZE))
        .rounded_full()
        .bg(color)
        .active(move |style| style.bg(pressed))
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(theme::MAC_ICON_SIZE))
        .text_color(theme::mac_icon())
        // Keep the press from starting a window drag.
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .on_click(cx.listener(move |view, _: &ClickEvent, window, cx| {
            view.on_mac_click(button, window, cx);
        }))
        .when_some(button_view.icon, |this, icon| this.child(icon.glyph()))
}

//! Windows caption buttons, right-aligned in the title bar.

use gpui::{ClickEvent, Context, Hsla, IntoElement, MouseButton, div, prelude::*, px};
use titlebar_core::{ButtonView, WindowsButton, WindowsControls};

use crate::theme;
use crate::views::title_bar::TitleBarView;

pub fn render_windows_controls(
    controls: &WindowsControls,
    cx: &mut Context<TitleBarView>,
) -> impl IntoElement {
    let buttons: Vec<_> = controls
        .buttons()
        .into_iter()
        .map(|button_view| render_windows_button(button_view, cx))
        .collect();

    div()
        .id("windows-controls")
        .flex()
        .h_full()
        .children(buttons)
}

fn render_windows_button(
    button_view: ButtonView<WindowsButton>,
    cx: &mut Context<TitleBarView>,
) -> impl IntoElement + use<> {
    let button = button_view.button;
    let (hover, pressed): (Hsla, Hsla) = match button {
        WindowsButton::Close => (
            theme::win_close_hover().into(),
            theme::win_close_pressed().into(),
        ),
        WindowsButton::Minimize | WindowsButton::Maximize => {
            (theme::win_hover(), theme::win_pressed())
        }
    };

    div()
        .id(button.id())
        .w(px(theme::WIN_BUTTON_WIDTH))
        .h(px(theme::WIN_BUTTON_HEIGHT))
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(theme::WIN_ICON_SIZE))
        .text_color(theme::text_white())
        .hover(move |style| style.bg(hover))
        .active(move |style| style.bg(pressed))
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .on_click(cx.listener(move |view, _: &ClickEvent, window, cx| {
            view.on_windows_click(button, window, cx);
        }))
        .when_some(button_view.icon, |this, icon| this.child(icon.glyph()))
}

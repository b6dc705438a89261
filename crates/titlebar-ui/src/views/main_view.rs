//! Main view for titlebar-ui.
//!
//! Root view that stacks the title bar over a body. Holds focus so
//! modifier key changes reach the title bar.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, IntoElement, ModifiersChangedEvent, Render,
    SharedString, Window, div, prelude::*, px,
};
use titlebar_core::TitlebarConfig;

use crate::theme;
use crate::views::title_bar::TitleBarView;

pub struct MainView {
    title_bar: Entity<TitleBarView>,
    focus_handle: FocusHandle,
}

impl MainView {
    pub fn new(config: &TitlebarConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title = SharedString::from(config.window_title().to_string());
        let settings = config.settings();
        let os_override = config.os_override().map(str::to_string);

        let title_bar =
            cx.new(|cx| TitleBarView::new(title, settings, os_override, window, cx));

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            title_bar,
            focus_handle,
        }
    }

    fn on_modifiers_changed(
        &mut self,
        event: &ModifiersChangedEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let modifiers = event.modifiers;
        self.title_bar.update(cx, |title_bar, cx| {
            title_bar.on_modifiers_changed(&modifiers, cx);
        });
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let status = self.title_bar.read(cx).status_label();

        div()
            .track_focus(&self.focus_handle)
            .on_modifiers_changed(cx.listener(Self::on_modifiers_changed))
            .size_full()
            .flex()
            .flex_col()
            .bg(theme::body_bg())
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(theme::TEXT_BASE))
                    .text_color(theme::text_muted())
                    .child(status),
            )
    }
}

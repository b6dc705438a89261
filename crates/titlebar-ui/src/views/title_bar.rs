//! Title bar view.
//!
//! Owns the core [`TitleBar`] and bridges it to GPUI: the window handle is
//! recorded one frame after construction, OS detection runs on the
//! background executor, and resize notifications come from
//! `observe_window_bounds`.

use gpui::{
    AnyWindowHandle, Context, FontWeight, IntoElement, Modifiers, MouseButton, Render,
    SharedString, Task, Window, WindowControlArea, div, prelude::*, px,
};
use titlebar_core::{
    ControlSetKind, Detection, MacButton, ModifierState, OsType, PlatformError, Subscription,
    TitleBar, TitlebarSettings, WindowsButton,
};

use crate::actions;
use crate::theme;
use crate::views::{mac_controls, windows_controls};
use crate::window::slot_for;

pub struct TitleBarView {
    title: SharedString,
    bar: TitleBar,
    /// Set once the window bridge is up; requests before then are no-ops.
    handle: Option<AnyWindowHandle>,
    /// Handle to the OS detection task. Must be stored to prevent cancellation.
    _detect_task: Task<()>,
}

impl TitleBarView {
    pub fn new(
        title: SharedString,
        settings: TitlebarSettings,
        os_override: Option<String>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut bar = TitleBar::new(settings);
        bar.mount(&mut slot_for(None, window));

        cx.defer_in(window, |view, window, cx| view.attach_window(window, cx));

        let detect_task = cx.spawn_in(window, async move |this, cx: &mut gpui::AsyncWindowContext| {
            let result = cx
                .background_executor()
                .spawn(async move { actions::detect_os(os_override) })
                .await;

            if let Err(e) = this.update_in(cx, |view, window, cx| {
                view.on_os_detected(result, window, cx);
            }) {
                tracing::debug!(
                    event = "ui.title_bar.detection_dropped",
                    reason = "view_dropped",
                    error = ?e
                );
            }
        });

        Self {
            title,
            bar,
            handle: None,
            _detect_task: detect_task,
        }
    }

    /// Record the window handle, refresh state that needed it, and
    /// subscribe to resizes.
    fn attach_window(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let handle = window.window_handle();
        self.handle = Some(handle);
        tracing::debug!(event = "ui.title_bar.window_attached");

        self.bar.on_resized(&mut slot_for(self.handle, window));
        self.subscribe_if_needed(window, cx);
        cx.notify();
    }

    fn on_os_detected(
        &mut self,
        result: Result<OsType, PlatformError>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let mounted = self.bar.resolve(result, &mut slot_for(self.handle, window));
        if let Some(kind) = mounted {
            tracing::info!(event = "ui.title_bar.controls_swapped", kind = ?kind);
        }

        // Modifier state may have changed while nothing was listening.
        self.sync_modifiers(&window.modifiers());
        self.subscribe_if_needed(window, cx);
        cx.notify();
    }

    fn subscribe_if_needed(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.handle.is_none() || !self.bar.needs_resize_subscription() {
            return;
        }

        let observation = cx.observe_window_bounds(window, |view, window, cx| {
            view.on_window_resized(window, cx);
        });
        self.bar
            .attach_resize_subscription(Subscription::new(move || drop(observation)));
        tracing::debug!(event = "ui.title_bar.resize_subscribed");
    }

    fn on_window_resized(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.bar.on_resized(&mut slot_for(self.handle, window)) {
            cx.notify();
        }
    }

    pub fn on_modifiers_changed(&mut self, modifiers: &Modifiers, cx: &mut Context<Self>) {
        if self.sync_modifiers(modifiers) {
            cx.notify();
        }
    }

    fn sync_modifiers(&mut self, modifiers: &Modifiers) -> bool {
        self.bar
            .mac_mut()
            .is_some_and(|mac| mac.modifiers_changed(modifier_state(modifiers)))
    }

    pub fn on_mac_hover(&mut self, hovering: bool, cx: &mut Context<Self>) {
        if let Some(mac) = self.bar.mac_mut()
            && mac.set_hovering(hovering)
        {
            cx.notify();
        }
    }

    pub fn on_mac_click(&mut self, button: MacButton, window: &mut Window, cx: &mut Context<Self>) {
        // The click decides between zoom and fullscreen on the live modifier state.
        if self.sync_modifiers(&window.modifiers()) {
            cx.notify();
        }
        if let Some(mac) = self.bar.mac() {
            mac.click(button, &mut slot_for(self.handle, window));
        }
    }

    pub fn on_windows_click(
        &mut self,
        button: WindowsButton,
        window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        if let Some(controls) = self.bar.windows() {
            controls.click(button, &mut slot_for(self.handle, window));
        }
    }

    /// One-line description of the detection state, shown in the body.
    pub fn status_label(&self) -> SharedString {
        let selected = match self.bar.selected() {
            Some(ControlSetKind::Mac) => "macOS controls",
            Some(ControlSetKind::Windows) => "Windows controls",
            None => "no controls",
        };
        match self.bar.detection() {
            Detection::Pending => format!("Detecting OS… showing {selected}").into(),
            Detection::Resolved(os) => format!("Detected {os}; showing {selected}").into(),
            Detection::Failed => format!("OS detection failed; showing {selected}").into(),
        }
    }

    fn render_title(&self) -> impl IntoElement {
        div()
            .flex_1()
            .px(px(theme::MAC_PADDING))
            .text_size(px(theme::TEXT_SM))
            .font_weight(FontWeight::MEDIUM)
            .text_color(theme::text_muted())
            .child(self.title.clone())
    }
}

/// Map GPUI's modifier flags onto the tracker's state.
fn modifier_state(modifiers: &Modifiers) -> ModifierState {
    ModifierState {
        alt: modifiers.alt,
        shift: modifiers.shift,
        control: modifiers.control,
        meta: modifiers.platform,
    }
}

impl Render for TitleBarView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let bar = div()
            .id("title-bar")
            .w_full()
            .h(px(theme::TITLE_BAR_HEIGHT))
            .flex()
            .items_center()
            .bg(theme::title_bar_bg())
            .window_control_area(WindowControlArea::Drag)
            .on_mouse_down(MouseButton::Left, |_, window, _| window.start_window_move());

        match (self.bar.mac(), self.bar.windows()) {
            (Some(mac), _) => bar
                .child(mac_controls::render_mac_controls(mac, cx))
                .child(self.render_title()),
            (None, Some(windows)) => bar
                .child(self.render_title())
                .child(windows_controls::render_windows_controls(windows, cx)),
            (None, None) => bar.child(self.render_title()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_key_maps_to_meta() {
        let state = modifier_state(&Modifiers {
            platform: true,
            ..Default::default()
        });
        assert!(state.meta);
        assert!(!state.alt && !state.shift && !state.control);
    }

    #[test]
    fn test_alt_maps_to_alt() {
        let state = modifier_state(&Modifiers {
            alt: true,
            ..Default::default()
        });
        assert_eq!(
            state,
            ModifierState {
                alt: true,
                ..Default::default()
            }
        );
    }
}
